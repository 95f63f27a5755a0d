//! Flattens an [`EncodableRequest`] into the ordered key/value pairs the
//! Finvo API expects in multipart bodies.
//!
//! The API takes form-encoded nested data rather than JSON whenever binary
//! attachments ride along. Nested objects flatten to bracketed key paths
//! (`customer[name]`), line-item arrays to indexed paths
//! (`items[0][title]`), and the output order is deterministic: source
//! field order, then sub-key order, then array index order. Attachments
//! always come last under the wire name `file`.

use crate::error::FinvoError;
use crate::payload::EncodableRequest;
use crate::value::{ArrayElement, Attachment, EncodableValue};

/// One encoded multipart part: a text field or a raw binary blob.
#[derive(Debug, Clone, PartialEq)]
pub enum EncodedPart {
    Text(String),
    Blob(Attachment),
}

impl EncodedPart {
    /// The text content, if this is a text part. Test helper mostly.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            EncodedPart::Text(s) => Some(s),
            EncodedPart::Blob(_) => None,
        }
    }
}

/// Flatten a request into an ordered sequence of `(key, part)` pairs.
///
/// Pure and single-pass: no I/O, no mutation of the input, and encoding
/// the same request twice yields identical sequences. Repeated keys are
/// legal output (scalar/binary array elements re-use the array's key),
/// which is why this returns a `Vec` of pairs rather than a map.
///
/// Falsy sub-values inside nested objects (empty strings, `false`) are
/// dropped, never emitted as empty parts; top-level scalars are always
/// emitted as given. Attachment fields are hoisted to the end of the
/// sequence under the field name `file`, skipping empty blobs.
pub fn encode(request: &EncodableRequest) -> Result<Vec<(String, EncodedPart)>, FinvoError> {
    let mut parts = Vec::new();
    let mut attachments = Vec::new();

    for (name, value) in request.fields() {
        match value {
            EncodableValue::Scalar(scalar) => {
                parts.push((name.clone(), EncodedPart::Text(scalar.stringify())));
            }
            EncodableValue::Object(fields) => {
                for (sub, scalar) in fields {
                    if scalar.is_falsy() {
                        continue;
                    }
                    parts.push((
                        format!("{name}[{sub}]"),
                        EncodedPart::Text(scalar.stringify()),
                    ));
                }
            }
            EncodableValue::Array(elements) => {
                for (index, element) in elements.iter().enumerate() {
                    match element {
                        ArrayElement::Object(fields) => {
                            for (sub, scalar) in fields {
                                if scalar.is_falsy() {
                                    continue;
                                }
                                parts.push((
                                    format!("{name}[{index}][{sub}]"),
                                    EncodedPart::Text(scalar.stringify()),
                                ));
                            }
                        }
                        // Bare elements repeat the array's own key.
                        ArrayElement::Scalar(scalar) => {
                            parts.push((name.clone(), EncodedPart::Text(scalar.stringify())));
                        }
                        ArrayElement::Blob(blob) => {
                            if !blob.is_empty() {
                                parts.push((name.clone(), EncodedPart::Blob(blob.clone())));
                            }
                        }
                    }
                }
            }
            EncodableValue::Attachment(blob) => {
                if !blob.is_empty() {
                    attachments.push(blob.clone());
                }
            }
        }
    }

    for blob in attachments {
        parts.push(("file".to_string(), EncodedPart::Blob(blob)));
    }

    Ok(parts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Scalar;
    use chrono::{TimeZone, Utc};

    fn keys(parts: &[(String, EncodedPart)]) -> Vec<&str> {
        parts.iter().map(|(k, _)| k.as_str()).collect()
    }

    fn text(parts: &[(String, EncodedPart)], key: &str) -> String {
        parts
            .iter()
            .find(|(k, _)| k == key)
            .and_then(|(_, p)| p.as_text())
            .unwrap_or_else(|| panic!("no text part for key {key}"))
            .to_string()
    }

    #[test]
    fn test_scalar_only_request() {
        let request = EncodableRequest::new()
            .field("title", "Office rent")
            .field("amount", 4500i64)
            .field("recurring", true);

        let parts = encode(&request).unwrap();
        assert_eq!(keys(&parts), ["title", "amount", "recurring"]);
        assert_eq!(text(&parts, "title"), "Office rent");
        assert_eq!(text(&parts, "amount"), "4500");
        assert_eq!(text(&parts, "recurring"), "true");
    }

    #[test]
    fn test_absent_fields_skipped() {
        let request = EncodableRequest::new()
            .field("title", "Expense")
            .field_opt("notes", None::<String>);

        let parts = encode(&request).unwrap();
        assert_eq!(keys(&parts), ["title"]);
    }

    #[test]
    fn test_object_flattens_to_bracketed_keys() {
        let request = EncodableRequest::new().object(
            "customer",
            vec![
                ("name", Scalar::from("John Doe")),
                ("email", Scalar::from("j@x.com")),
            ],
        );

        let parts = encode(&request).unwrap();
        assert_eq!(keys(&parts), ["customer[name]", "customer[email]"]);
    }

    #[test]
    fn test_falsy_object_sub_values_dropped() {
        let request = EncodableRequest::new().object(
            "customer",
            vec![
                ("name", Scalar::from("John Doe")),
                ("trn", Scalar::from("")),
                ("vip", Scalar::from(false)),
                ("balance", Scalar::from(0i64)),
            ],
        );

        let parts = encode(&request).unwrap();
        // Empty string and false vanish; numeric zero is a real value.
        assert_eq!(keys(&parts), ["customer[name]", "customer[balance]"]);
        assert_eq!(text(&parts, "customer[balance]"), "0");
    }

    #[test]
    fn test_array_of_objects_indexed_keys() {
        let request = EncodableRequest::new().array(
            "items",
            vec![
                ArrayElement::Object(vec![
                    ("title".to_string(), Scalar::from("Item 1")),
                    ("quantity".to_string(), Scalar::from(1i64)),
                ]),
                ArrayElement::Object(vec![
                    ("title".to_string(), Scalar::from("Item 2")),
                    ("quantity".to_string(), Scalar::from(3i64)),
                ]),
            ],
        );

        let parts = encode(&request).unwrap();
        assert_eq!(
            keys(&parts),
            [
                "items[0][title]",
                "items[0][quantity]",
                "items[1][title]",
                "items[1][quantity]",
            ]
        );
        assert_eq!(text(&parts, "items[1][quantity]"), "3");
    }

    #[test]
    fn test_empty_array_emits_nothing() {
        let request = EncodableRequest::new()
            .field("title", "Invoice")
            .array("items", vec![]);

        let parts = encode(&request).unwrap();
        assert_eq!(keys(&parts), ["title"]);
    }

    #[test]
    fn test_scalar_array_elements_repeat_key() {
        let request = EncodableRequest::new().array(
            "tags",
            vec![
                ArrayElement::Scalar(Scalar::from("rent")),
                ArrayElement::Scalar(Scalar::from("office")),
            ],
        );

        let parts = encode(&request).unwrap();
        assert_eq!(keys(&parts), ["tags", "tags"]);
        assert_eq!(parts[0].1, EncodedPart::Text("rent".to_string()));
        assert_eq!(parts[1].1, EncodedPart::Text("office".to_string()));
    }

    #[test]
    fn test_binary_array_elements_interleave_in_order() {
        let request = EncodableRequest::new().array(
            "receipts",
            vec![
                ArrayElement::Scalar(Scalar::from("taxi")),
                ArrayElement::Blob(Attachment::new("taxi.pdf", &b"%PDF-1.4"[..])),
                ArrayElement::Scalar(Scalar::from("hotel")),
            ],
        );

        let parts = encode(&request).unwrap();
        assert_eq!(keys(&parts), ["receipts", "receipts", "receipts"]);
        assert!(matches!(parts[1].1, EncodedPart::Blob(_)));
    }

    #[test]
    fn test_attachment_remapped_to_file_and_last() {
        let request = EncodableRequest::new()
            .attachment("logo", Some(Attachment::new("logo.png", &b"\x89PNG"[..])))
            .field("title", "Invoice");

        let parts = encode(&request).unwrap();
        // Declared first, emitted last, under the wire name.
        assert_eq!(keys(&parts), ["title", "file"]);
        assert!(matches!(parts[1].1, EncodedPart::Blob(_)));
    }

    #[test]
    fn test_empty_attachment_skipped() {
        let request = EncodableRequest::new()
            .field("title", "Invoice")
            .attachment("logo", Some(Attachment::new("logo.png", Vec::new())));

        let parts = encode(&request).unwrap();
        assert_eq!(keys(&parts), ["title"]);
    }

    #[test]
    fn test_datetime_renders_iso8601() {
        let due = Utc.with_ymd_and_hms(2025, 6, 23, 0, 0, 0).unwrap();
        let request = EncodableRequest::new().field("due_date", due);

        let parts = encode(&request).unwrap();
        assert_eq!(text(&parts, "due_date"), "2025-06-23T00:00:00.000Z");
    }

    #[test]
    fn test_encoding_is_idempotent() {
        let request = EncodableRequest::new()
            .field("title", "Payment")
            .object("customer", vec![("name", Scalar::from("John Doe"))])
            .array(
                "items",
                vec![ArrayElement::Object(vec![(
                    "title".to_string(),
                    Scalar::from("Item 1"),
                )])],
            )
            .attachment("file", Some(Attachment::new("a.bin", &b"\x00\x01"[..])));

        assert_eq!(encode(&request).unwrap(), encode(&request).unwrap());
    }

    // The worked example from the API docs: nested customer, one line
    // item, empty trn dropped, logo hoisted to a trailing `file` part.
    #[test]
    fn test_full_vendor_payment_shape() {
        let request = EncodableRequest::new()
            .field("title", "Vendor Payment")
            .object(
                "customer",
                vec![
                    ("name", Scalar::from("John Doe")),
                    ("email", Scalar::from("j@x.com")),
                    ("trn", Scalar::from("")),
                    ("mobile", Scalar::from("123")),
                ],
            )
            .array(
                "items",
                vec![ArrayElement::Object(vec![
                    ("title".to_string(), Scalar::from("Item 1")),
                    ("quantity".to_string(), Scalar::from(1i64)),
                    ("rate".to_string(), Scalar::from(100i64)),
                ])],
            )
            .attachment("logo", Some(Attachment::new("logo.png", &b"\x89PNG"[..])));

        let parts = encode(&request).unwrap();
        assert_eq!(
            keys(&parts),
            [
                "title",
                "customer[name]",
                "customer[email]",
                "customer[mobile]",
                "items[0][title]",
                "items[0][quantity]",
                "items[0][rate]",
                "file",
            ]
        );
        assert_eq!(text(&parts, "title"), "Vendor Payment");
        assert_eq!(text(&parts, "customer[email]"), "j@x.com");
        assert_eq!(text(&parts, "items[0][rate]"), "100");
        assert!(matches!(parts.last().unwrap().1, EncodedPart::Blob(_)));
    }
}
