use crate::value::{ArrayElement, Attachment, EncodableValue, Scalar};

/// A request payload prior to wire serialization.
///
/// An insertion-ordered list of named fields, built synchronously from
/// caller-supplied data immediately before a single network call and
/// discarded after encoding. Field order determines encoded output order.
///
/// Absent fields are expressed by not inserting them: [`field_opt`] with
/// `None` is a no-op, so optional params never show up as empty parts.
///
/// [`field_opt`]: EncodableRequest::field_opt
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EncodableRequest {
    fields: Vec<(String, EncodableValue)>,
}

impl EncodableRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a top-level scalar field.
    pub fn field(mut self, name: impl Into<String>, value: impl Into<Scalar>) -> Self {
        self.fields
            .push((name.into(), EncodableValue::Scalar(value.into())));
        self
    }

    /// Append a top-level scalar field if the value is present.
    pub fn field_opt<T: Into<Scalar>>(self, name: impl Into<String>, value: Option<T>) -> Self {
        match value {
            Some(v) => self.field(name, v),
            None => self,
        }
    }

    /// Append a flat nested object (e.g. a customer or biller record).
    /// Sub-key order is preserved in the encoded output.
    pub fn object<K: Into<String>>(
        mut self,
        name: impl Into<String>,
        fields: Vec<(K, Scalar)>,
    ) -> Self {
        let fields = fields.into_iter().map(|(k, v)| (k.into(), v)).collect();
        self.fields
            .push((name.into(), EncodableValue::Object(fields)));
        self
    }

    /// Append an ordered array field (e.g. invoice line items).
    pub fn array(mut self, name: impl Into<String>, elements: Vec<ArrayElement>) -> Self {
        self.fields
            .push((name.into(), EncodableValue::Array(elements)));
        self
    }

    /// Append a binary attachment if present. The encoder emits it last
    /// under the wire field name `file` regardless of the name given here.
    pub fn attachment(mut self, name: impl Into<String>, attachment: Option<Attachment>) -> Self {
        if let Some(a) = attachment {
            self.fields
                .push((name.into(), EncodableValue::Attachment(a)));
        }
        self
    }

    /// Append an already-resolved value under the given name. Used for
    /// forward-compatible passthrough of fields this crate does not model.
    pub fn raw(mut self, name: impl Into<String>, value: EncodableValue) -> Self {
        self.fields.push((name.into(), value));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub(crate) fn fields(&self) -> &[(String, EncodableValue)] {
        &self.fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_order_preserved() {
        let request = EncodableRequest::new()
            .field("title", "Vendor Payment")
            .field("amount", 100i64)
            .field("currency", "AED");

        let names: Vec<&str> = request.fields().iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, ["title", "amount", "currency"]);
    }

    #[test]
    fn test_field_opt_none_is_absent() {
        let request = EncodableRequest::new()
            .field_opt("notes", None::<String>)
            .field_opt("reference", Some("INV-7"));

        assert_eq!(request.fields().len(), 1);
        assert_eq!(request.fields()[0].0, "reference");
    }

    #[test]
    fn test_attachment_none_is_absent() {
        let request = EncodableRequest::new().attachment("logo", None);
        assert!(request.is_empty());
    }
}
