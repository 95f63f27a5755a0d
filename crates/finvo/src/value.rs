use bytes::Bytes;
use chrono::{DateTime, SecondsFormat, Utc};

use crate::error::FinvoError;

/// A primitive field value.
///
/// Every scalar renders to a canonical wire string via [`Scalar::stringify`];
/// the API accepts only strings (and raw bytes) in multipart bodies.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Text(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    DateTime(DateTime<Utc>),
}

impl Scalar {
    /// Canonical wire string: booleans as `true`/`false`, numbers in
    /// decimal, dates as ISO-8601 with millisecond precision
    /// (`2025-06-23T00:00:00.000Z`).
    pub fn stringify(&self) -> String {
        match self {
            Scalar::Text(s) => s.clone(),
            Scalar::Integer(n) => n.to_string(),
            Scalar::Float(f) => f.to_string(),
            Scalar::Bool(b) => b.to_string(),
            Scalar::DateTime(dt) => dt.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }

    /// The API treats empty strings and `false` as "not provided" inside
    /// nested objects; such sub-values are dropped rather than sent as
    /// empty parts. Numeric zero is a real value and is kept.
    pub fn is_falsy(&self) -> bool {
        match self {
            Scalar::Text(s) => s.is_empty(),
            Scalar::Bool(b) => !b,
            _ => false,
        }
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Scalar::Text(s.to_string())
    }
}

impl From<String> for Scalar {
    fn from(s: String) -> Self {
        Scalar::Text(s)
    }
}

impl From<i64> for Scalar {
    fn from(n: i64) -> Self {
        Scalar::Integer(n)
    }
}

impl From<u32> for Scalar {
    fn from(n: u32) -> Self {
        Scalar::Integer(n as i64)
    }
}

impl From<f64> for Scalar {
    fn from(f: f64) -> Self {
        Scalar::Float(f)
    }
}

impl From<bool> for Scalar {
    fn from(b: bool) -> Self {
        Scalar::Bool(b)
    }
}

impl From<DateTime<Utc>> for Scalar {
    fn from(dt: DateTime<Utc>) -> Self {
        Scalar::DateTime(dt)
    }
}

/// An opaque binary blob (logo, receipt, attached file) with no
/// sub-structure.
#[derive(Debug, Clone, PartialEq)]
pub struct Attachment {
    pub file_name: String,
    pub content_type: Option<String>,
    pub data: Bytes,
}

impl Attachment {
    pub fn new(file_name: impl Into<String>, data: impl Into<Bytes>) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: None,
            data: data.into(),
        }
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Empty attachments are skipped by the encoder, never sent as
    /// zero-byte parts.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// One element of an array field.
///
/// Line-item arrays hold flat objects; the API also accepts bare scalar
/// or binary elements, which repeat the array's own key on the wire.
#[derive(Debug, Clone, PartialEq)]
pub enum ArrayElement {
    /// A flat object (one line item). Sub-key order is preserved.
    Object(Vec<(String, Scalar)>),
    Scalar(Scalar),
    Blob(Attachment),
}

/// A field value as the encoder sees it.
///
/// The shape is resolved once, at request-construction time, so the
/// encoder runs a single exhaustive match instead of probing types at
/// runtime. Absence is expressed by not inserting the field at all.
#[derive(Debug, Clone, PartialEq)]
pub enum EncodableValue {
    Scalar(Scalar),
    /// A flat nested object (customer, biller). One level deep only.
    Object(Vec<(String, Scalar)>),
    /// An ordered array of line items. Index order is semantically
    /// significant and preserved.
    Array(Vec<ArrayElement>),
    Attachment(Attachment),
}

impl EncodableValue {
    /// Convert loose JSON into the closed value model.
    ///
    /// Used for forward-compatible passthrough of fields this crate does
    /// not model. Shapes the wire format cannot express are rejected:
    /// nesting deeper than one object level, arrays inside objects, and
    /// `null` array elements all fail with [`FinvoError::Encoding`].
    /// A top-level `null` yields `Ok(None)` (the field is simply absent).
    pub fn from_json(value: serde_json::Value) -> Result<Option<Self>, FinvoError> {
        use serde_json::Value;
        match value {
            Value::Null => Ok(None),
            Value::Object(map) => Ok(Some(EncodableValue::Object(json_object(map)?))),
            Value::Array(items) => {
                let mut elements = Vec::with_capacity(items.len());
                for item in items {
                    match item {
                        Value::Object(map) => {
                            elements.push(ArrayElement::Object(json_object(map)?));
                        }
                        Value::Null => {
                            return Err(FinvoError::Encoding(
                                "null array element is not encodable".to_string(),
                            ));
                        }
                        Value::Array(_) => {
                            return Err(FinvoError::Encoding(
                                "nested arrays are not encodable".to_string(),
                            ));
                        }
                        other => elements.push(ArrayElement::Scalar(json_scalar(other)?)),
                    }
                }
                Ok(Some(EncodableValue::Array(elements)))
            }
            other => Ok(Some(EncodableValue::Scalar(json_scalar(other)?))),
        }
    }
}

fn json_object(
    map: serde_json::Map<String, serde_json::Value>,
) -> Result<Vec<(String, Scalar)>, FinvoError> {
    let mut fields = Vec::with_capacity(map.len());
    for (key, value) in map {
        match value {
            serde_json::Value::Null => continue,
            serde_json::Value::Object(_) | serde_json::Value::Array(_) => {
                return Err(FinvoError::Encoding(format!(
                    "field '{key}': nesting deeper than one object level is not encodable"
                )));
            }
            other => fields.push((key, json_scalar(other)?)),
        }
    }
    Ok(fields)
}

fn json_scalar(value: serde_json::Value) -> Result<Scalar, FinvoError> {
    use serde_json::Value;
    match value {
        Value::String(s) => Ok(Scalar::Text(s)),
        Value::Bool(b) => Ok(Scalar::Bool(b)),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(Scalar::Integer(i))
            } else if let Some(f) = n.as_f64() {
                Ok(Scalar::Float(f))
            } else {
                Err(FinvoError::Encoding(format!("unencodable number: {n}")))
            }
        }
        other => Err(FinvoError::Encoding(format!(
            "unencodable JSON value: {other}"
        ))),
    }
}
