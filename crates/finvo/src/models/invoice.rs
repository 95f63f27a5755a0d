use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::party::{LineItem, Party};
use crate::payload::EncodableRequest;
use crate::value::Attachment;

/// An issued invoice as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invoice {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_number: Option<String>,
    pub currency: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<Party>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub biller: Option<Party>,
    #[serde(default)]
    pub items: Vec<LineItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Parameters for invoice create and update calls.
///
/// Invoices go over the wire as multipart form data (the logo may be a
/// binary blob), so these params flatten through the payload encoder
/// rather than serializing to JSON.
#[derive(Debug, Clone, Default)]
pub struct InvoiceParams {
    pub title: String,
    pub currency: String,
    pub invoice_date: Option<DateTime<Utc>>,
    pub due_date: Option<DateTime<Utc>>,
    pub notes: Option<String>,
    pub customer: Option<Party>,
    pub biller: Option<Party>,
    pub items: Vec<LineItem>,
    pub logo: Option<Attachment>,
}

impl InvoiceParams {
    /// Build the encodable payload in wire field order.
    pub fn to_payload(&self) -> EncodableRequest {
        let mut request = EncodableRequest::new()
            .field("title", self.title.clone())
            .field("currency", self.currency.clone())
            .field_opt("invoice_date", self.invoice_date)
            .field_opt("due_date", self.due_date)
            .field_opt("notes", self.notes.clone());
        if let Some(customer) = &self.customer {
            request = request.object("customer", customer.to_fields());
        }
        if let Some(biller) = &self.biller {
            request = request.object("biller", biller.to_fields());
        }
        request
            .array("items", self.items.iter().map(LineItem::to_element).collect())
            .attachment("logo", self.logo.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode::encode;
    use chrono::TimeZone;

    #[test]
    fn test_invoice_payload_field_order() {
        let params = InvoiceParams {
            title: "June retainer".to_string(),
            currency: "AED".to_string(),
            due_date: Some(Utc.with_ymd_and_hms(2025, 6, 23, 0, 0, 0).unwrap()),
            customer: Some(Party::named("John Doe")),
            items: vec![LineItem::new("Item 1", 1.0, 100.0)],
            logo: Some(Attachment::new("logo.png", &b"\x89PNG"[..])),
            ..InvoiceParams::default()
        };

        let parts = encode(&params.to_payload()).unwrap();
        let keys: Vec<&str> = parts.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(
            keys,
            [
                "title",
                "currency",
                "due_date",
                "customer[name]",
                "items[0][title]",
                "items[0][quantity]",
                "items[0][rate]",
                "file",
            ]
        );
        assert_eq!(parts[2].1.as_text(), Some("2025-06-23T00:00:00.000Z"));
    }
}
