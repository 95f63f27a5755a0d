use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::party::{LineItem, Party};
use crate::payload::EncodableRequest;
use crate::value::Attachment;

/// A payment received from a customer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payment {
    pub id: String,
    pub title: String,
    pub currency: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<Party>,
    #[serde(default)]
    pub items: Vec<LineItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// Parameters for payment create and update calls. Multipart, since a
/// receipt file may be attached.
#[derive(Debug, Clone, Default)]
pub struct PaymentParams {
    pub title: String,
    pub currency: String,
    pub payment_date: Option<DateTime<Utc>>,
    pub reference: Option<String>,
    pub customer: Option<Party>,
    pub items: Vec<LineItem>,
    pub file: Option<Attachment>,
}

impl PaymentParams {
    pub fn to_payload(&self) -> EncodableRequest {
        let mut request = EncodableRequest::new()
            .field("title", self.title.clone())
            .field("currency", self.currency.clone())
            .field_opt("payment_date", self.payment_date)
            .field_opt("reference", self.reference.clone());
        if let Some(customer) = &self.customer {
            request = request.object("customer", customer.to_fields());
        }
        request
            .array("items", self.items.iter().map(LineItem::to_element).collect())
            .attachment("file", self.file.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode::encode;

    #[test]
    fn test_payment_payload_drops_empty_customer_fields() {
        let params = PaymentParams {
            title: "Payment for INV-12".to_string(),
            currency: "USD".to_string(),
            customer: Some(Party {
                name: "John Doe".to_string(),
                email: Some("j@x.com".to_string()),
                trn: Some(String::new()),
                ..Party::default()
            }),
            ..PaymentParams::default()
        };

        let parts = encode(&params.to_payload()).unwrap();
        let keys: Vec<&str> = parts.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(
            keys,
            ["title", "currency", "customer[name]", "customer[email]"]
        );
    }
}
