use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::party::{LineItem, Party};
use crate::payload::EncodableRequest;
use crate::value::Attachment;

/// A payment made out to a vendor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VendorPayment {
    pub id: String,
    pub title: String,
    pub currency: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<f64>,
    /// The vendor being paid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub biller: Option<Party>,
    #[serde(default)]
    pub items: Vec<LineItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Parameters for vendor payment create and update calls. Multipart, so
/// a scanned receipt or purchase order can be attached.
#[derive(Debug, Clone, Default)]
pub struct VendorPaymentParams {
    pub title: String,
    pub currency: String,
    pub payment_date: Option<DateTime<Utc>>,
    pub notes: Option<String>,
    pub biller: Option<Party>,
    pub items: Vec<LineItem>,
    pub file: Option<Attachment>,
}

impl VendorPaymentParams {
    pub fn to_payload(&self) -> EncodableRequest {
        let mut request = EncodableRequest::new()
            .field("title", self.title.clone())
            .field("currency", self.currency.clone())
            .field_opt("payment_date", self.payment_date)
            .field_opt("notes", self.notes.clone());
        if let Some(biller) = &self.biller {
            request = request.object("biller", biller.to_fields());
        }
        request
            .array("items", self.items.iter().map(LineItem::to_element).collect())
            .attachment("file", self.file.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode::{encode, EncodedPart};

    #[test]
    fn test_vendor_payment_payload_attachment_last() {
        let params = VendorPaymentParams {
            title: "Vendor Payment".to_string(),
            currency: "AED".to_string(),
            biller: Some(Party::named("Acme Supplies")),
            items: vec![LineItem::new("Item 1", 1.0, 100.0)],
            file: Some(Attachment::new("receipt.pdf", &b"%PDF-1.4"[..])),
            ..VendorPaymentParams::default()
        };

        let parts = encode(&params.to_payload()).unwrap();
        let (last_key, last_part) = parts.last().unwrap();
        assert_eq!(last_key, "file");
        assert!(matches!(last_part, EncodedPart::Blob(_)));
    }
}
