use serde::{Deserialize, Serialize};

use crate::value::{ArrayElement, Scalar};

/// A counterparty record embedded in invoices and payments: the customer
/// being billed or the biller issuing the document.
///
/// On the multipart wire this flattens to `customer[name]`,
/// `customer[email]` and so on; `None` fields are never sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Party {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile: Option<String>,
    /// Tax registration number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl Party {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Flatten to ordered sub-fields for the payload encoder.
    pub(crate) fn to_fields(&self) -> Vec<(String, Scalar)> {
        let mut fields = vec![("name".to_string(), Scalar::from(self.name.clone()))];
        push_opt(&mut fields, "email", &self.email);
        push_opt(&mut fields, "mobile", &self.mobile);
        push_opt(&mut fields, "trn", &self.trn);
        push_opt(&mut fields, "address", &self.address);
        fields
    }
}

/// One line item on an invoice or payment. Array order is the order the
/// lines appear on the document and is preserved end to end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub quantity: f64,
    pub rate: f64,
    /// Tax rate id applied to this line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_rate: Option<String>,
}

impl LineItem {
    pub fn new(title: impl Into<String>, quantity: f64, rate: f64) -> Self {
        Self {
            title: title.into(),
            description: None,
            quantity,
            rate,
            tax_rate: None,
        }
    }

    pub(crate) fn to_element(&self) -> ArrayElement {
        let mut fields = vec![("title".to_string(), Scalar::from(self.title.clone()))];
        push_opt(&mut fields, "description", &self.description);
        fields.push(("quantity".to_string(), Scalar::from(self.quantity)));
        fields.push(("rate".to_string(), Scalar::from(self.rate)));
        push_opt(&mut fields, "tax_rate", &self.tax_rate);
        ArrayElement::Object(fields)
    }
}

fn push_opt(fields: &mut Vec<(String, Scalar)>, key: &str, value: &Option<String>) {
    if let Some(v) = value {
        fields.push((key.to_string(), Scalar::from(v.clone())));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_party_fields_ordered_and_sparse() {
        let party = Party {
            name: "John Doe".to_string(),
            email: Some("j@x.com".to_string()),
            mobile: Some("123".to_string()),
            trn: None,
            address: None,
        };

        let keys: Vec<String> = party.to_fields().into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["name", "email", "mobile"]);
    }

    #[test]
    fn test_line_item_element_order() {
        let item = LineItem::new("Item 1", 1.0, 100.0);
        let ArrayElement::Object(fields) = item.to_element() else {
            panic!("line item must flatten to an object element");
        };

        let keys: Vec<String> = fields.iter().map(|(k, _)| k.clone()).collect();
        assert_eq!(keys, ["title", "quantity", "rate"]);
        assert_eq!(fields[1].1.stringify(), "1");
        assert_eq!(fields[2].1.stringify(), "100");
    }
}
