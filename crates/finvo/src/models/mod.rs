//! Entity data models: read models returned by the API and the parameter
//! structs accepted by create/update calls.
//!
//! Invoice, payment, and vendor-payment params build an
//! [`EncodableRequest`](crate::EncodableRequest) via `to_payload()` for
//! the multipart path; the remaining entities go over the wire as plain
//! JSON bodies.

pub mod customer;
pub mod employee;
pub mod expense;
pub mod invoice;
pub mod party;
pub mod payment;
pub mod tax_rate;
pub mod vendor_payment;

pub use customer::{Customer, CustomerParams};
pub use employee::{Employee, EmployeeParams};
pub use expense::{Expense, ExpenseParams};
pub use invoice::{Invoice, InvoiceParams};
pub use party::{LineItem, Party};
pub use payment::{Payment, PaymentParams};
pub use tax_rate::{TaxRate, TaxRateParams};
pub use vendor_payment::{VendorPayment, VendorPaymentParams};

use serde::{Deserialize, Serialize};

/// One page of a list endpoint's results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    pub count: u64,
    pub results: Vec<T>,
}

/// Query parameters accepted by every list endpoint.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}

impl ListParams {
    pub fn page(page: u32) -> Self {
        Self {
            page: Some(page),
            page_size: None,
        }
    }
}
