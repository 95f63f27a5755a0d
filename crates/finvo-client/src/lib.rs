//! Typed client SDK for the Finvo accounting API.
//!
//! One [`FinvoClient`] wraps the HTTP transport; per-resource services
//! hang off it and expose list/get/create/update/delete. Invoice,
//! payment, and vendor-payment writes flatten their nested payloads into
//! bracket-keyed multipart fields via the `finvo` core crate; everything
//! else is plain JSON.
//!
//! # Quick example
//!
//! ```no_run
//! use finvo::models::{InvoiceParams, LineItem, Party};
//! use finvo_client::FinvoClient;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), finvo::FinvoError> {
//! let client = FinvoClient::from_env()?;
//!
//! let invoice = client
//!     .invoices()
//!     .create(&InvoiceParams {
//!         title: "June retainer".to_string(),
//!         currency: "AED".to_string(),
//!         customer: Some(Party::named("John Doe")),
//!         items: vec![LineItem::new("Consulting", 1.0, 100.0)],
//!         ..InvoiceParams::default()
//!     })
//!     .await?;
//! println!("created invoice {}", invoice.id);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod services;

pub use client::{FinvoClient, DEFAULT_BASE_URL};
pub use services::{
    CustomerService, EmployeeService, ExpenseService, InvoiceService, PaymentService,
    TaxRateService, VendorPaymentService,
};

// Re-export the core crate so callers need only one dependency.
pub use finvo;
