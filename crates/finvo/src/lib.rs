//! Core types for the Finvo accounting API.
//!
//! The Finvo API is resource-oriented: customers, employees, expenses,
//! invoices, payments, tax rates, and vendor payments, each behind a
//! fixed REST path. Most bodies are JSON, but invoice and payment
//! creation accepts binary attachments (logos, receipts), and for those
//! the API expects nested data flattened into bracket-keyed multipart
//! fields instead: `customer[name]`, `items[0][title]`, a trailing
//! `file` part for the blob.
//!
//! This crate holds the pieces shared by any transport:
//!
//! - the encodable value model ([`Scalar`], [`EncodableValue`],
//!   [`Attachment`]) and the [`EncodableRequest`] builder
//! - the payload encoder ([`encode`]) producing the ordered flat pairs
//! - the entity models ([`models`])
//! - the error taxonomy ([`FinvoError`])
//!
//! The HTTP client and per-entity services live in `finvo-client`.
//!
//! # Example
//!
//! ```
//! use finvo::{encode, EncodableRequest, Scalar};
//!
//! let request = EncodableRequest::new()
//!     .field("title", "Vendor Payment")
//!     .object("customer", vec![("name", Scalar::from("John Doe"))]);
//!
//! let parts = encode(&request).unwrap();
//! assert_eq!(parts[1].0, "customer[name]");
//! ```

pub mod encode;
pub mod error;
pub mod models;
pub mod payload;
pub mod value;

pub use encode::{encode, EncodedPart};
pub use error::FinvoError;
pub use payload::EncodableRequest;
pub use value::{ArrayElement, Attachment, EncodableValue, Scalar};
