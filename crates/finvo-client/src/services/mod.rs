//! One thin service per API resource. Each service borrows the shared
//! [`FinvoClient`](crate::FinvoClient) and turns method calls into
//! requests against its fixed REST path; no service keeps state of its
//! own, so holding several at once is fine.

pub mod customers;
pub mod employees;
pub mod expenses;
pub mod invoices;
pub mod payments;
pub mod tax_rates;
pub mod vendor_payments;

pub use customers::CustomerService;
pub use employees::EmployeeService;
pub use expenses::ExpenseService;
pub use invoices::InvoiceService;
pub use payments::PaymentService;
pub use tax_rates::TaxRateService;
pub use vendor_payments::VendorPaymentService;
