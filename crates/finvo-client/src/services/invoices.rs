use finvo::models::{Invoice, InvoiceParams, ListParams, Page};
use finvo::FinvoError;

use crate::client::FinvoClient;

const PATH: &str = "invoices";

/// Request builders for the `/invoices` resource.
///
/// Create and update go through the multipart payload encoder so an
/// invoice logo can ride along with the flattened customer/biller/items
/// fields; list, get, and delete are plain pass-throughs.
pub struct InvoiceService<'a> {
    client: &'a FinvoClient,
}

impl FinvoClient {
    pub fn invoices(&self) -> InvoiceService<'_> {
        InvoiceService { client: self }
    }
}

impl<'a> InvoiceService<'a> {
    pub fn new(client: &'a FinvoClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, params: &ListParams) -> Result<Page<Invoice>, FinvoError> {
        self.client.get_json_with(PATH, params).await
    }

    pub async fn get(&self, id: &str) -> Result<Invoice, FinvoError> {
        self.client.get_json(&format!("{PATH}/{id}")).await
    }

    pub async fn create(&self, params: &InvoiceParams) -> Result<Invoice, FinvoError> {
        self.client.post_multipart(PATH, &params.to_payload()).await
    }

    pub async fn update(&self, id: &str, params: &InvoiceParams) -> Result<Invoice, FinvoError> {
        self.client
            .put_multipart(&format!("{PATH}/{id}"), &params.to_payload())
            .await
    }

    pub async fn delete(&self, id: &str) -> Result<(), FinvoError> {
        self.client.delete(&format!("{PATH}/{id}")).await
    }
}
