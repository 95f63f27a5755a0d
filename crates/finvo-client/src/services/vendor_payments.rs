use finvo::models::{ListParams, Page, VendorPayment, VendorPaymentParams};
use finvo::FinvoError;

use crate::client::FinvoClient;

const PATH: &str = "vendor-payments";

/// Request builders for the `/vendor-payments` resource.
///
/// Create and update use the multipart payload encoder (a scanned
/// receipt or purchase order may be attached); list, get, and delete are
/// plain pass-throughs.
pub struct VendorPaymentService<'a> {
    client: &'a FinvoClient,
}

impl FinvoClient {
    pub fn vendor_payments(&self) -> VendorPaymentService<'_> {
        VendorPaymentService { client: self }
    }
}

impl<'a> VendorPaymentService<'a> {
    pub fn new(client: &'a FinvoClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, params: &ListParams) -> Result<Page<VendorPayment>, FinvoError> {
        self.client.get_json_with(PATH, params).await
    }

    pub async fn get(&self, id: &str) -> Result<VendorPayment, FinvoError> {
        self.client.get_json(&format!("{PATH}/{id}")).await
    }

    pub async fn create(&self, params: &VendorPaymentParams) -> Result<VendorPayment, FinvoError> {
        self.client.post_multipart(PATH, &params.to_payload()).await
    }

    pub async fn update(
        &self,
        id: &str,
        params: &VendorPaymentParams,
    ) -> Result<VendorPayment, FinvoError> {
        self.client
            .put_multipart(&format!("{PATH}/{id}"), &params.to_payload())
            .await
    }

    pub async fn delete(&self, id: &str) -> Result<(), FinvoError> {
        self.client.delete(&format!("{PATH}/{id}")).await
    }
}
