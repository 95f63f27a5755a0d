use finvo::models::{ListParams, Page, Payment, PaymentParams};
use finvo::FinvoError;

use crate::client::FinvoClient;

const PATH: &str = "payments";

/// Request builders for the `/payments` resource.
///
/// Create and update use the multipart payload encoder (a receipt file
/// may be attached); list, get, and delete are plain pass-throughs.
pub struct PaymentService<'a> {
    client: &'a FinvoClient,
}

impl FinvoClient {
    pub fn payments(&self) -> PaymentService<'_> {
        PaymentService { client: self }
    }
}

impl<'a> PaymentService<'a> {
    pub fn new(client: &'a FinvoClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, params: &ListParams) -> Result<Page<Payment>, FinvoError> {
        self.client.get_json_with(PATH, params).await
    }

    pub async fn get(&self, id: &str) -> Result<Payment, FinvoError> {
        self.client.get_json(&format!("{PATH}/{id}")).await
    }

    pub async fn create(&self, params: &PaymentParams) -> Result<Payment, FinvoError> {
        self.client.post_multipart(PATH, &params.to_payload()).await
    }

    pub async fn update(&self, id: &str, params: &PaymentParams) -> Result<Payment, FinvoError> {
        self.client
            .put_multipart(&format!("{PATH}/{id}"), &params.to_payload())
            .await
    }

    pub async fn delete(&self, id: &str) -> Result<(), FinvoError> {
        self.client.delete(&format!("{PATH}/{id}")).await
    }
}
