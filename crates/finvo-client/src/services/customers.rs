use finvo::models::{Customer, CustomerParams, ListParams, Page};
use finvo::FinvoError;

use crate::client::FinvoClient;

const PATH: &str = "customers";

/// Pass-through request builders for the `/customers` resource.
pub struct CustomerService<'a> {
    client: &'a FinvoClient,
}

impl FinvoClient {
    pub fn customers(&self) -> CustomerService<'_> {
        CustomerService { client: self }
    }
}

impl<'a> CustomerService<'a> {
    pub fn new(client: &'a FinvoClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, params: &ListParams) -> Result<Page<Customer>, FinvoError> {
        self.client.get_json_with(PATH, params).await
    }

    pub async fn get(&self, id: &str) -> Result<Customer, FinvoError> {
        self.client.get_json(&format!("{PATH}/{id}")).await
    }

    pub async fn create(&self, params: &CustomerParams) -> Result<Customer, FinvoError> {
        self.client.post_json(PATH, params).await
    }

    pub async fn update(&self, id: &str, params: &CustomerParams) -> Result<Customer, FinvoError> {
        self.client.put_json(&format!("{PATH}/{id}"), params).await
    }

    pub async fn delete(&self, id: &str) -> Result<(), FinvoError> {
        self.client.delete(&format!("{PATH}/{id}")).await
    }
}
