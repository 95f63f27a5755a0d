use finvo::models::{ListParams, Page, TaxRate, TaxRateParams};
use finvo::FinvoError;

use crate::client::FinvoClient;

const PATH: &str = "tax-rates";

/// Pass-through request builders for the `/tax-rates` resource.
pub struct TaxRateService<'a> {
    client: &'a FinvoClient,
}

impl FinvoClient {
    pub fn tax_rates(&self) -> TaxRateService<'_> {
        TaxRateService { client: self }
    }
}

impl<'a> TaxRateService<'a> {
    pub fn new(client: &'a FinvoClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, params: &ListParams) -> Result<Page<TaxRate>, FinvoError> {
        self.client.get_json_with(PATH, params).await
    }

    pub async fn get(&self, id: &str) -> Result<TaxRate, FinvoError> {
        self.client.get_json(&format!("{PATH}/{id}")).await
    }

    pub async fn create(&self, params: &TaxRateParams) -> Result<TaxRate, FinvoError> {
        self.client.post_json(PATH, params).await
    }

    pub async fn update(&self, id: &str, params: &TaxRateParams) -> Result<TaxRate, FinvoError> {
        self.client.put_json(&format!("{PATH}/{id}"), params).await
    }

    pub async fn delete(&self, id: &str) -> Result<(), FinvoError> {
        self.client.delete(&format!("{PATH}/{id}")).await
    }
}
