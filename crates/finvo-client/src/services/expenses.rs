use finvo::models::{Expense, ExpenseParams, ListParams, Page};
use finvo::FinvoError;

use crate::client::FinvoClient;

const PATH: &str = "expenses";

/// Pass-through request builders for the `/expenses` resource.
pub struct ExpenseService<'a> {
    client: &'a FinvoClient,
}

impl FinvoClient {
    pub fn expenses(&self) -> ExpenseService<'_> {
        ExpenseService { client: self }
    }
}

impl<'a> ExpenseService<'a> {
    pub fn new(client: &'a FinvoClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, params: &ListParams) -> Result<Page<Expense>, FinvoError> {
        self.client.get_json_with(PATH, params).await
    }

    pub async fn get(&self, id: &str) -> Result<Expense, FinvoError> {
        self.client.get_json(&format!("{PATH}/{id}")).await
    }

    pub async fn create(&self, params: &ExpenseParams) -> Result<Expense, FinvoError> {
        self.client.post_json(PATH, params).await
    }

    pub async fn update(&self, id: &str, params: &ExpenseParams) -> Result<Expense, FinvoError> {
        self.client.put_json(&format!("{PATH}/{id}"), params).await
    }

    pub async fn delete(&self, id: &str) -> Result<(), FinvoError> {
        self.client.delete(&format!("{PATH}/{id}")).await
    }
}
