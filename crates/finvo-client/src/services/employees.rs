use finvo::models::{Employee, EmployeeParams, ListParams, Page};
use finvo::FinvoError;

use crate::client::FinvoClient;

const PATH: &str = "employees";

/// Pass-through request builders for the `/employees` resource.
pub struct EmployeeService<'a> {
    client: &'a FinvoClient,
}

impl FinvoClient {
    pub fn employees(&self) -> EmployeeService<'_> {
        EmployeeService { client: self }
    }
}

impl<'a> EmployeeService<'a> {
    pub fn new(client: &'a FinvoClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, params: &ListParams) -> Result<Page<Employee>, FinvoError> {
        self.client.get_json_with(PATH, params).await
    }

    pub async fn get(&self, id: &str) -> Result<Employee, FinvoError> {
        self.client.get_json(&format!("{PATH}/{id}")).await
    }

    pub async fn create(&self, params: &EmployeeParams) -> Result<Employee, FinvoError> {
        self.client.post_json(PATH, params).await
    }

    pub async fn update(&self, id: &str, params: &EmployeeParams) -> Result<Employee, FinvoError> {
        self.client.put_json(&format!("{PATH}/{id}"), params).await
    }

    pub async fn delete(&self, id: &str) -> Result<(), FinvoError> {
        self.client.delete(&format!("{PATH}/{id}")).await
    }
}
