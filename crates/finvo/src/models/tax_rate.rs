use serde::{Deserialize, Serialize};

/// A named tax rate (e.g. "VAT 5%").
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxRate {
    pub id: String,
    pub name: String,
    /// Percentage, e.g. `5.0` for a 5% rate.
    pub rate: f64,
}

/// Body for tax rate create and update calls.
#[derive(Debug, Clone, Serialize)]
pub struct TaxRateParams {
    pub name: String,
    pub rate: f64,
}
