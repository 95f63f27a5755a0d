use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A recorded business expense.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    pub id: String,
    pub description: String,
    pub amount: f64,
    /// ISO-4217 currency code.
    pub currency: String,
    pub date: NaiveDate,
    /// Tax rate id applied to this expense, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_rate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Body for expense create and update calls.
#[derive(Debug, Clone, Serialize)]
pub struct ExpenseParams {
    pub description: String,
    pub amount: f64,
    pub currency: String,
    pub date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_rate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,
}
