//! Wire DTOs for the expense API.
//!
//! DESIGN
//! ======
//! The API serializes SQL decimals as strings in some deployments and as
//! JSON numbers in others, so `amount` decodes leniently from either shape.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// An expense record as returned by the remote API.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Server-assigned record identifier.
    pub id: i64,
    /// Free-text description, at most 200 characters.
    pub description: String,
    /// Positive decimal amount.
    #[serde(deserialize_with = "deserialize_amount")]
    pub amount: f64,
    /// Optional category label, at most 50 characters.
    #[serde(default)]
    pub category: Option<String>,
    /// ISO-8601 timestamp of the expense.
    #[serde(default)]
    pub date: Option<String>,
}

impl Expense {
    /// Pretty-printed JSON for the raw-record panels in the expenses view.
    pub fn pretty(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_owned())
    }
}

/// Payload submitted to `POST {base}/expenses/create`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ExpenseDraft {
    pub description: String,
    pub amount: f64,
    pub category: Option<String>,
    pub date: String,
}

fn deserialize_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(number) => number
            .as_f64()
            .ok_or_else(|| D::Error::custom("amount out of range")),
        serde_json::Value::String(raw) => raw
            .trim()
            .parse::<f64>()
            .map_err(|_| D::Error::custom(format!("amount {raw:?} is not a decimal"))),
        _ => Err(D::Error::custom("expected a number or decimal string amount")),
    }
}
