//! REST helpers for the expense API.
//!
//! Browser builds issue real HTTP calls via `gloo-net` with a bearer
//! credential attached. Host builds get stub bodies returning errors so the
//! pure helpers stay unit-testable without a network stack.
//!
//! ERROR HANDLING
//! ==============
//! Every failure path funnels through `normalize_api_error`, so callers
//! receive display-ready strings and never have to inspect response shapes.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{Expense, ExpenseDraft};

#[cfg(target_arch = "wasm32")]
use super::error::normalize_api_error;

/// Fallback shown when the dashboard's private fetch fails without detail.
pub const PRIVATE_FETCH_FAILED: &str = "Failed to fetch data from API.";
/// Fallback shown when expense creation fails without detail.
pub const EXPENSE_SUBMIT_FAILED: &str = "Failed to submit expense.";
/// Fallback shown when a fetch-by-id fails without detail.
pub const EXPENSE_FETCH_FAILED: &str = "Failed to fetch expense.";
/// Fallback shown when the fetch-all operation fails without detail.
pub const EXPENSES_FETCH_FAILED: &str = "Failed to fetch expenses.";

#[cfg(any(test, target_arch = "wasm32"))]
fn private_endpoint(base: &str) -> String {
    format!("{base}/private")
}

#[cfg(any(test, target_arch = "wasm32"))]
fn create_expense_endpoint(base: &str) -> String {
    format!("{base}/expenses/create")
}

#[cfg(any(test, target_arch = "wasm32"))]
fn expense_by_id_endpoint(base: &str, id: i64) -> String {
    format!("{base}/expenses/get_by_id/{id}")
}

#[cfg(any(test, target_arch = "wasm32"))]
fn all_expenses_endpoint(base: &str) -> String {
    format!("{base}/expenses/get_all")
}

#[cfg(any(test, target_arch = "wasm32"))]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// GET `{base}/private`; the body is arbitrary JSON displayed verbatim.
///
/// # Errors
///
/// Returns a display-ready string per the normalization precedence.
pub async fn fetch_private(base: &str, token: &str) -> Result<serde_json::Value, String> {
    #[cfg(target_arch = "wasm32")]
    {
        get_json(&private_endpoint(base), token, PRIVATE_FETCH_FAILED).await
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (base, token);
        Err(stub_error())
    }
}

/// POST `{base}/expenses/create`; returns the created record.
///
/// # Errors
///
/// Returns a display-ready string per the normalization precedence.
pub async fn create_expense(base: &str, token: &str, draft: &ExpenseDraft) -> Result<Expense, String> {
    #[cfg(target_arch = "wasm32")]
    {
        let resp = gloo_net::http::Request::post(&create_expense_endpoint(base))
            .header("Authorization", &bearer(token))
            .json(draft)
            .map_err(|e| normalize_api_error(None, Some(&e.to_string()), EXPENSE_SUBMIT_FAILED))?
            .send()
            .await
            .map_err(|e| normalize_api_error(None, Some(&e.to_string()), EXPENSE_SUBMIT_FAILED))?;
        decode_response(resp, EXPENSE_SUBMIT_FAILED).await
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (base, token, draft);
        Err(stub_error())
    }
}

/// GET `{base}/expenses/get_by_id/{id}`.
///
/// # Errors
///
/// Returns a display-ready string per the normalization precedence.
pub async fn fetch_expense_by_id(base: &str, token: &str, id: i64) -> Result<Expense, String> {
    #[cfg(target_arch = "wasm32")]
    {
        get_json(&expense_by_id_endpoint(base, id), token, EXPENSE_FETCH_FAILED).await
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (base, token, id);
        Err(stub_error())
    }
}

/// GET `{base}/expenses/get_all`; an absent or `null` body is an empty list.
///
/// # Errors
///
/// Returns a display-ready string per the normalization precedence.
pub async fn fetch_all_expenses(base: &str, token: &str) -> Result<Vec<Expense>, String> {
    #[cfg(target_arch = "wasm32")]
    {
        get_json::<Option<Vec<Expense>>>(&all_expenses_endpoint(base), token, EXPENSES_FETCH_FAILED)
            .await
            .map(Option::unwrap_or_default)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (base, token);
        Err(stub_error())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn stub_error() -> String {
    "not available outside the browser".to_owned()
}

#[cfg(target_arch = "wasm32")]
async fn get_json<T: serde::de::DeserializeOwned>(
    url: &str,
    token: &str,
    fallback: &str,
) -> Result<T, String> {
    let resp = gloo_net::http::Request::get(url)
        .header("Authorization", &bearer(token))
        .send()
        .await
        .map_err(|e| normalize_api_error(None, Some(&e.to_string()), fallback))?;
    decode_response(resp, fallback).await
}

#[cfg(target_arch = "wasm32")]
async fn decode_response<T: serde::de::DeserializeOwned>(
    resp: gloo_net::http::Response,
    fallback: &str,
) -> Result<T, String> {
    if !resp.ok() {
        let body = resp.json::<serde_json::Value>().await.ok();
        return Err(normalize_api_error(body.as_ref(), None, fallback));
    }
    resp.json::<T>()
        .await
        .map_err(|e| normalize_api_error(None, Some(&e.to_string()), fallback))
}
