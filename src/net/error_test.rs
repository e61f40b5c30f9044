use super::*;
use serde_json::json;

const FALLBACK: &str = "Failed to fetch data from API.";

#[test]
fn description_field_wins_over_everything() {
    let body = json!({ "description": "Token has expired.", "message": "unauthorized" });
    assert_eq!(
        normalize_api_error(Some(&body), Some("HTTP 401"), FALLBACK),
        "Token has expired."
    );
}

#[test]
fn message_field_is_used_when_description_is_absent() {
    let body = json!({ "message": "Expense not found." });
    assert_eq!(normalize_api_error(Some(&body), None, FALLBACK), "Expense not found.");
}

#[test]
fn empty_description_falls_through_to_message() {
    let body = json!({ "description": "   ", "message": "upstream timeout" });
    assert_eq!(normalize_api_error(Some(&body), None, FALLBACK), "upstream timeout");
}

#[test]
fn non_string_fields_are_skipped() {
    let body = json!({ "description": 500, "message": ["not", "a", "string"] });
    assert_eq!(
        normalize_api_error(Some(&body), Some("connection refused"), FALLBACK),
        "connection refused"
    );
}

#[test]
fn transport_message_is_used_without_a_body() {
    assert_eq!(
        normalize_api_error(None, Some("NetworkError when attempting to fetch resource."), FALLBACK),
        "NetworkError when attempting to fetch resource."
    );
}

#[test]
fn fallback_covers_the_empty_case() {
    assert_eq!(normalize_api_error(None, None, FALLBACK), FALLBACK);
    assert_eq!(normalize_api_error(Some(&json!({})), Some("  "), FALLBACK), FALLBACK);
}
