//! Normalization of API failures into user-displayable strings.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Collapse an API failure into one string for inline display.
///
/// Precedence: a server-supplied `description` field, then a server-supplied
/// `message` field, then the transport error message, then `fallback`.
/// Empty and non-string fields are skipped.
pub fn normalize_api_error(
    body: Option<&serde_json::Value>,
    transport: Option<&str>,
    fallback: &str,
) -> String {
    if let Some(body) = body {
        for field in ["description", "message"] {
            if let Some(text) = body.get(field).and_then(serde_json::Value::as_str) {
                let text = text.trim();
                if !text.is_empty() {
                    return text.to_owned();
                }
            }
        }
    }

    if let Some(transport) = transport {
        let transport = transport.trim();
        if !transport.is_empty() {
            return transport.to_owned();
        }
    }

    fallback.to_owned()
}
