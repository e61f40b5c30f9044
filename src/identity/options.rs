//! Option payloads handed to the Auth0 SPA SDK.
//!
//! Built as plain JSON values so the shapes stay unit-testable on the host;
//! the wasm layer converts them to JS objects at the call site.

#[cfg(test)]
#[path = "options_test.rs"]
mod options_test;

use serde_json::json;

use crate::config::IdentityConfig;

/// Options for `auth0.createAuth0Client`.
pub fn client_options(config: &IdentityConfig, redirect_uri: &str) -> serde_json::Value {
    json!({
        "domain": config.domain,
        "clientId": config.client_id,
        "authorizationParams": {
            "redirect_uri": redirect_uri,
            "audience": config.audience,
        },
    })
}

/// Options for `Auth0Client.logout`; `return_to` is the application origin.
pub fn logout_options(return_to: &str) -> serde_json::Value {
    json!({
        "logoutParams": {
            "returnTo": return_to,
        },
    })
}
