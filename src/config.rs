//! Startup configuration assembled from build-time environment variables.
//!
//! DESIGN
//! ======
//! Configuration is read exactly once, at application start, into an explicit
//! struct passed down through context. Views never consult the environment
//! themselves; a missing API base degrades protected data operations with a
//! visible error instead of crashing the app.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Identity-provider settings required to initialize the Auth0 client.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IdentityConfig {
    /// Auth0 tenant domain (e.g. `my-tenant.us.auth0.com`).
    pub domain: String,
    /// Auth0 application client id.
    pub client_id: String,
    /// API audience requested for access tokens.
    pub audience: String,
}

/// Application configuration snapshot built once at startup.
///
/// `identity` is `None` when any of the three Auth0 settings is absent; the
/// app still renders but the identity capability stays disabled. `api_base`
/// is `None` when the expense API location is absent; protected data
/// operations then fail with [`API_BASE_MISSING`] before any network call.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppConfig {
    pub identity: Option<IdentityConfig>,
    pub api_base: Option<String>,
}

/// Inline error shown when data operations run without a configured API base.
pub const API_BASE_MISSING: &str = "API endpoint not configured.";

impl AppConfig {
    /// Read the configuration baked in at compile time.
    ///
    /// Trunk substitutes these like the original toolchain substituted
    /// `REACT_APP_*` variables; there is no runtime environment in WASM.
    pub fn from_build_env() -> Self {
        Self::from_parts(
            option_env!("FINTRACK_AUTH0_DOMAIN"),
            option_env!("FINTRACK_AUTH0_CLIENT_ID"),
            option_env!("FINTRACK_AUTH0_AUDIENCE"),
            option_env!("FINTRACK_API_BASE_URL"),
        )
    }

    fn from_parts(
        domain: Option<&str>,
        client_id: Option<&str>,
        audience: Option<&str>,
        api_base: Option<&str>,
    ) -> Self {
        let identity = match (non_empty(domain), non_empty(client_id), non_empty(audience)) {
            (Some(domain), Some(client_id), Some(audience)) => Some(IdentityConfig {
                domain,
                client_id,
                audience,
            }),
            _ => {
                log::error!(
                    "Auth0 configuration is missing. Set FINTRACK_AUTH0_DOMAIN, \
                     FINTRACK_AUTH0_CLIENT_ID and FINTRACK_AUTH0_AUDIENCE at build time."
                );
                None
            }
        };

        let api_base = non_empty(api_base).map(|base| base.trim_end_matches('/').to_owned());

        Self { identity, api_base }
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_owned)
}
