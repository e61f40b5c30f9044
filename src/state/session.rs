//! Session snapshot produced by the identity capability.
//!
//! SYSTEM CONTEXT
//! ==============
//! A single `RwSignal<Session>` is provided at the application root. The
//! identity integration is the only writer; the route guard, navigation bar
//! and views read it to coordinate redirects and identity-dependent
//! rendering.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::{Deserialize, Serialize};

/// Authentication state for the current browser user.
///
/// Starts in the loading state at app mount and settles once the Auth0
/// client has resolved (or failed to resolve) the session.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub is_authenticated: bool,
    pub is_loading: bool,
    pub user: Option<Profile>,
    pub error: Option<String>,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            is_authenticated: false,
            is_loading: true,
            user: None,
            error: None,
        }
    }
}

impl Session {
    /// A settled, signed-out session (identity disabled or logged out).
    pub fn signed_out() -> Self {
        Self {
            is_loading: false,
            ..Self::default()
        }
    }

    /// A settled session that failed to initialize.
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            is_loading: false,
            error: Some(message.into()),
            ..Self::default()
        }
    }

    /// Name used in greeting copy, falling back through the profile claims.
    pub fn greeting_name(&self) -> String {
        self.user
            .as_ref()
            .map_or_else(|| Profile::FALLBACK_NAME.to_owned(), Profile::display_name)
    }
}

/// Identity-provider claims for the authenticated user.
///
/// Treated as read-only and unvalidated; claims beyond the three the UI
/// cares about are kept verbatim in `claims` for display.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub nickname: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(flatten)]
    pub claims: serde_json::Map<String, serde_json::Value>,
}

impl Profile {
    pub const FALLBACK_NAME: &'static str = "Valued User";

    /// Fallback chain: name, nickname, email, then a generic salutation.
    /// Empty and whitespace-only claims are skipped.
    pub fn display_name(&self) -> String {
        [&self.name, &self.nickname, &self.email]
            .into_iter()
            .find_map(|claim| {
                claim
                    .as_deref()
                    .map(str::trim)
                    .filter(|value| !value.is_empty())
            })
            .map_or_else(|| Self::FALLBACK_NAME.to_owned(), str::to_owned)
    }

    /// Pretty-printed claims JSON for the dashboard profile panel.
    pub fn pretty_claims(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_owned())
    }
}
