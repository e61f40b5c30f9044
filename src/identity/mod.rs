//! Integration with the Auth0 identity capability.
//!
//! SYSTEM CONTEXT
//! ==============
//! The application never implements authentication itself. This module owns
//! the single update channel into the shared `RwSignal<Session>`: `install`
//! creates the Auth0 client at startup, completes any pending redirect
//! callback, and publishes the settled session snapshot. Everything else in
//! the app only reads the signal. Capability entry points have host stubs so
//! the crate compiles and unit-tests off-wasm.

pub mod options;

#[cfg(target_arch = "wasm32")]
mod auth0;

use leptos::prelude::{RwSignal, Set};

use crate::config::IdentityConfig;
use crate::state::session::Session;

/// Error returned by capability entry points when no Auth0 client exists.
pub const IDENTITY_UNAVAILABLE: &str = "Identity provider is not configured.";

/// Initialize the identity capability and drive the session signal.
///
/// With no identity configuration the session settles signed out and the
/// capability entry points keep returning [`IDENTITY_UNAVAILABLE`].
pub fn install(config: Option<IdentityConfig>, session: RwSignal<Session>) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(config) = config else {
            session.set(Session::signed_out());
            return;
        };
        leptos::task::spawn_local(async move {
            match auth0::initialize(&config).await {
                Ok(snapshot) => session.set(snapshot),
                Err(message) => session.set(Session::failed(message)),
            }
        });
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = config;
        session.set(Session::signed_out());
    }
}

/// Send the browser through the Auth0 universal-login redirect.
///
/// # Errors
///
/// Returns a display-ready string when the capability is unavailable or the
/// provider call fails.
pub async fn login_with_redirect() -> Result<(), String> {
    #[cfg(target_arch = "wasm32")]
    {
        auth0::login_with_redirect().await
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Err(IDENTITY_UNAVAILABLE.to_owned())
    }
}

/// End the session and return the browser to `return_to` afterwards.
///
/// # Errors
///
/// Returns a display-ready string when the capability is unavailable or the
/// provider call fails.
pub async fn logout(return_to: &str) -> Result<(), String> {
    #[cfg(target_arch = "wasm32")]
    {
        auth0::logout(return_to).await
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = return_to;
        Err(IDENTITY_UNAVAILABLE.to_owned())
    }
}

/// Acquire a bearer credential for outbound API calls.
///
/// # Errors
///
/// Returns a display-ready string when the capability is unavailable or the
/// silent token acquisition fails.
pub async fn access_token() -> Result<String, String> {
    #[cfg(target_arch = "wasm32")]
    {
        auth0::access_token().await
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Err(IDENTITY_UNAVAILABLE.to_owned())
    }
}
