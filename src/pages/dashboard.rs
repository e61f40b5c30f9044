//! Dashboard page: profile claims plus one private API fetch per mount.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. It calls `{base}/private` as
//! soon as the session has settled and displays whatever JSON comes back.

use leptos::prelude::*;

use crate::config::{API_BASE_MISSING, AppConfig};
use crate::state::request::RequestState;
use crate::state::session::Session;
use crate::util::task::view_alive;

/// Inline error when the private fetch runs without an authenticated session.
const LOG_IN_FOR_DASHBOARD: &str = "Please log in to view dashboard data.";

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let config = expect_context::<AppConfig>();
    let private = RwSignal::new(RequestState::<serde_json::Value>::default());
    let alive = view_alive();

    // One fetch per mount, as soon as the session has settled.
    let started = RwSignal::new(false);
    Effect::new(move || {
        let current = session.get();
        if current.is_loading || started.get_untracked() {
            return;
        }
        started.set(true);

        if !current.is_authenticated {
            private.update(|state| state.fail(LOG_IN_FOR_DASHBOARD));
            return;
        }
        let Some(base) = config.api_base.clone() else {
            private.update(|state| state.fail(API_BASE_MISSING));
            return;
        };

        private.update(RequestState::begin);
        let alive = alive.clone();
        #[cfg(target_arch = "wasm32")]
        leptos::task::spawn_local(async move {
            let outcome = match crate::identity::access_token().await {
                Ok(token) => crate::net::api::fetch_private(&base, &token).await,
                Err(message) => Err(crate::net::error::normalize_api_error(
                    None,
                    Some(&message),
                    crate::net::api::PRIVATE_FETCH_FAILED,
                )),
            };
            if !alive.is_alive() {
                return;
            }
            match outcome {
                Ok(body) => private.update(|state| state.succeed(body)),
                Err(message) => private.update(|state| state.fail(message)),
            }
        });
        #[cfg(not(target_arch = "wasm32"))]
        let _ = (base, alive);
    });

    let profile_claims = move || {
        session
            .get()
            .user
            .as_ref()
            .map_or_else(|| "{}".to_owned(), crate::state::session::Profile::pretty_claims)
    };
    let private_body = move || {
        private
            .get()
            .result
            .as_ref()
            .and_then(|body| serde_json::to_string_pretty(body).ok())
            .unwrap_or_default()
    };

    view! {
        <Show
            when=move || !session.get().is_loading
            fallback=|| view! { <div class="page-loading">"Loading user authentication..."</div> }
        >
            <div class="page-container dashboard-page">
                <h2>"Dashboard"</h2>
                <p>"Welcome back, " {move || session.get().greeting_name()} "!"</p>

                <div class="profile-info">
                    <h3>"Your Profile:"</h3>
                    <pre>{profile_claims}</pre>
                </div>

                <div class="api-data-section">
                    <h3>"Data from Secure API Endpoint:"</h3>
                    <Show when=move || private.get().loading>
                        <p>"Loading data from API..."</p>
                    </Show>
                    <Show when=move || private.get().error.is_some()>
                        <p class="error-message">
                            "API Error: " {move || private.get().error.unwrap_or_default()}
                        </p>
                    </Show>
                    <Show when=move || private.get().result.is_some()>
                        <pre>{private_body}</pre>
                    </Show>
                    <Show when=move || {
                        let state = private.get();
                        !state.loading && state.error.is_none() && state.result.is_none()
                    }>
                        <p>"No data loaded from the API, or the endpoint might not be set up yet."</p>
                    </Show>
                </div>
            </div>
        </Show>
    }
}
