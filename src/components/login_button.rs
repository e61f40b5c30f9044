//! Login affordance: a stateless dispatcher into the identity capability.

use leptos::prelude::*;

/// Button invoking the Auth0 redirect-based login entry point on click.
#[component]
pub fn LoginButton() -> impl IntoView {
    view! {
        <button
            class="auth-button auth-button--login"
            on:click=move |_| {
                #[cfg(target_arch = "wasm32")]
                leptos::task::spawn_local(async {
                    if let Err(message) = crate::identity::login_with_redirect().await {
                        log::error!("login redirect failed: {message}");
                    }
                });
            }
        >
            "Log In"
        </button>
    }
}
