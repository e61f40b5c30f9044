//! Logout affordance: a stateless dispatcher into the identity capability.

use leptos::prelude::*;

/// Button ending the session; Auth0 returns the browser to this origin.
#[component]
pub fn LogoutButton() -> impl IntoView {
    view! {
        <button
            class="auth-button auth-button--logout"
            on:click=move |_| {
                #[cfg(target_arch = "wasm32")]
                {
                    let return_to = web_sys::window()
                        .and_then(|window| window.location().origin().ok())
                        .unwrap_or_default();
                    leptos::task::spawn_local(async move {
                        if let Err(message) = crate::identity::logout(&return_to).await {
                            log::error!("logout failed: {message}");
                        }
                    });
                }
            }
        >
            "Log Out"
        </button>
    }
}
