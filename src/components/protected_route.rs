//! Route guard for views that require an authenticated session.
//!
//! DESIGN
//! ======
//! The guard itself is a pure function of the session with exactly three
//! outcomes; the component only maps the outcome onto rendering and issues
//! the redirect through the router. It holds no state and performs no I/O.

#[cfg(test)]
#[path = "protected_route_test.rs"]
mod protected_route_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::Session;

/// What the guard does with a protected target, in precedence order:
/// loading placeholder over rendering, rendering over redirect.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Session still resolving: show a placeholder, never redirect.
    Loading,
    /// Authenticated: render the target with its parameters untouched.
    Render,
    /// Signed out: redirect to the public entry route, replacing history.
    Redirect,
}

/// Decide the rendering for a protected target given the current session.
pub fn guard_outcome(session: &Session) -> GuardOutcome {
    if session.is_loading {
        GuardOutcome::Loading
    } else if session.is_authenticated {
        GuardOutcome::Render
    } else {
        GuardOutcome::Redirect
    }
}

/// Wrap a protected view: placeholder while the session loads, the children
/// when authenticated, otherwise a history-replacing redirect to `/`.
#[component]
pub fn ProtectedRoute(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let navigate = use_navigate();

    Effect::new(move || {
        if guard_outcome(&session.get()) == GuardOutcome::Redirect {
            navigate(
                "/",
                NavigateOptions {
                    replace: true,
                    ..NavigateOptions::default()
                },
            );
        }
    });

    view! {
        {move || match guard_outcome(&session.get()) {
            GuardOutcome::Loading => {
                view! { <div class="page-loading">"Loading authentication status..."</div> }
                    .into_any()
            }
            GuardOutcome::Render => children(),
            GuardOutcome::Redirect => ().into_any(),
        }}
    }
}
