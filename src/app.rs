//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The shell owns the two process-wide context values: the session signal
//! (written only by the identity integration) and the configuration struct
//! (read-only). Identity errors replace the whole UI here rather than
//! surfacing inside individual views.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::StaticSegment;
use leptos_router::components::{Route, Router, Routes};

use crate::components::login_button::LoginButton;
use crate::components::logout_button::LogoutButton;
use crate::components::protected_route::ProtectedRoute;
use crate::config::AppConfig;
use crate::identity;
use crate::pages::dashboard::DashboardPage;
use crate::pages::expenses::ExpensesPage;
use crate::pages::home::HomePage;
use crate::state::session::Session;

/// Root application component.
///
/// Provides the session and configuration contexts, installs the identity
/// integration, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(Session::default());
    provide_context(session);

    let config = AppConfig::from_build_env();
    provide_context(config.clone());

    identity::install(config.identity, session);

    view! {
        <Title text="FinTrack"/>

        {move || {
            let current = session.get();
            if current.is_loading {
                view! { <div class="app-loading">"Loading Application..."</div> }.into_any()
            } else if let Some(message) = current.error {
                view! { <div class="app-error">"Oops... " {message}</div> }.into_any()
            } else {
                view! {
                    <Router>
                        <div class="app-container">
                            <nav class="app-nav">
                                <a href="/" class="nav-link">
                                    "Home"
                                </a>
                                <Show when=move || session.get().is_authenticated>
                                    <a href="/dashboard" class="nav-link">
                                        "Dashboard"
                                    </a>
                                    <a href="/expenses" class="nav-link">
                                        "Expenses"
                                    </a>
                                </Show>
                                <div class="auth-buttons">
                                    <Show
                                        when=move || session.get().is_authenticated
                                        fallback=|| view! { <LoginButton/> }
                                    >
                                        <LogoutButton/>
                                    </Show>
                                </div>
                            </nav>

                            <main class="app-content">
                                <Routes fallback=|| "Page not found.".into_view()>
                                    <Route path=StaticSegment("") view=HomePage/>
                                    <Route
                                        path=StaticSegment("dashboard")
                                        view=|| {
                                            view! {
                                                <ProtectedRoute>
                                                    <DashboardPage/>
                                                </ProtectedRoute>
                                            }
                                        }
                                    />
                                    <Route
                                        path=StaticSegment("expenses")
                                        view=|| {
                                            view! {
                                                <ProtectedRoute>
                                                    <ExpensesPage/>
                                                </ProtectedRoute>
                                            }
                                        }
                                    />
                                </Routes>
                            </main>
                        </div>
                    </Router>
                }
                .into_any()
            }
        }}
    }
}
