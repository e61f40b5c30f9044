//! Public home page with the sign-in invitation.

use leptos::prelude::*;

use crate::components::login_button::LoginButton;
use crate::state::session::Session;

#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();

    view! {
        {move || {
            let current = session.get();
            if current.is_loading {
                view! { <div class="page-loading">"Loading..."</div> }.into_any()
            } else if current.is_authenticated {
                view! {
                    <div class="page-container home-page">
                        <h1>"Welcome to FinTrack"</h1>
                        <p>
                            "Hello, " {current.greeting_name()}
                            "! You are successfully logged in."
                        </p>
                    </div>
                }
                .into_any()
            } else {
                view! {
                    <div class="page-container home-page">
                        <h1>"Welcome to FinTrack"</h1>
                        <p>"Please log in to manage your finances and track your expenses."</p>
                        <LoginButton/>
                    </div>
                }
                .into_any()
            }
        }}
    }
}
