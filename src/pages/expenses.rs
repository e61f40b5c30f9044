//! Expenses page: create, fetch-by-id and fetch-all operations.
//!
//! SYSTEM CONTEXT
//! ==============
//! The three operations are independent: each owns its `RequestState`, so an
//! in-flight submit only disables the submit button while both fetch
//! controls stay live. Every operation re-checks authentication itself even
//! though the route is guarded, since the trigger controls render before the
//! guard can know about a session lost mid-visit.

#[cfg(test)]
#[path = "expenses_test.rs"]
mod expenses_test;

use leptos::prelude::*;

use crate::config::{API_BASE_MISSING, AppConfig};
use crate::net::types::{Expense, ExpenseDraft};
use crate::state::request::RequestState;
use crate::state::session::Session;
use crate::util::task::view_alive;

const REQUIRED_FIELDS: &str = "Description and Amount are required.";
const AMOUNT_NOT_POSITIVE: &str = "Amount must be a positive number.";
const INVALID_EXPENSE_ID: &str = "Please enter a valid numeric Expense ID.";
const LOG_IN_TO_SUBMIT: &str = "Please log in to submit an expense.";
const LOG_IN_TO_FETCH: &str = "Please log in to fetch an expense.";
const LOG_IN_TO_FETCH_ALL: &str = "Please log in to fetch expenses.";

/// Client-side validation for the create form.
///
/// Description and amount are required, the amount must parse as a positive
/// finite decimal, and an empty date falls back to `fallback_date` (today in
/// the browser). Runs before any network call.
fn validate_expense_form(
    description: &str,
    amount: &str,
    category: &str,
    date: &str,
    fallback_date: &str,
) -> Result<ExpenseDraft, &'static str> {
    let description = description.trim();
    let amount = amount.trim();
    if description.is_empty() || amount.is_empty() {
        return Err(REQUIRED_FIELDS);
    }

    let amount: f64 = amount.parse().map_err(|_| AMOUNT_NOT_POSITIVE)?;
    if !amount.is_finite() || amount <= 0.0 {
        return Err(AMOUNT_NOT_POSITIVE);
    }

    let category = category.trim();
    let day = date.trim();
    let day = if day.is_empty() { fallback_date.trim() } else { day };

    Ok(ExpenseDraft {
        description: description.to_owned(),
        amount,
        category: (!category.is_empty()).then(|| category.to_owned()),
        date: day_to_timestamp(day),
    })
}

/// The fetch-by-id identifier must parse as an integer.
fn parse_expense_id(raw: &str) -> Result<i64, &'static str> {
    raw.trim().parse::<i64>().map_err(|_| INVALID_EXPENSE_ID)
}

/// Widen a `YYYY-MM-DD` day from the date input into the ISO-8601 timestamp
/// the API expects. Values already carrying a time component pass through.
fn day_to_timestamp(day: &str) -> String {
    if day.contains('T') {
        day.to_owned()
    } else {
        format!("{day}T00:00:00.000Z")
    }
}

fn success_message(expense: &Expense) -> String {
    format!(
        "Expense \"{}\" added successfully! ID: {}",
        expense.description, expense.id
    )
}

/// Current day as `YYYY-MM-DD` for the date input default.
fn today() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        let iso = String::from(js_sys::Date::new_0().to_iso_string());
        match iso.split_once('T') {
            Some((day, _)) => day.to_owned(),
            None => iso,
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        String::new()
    }
}

#[component]
pub fn ExpensesPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let config = StoredValue::new(expect_context::<AppConfig>());
    let alive = StoredValue::new(view_alive());
    let api_configured = config.get_value().api_base.is_some();

    // Create-expense form state.
    let description = RwSignal::new(String::new());
    let amount = RwSignal::new(String::new());
    let category = RwSignal::new(String::new());
    let date = RwSignal::new(today());
    let submit = RwSignal::new(RequestState::<Expense>::default());

    // Fetch-by-id state.
    let id_input = RwSignal::new(String::new());
    let fetch_one = RwSignal::new(RequestState::<Expense>::default());

    // Fetch-all state.
    let fetch_all = RwSignal::new(RequestState::<Vec<Expense>>::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submit.get_untracked().loading {
            return;
        }
        if !session.get_untracked().is_authenticated {
            submit.update(|state| state.fail(LOG_IN_TO_SUBMIT));
            return;
        }
        let Some(base) = config.get_value().api_base else {
            submit.update(|state| state.fail(API_BASE_MISSING));
            return;
        };
        let draft = match validate_expense_form(
            &description.get_untracked(),
            &amount.get_untracked(),
            &category.get_untracked(),
            &date.get_untracked(),
            &today(),
        ) {
            Ok(draft) => draft,
            Err(message) => {
                submit.update(|state| state.fail(message));
                return;
            }
        };

        submit.update(|state| state.begin());
        let alive = alive.get_value();
        #[cfg(target_arch = "wasm32")]
        leptos::task::spawn_local(async move {
            let outcome = match crate::identity::access_token().await {
                Ok(token) => crate::net::api::create_expense(&base, &token, &draft).await,
                Err(message) => Err(crate::net::error::normalize_api_error(
                    None,
                    Some(&message),
                    crate::net::api::EXPENSE_SUBMIT_FAILED,
                )),
            };
            if !alive.is_alive() {
                return;
            }
            match outcome {
                Ok(expense) => {
                    description.set(String::new());
                    amount.set(String::new());
                    category.set(String::new());
                    date.set(today());
                    submit.update(|state| state.succeed(expense));
                }
                Err(message) => submit.update(|state| state.fail(message)),
            }
        });
        #[cfg(not(target_arch = "wasm32"))]
        let _ = (base, draft, alive);
    };

    let on_fetch_by_id = move |_| {
        if fetch_one.get_untracked().loading {
            return;
        }
        if !session.get_untracked().is_authenticated {
            fetch_one.update(|state| state.fail(LOG_IN_TO_FETCH));
            return;
        }
        let Some(base) = config.get_value().api_base else {
            fetch_one.update(|state| state.fail(API_BASE_MISSING));
            return;
        };
        let id = match parse_expense_id(&id_input.get_untracked()) {
            Ok(id) => id,
            Err(message) => {
                // Also clears any previously fetched record.
                fetch_one.update(|state| state.fail(message));
                return;
            }
        };

        fetch_one.update(|state| state.begin());
        let alive = alive.get_value();
        #[cfg(target_arch = "wasm32")]
        leptos::task::spawn_local(async move {
            let outcome = match crate::identity::access_token().await {
                Ok(token) => crate::net::api::fetch_expense_by_id(&base, &token, id).await,
                Err(message) => Err(crate::net::error::normalize_api_error(
                    None,
                    Some(&message),
                    crate::net::api::EXPENSE_FETCH_FAILED,
                )),
            };
            if !alive.is_alive() {
                return;
            }
            match outcome {
                Ok(expense) => fetch_one.update(|state| state.succeed(expense)),
                Err(message) => fetch_one.update(|state| state.fail(message)),
            }
        });
        #[cfg(not(target_arch = "wasm32"))]
        let _ = (base, id, alive);
    };

    let on_fetch_all = move |_| {
        if fetch_all.get_untracked().loading {
            return;
        }
        if !session.get_untracked().is_authenticated {
            fetch_all.update(|state| state.fail(LOG_IN_TO_FETCH_ALL));
            return;
        }
        let Some(base) = config.get_value().api_base else {
            fetch_all.update(|state| state.fail(API_BASE_MISSING));
            return;
        };

        fetch_all.update(|state| state.begin());
        let alive = alive.get_value();
        #[cfg(target_arch = "wasm32")]
        leptos::task::spawn_local(async move {
            let outcome = match crate::identity::access_token().await {
                Ok(token) => crate::net::api::fetch_all_expenses(&base, &token).await,
                Err(message) => Err(crate::net::error::normalize_api_error(
                    None,
                    Some(&message),
                    crate::net::api::EXPENSES_FETCH_FAILED,
                )),
            };
            if !alive.is_alive() {
                return;
            }
            match outcome {
                Ok(expenses) => fetch_all.update(|state| state.succeed(expenses)),
                Err(message) => fetch_all.update(|state| state.fail(message)),
            }
        });
        #[cfg(not(target_arch = "wasm32"))]
        let _ = (base, alive);
    };

    view! {
        <Show
            when=move || !session.get().is_loading
            fallback=|| view! { <div class="page-loading">"Loading authentication..."</div> }
        >
            <Show
                when=move || session.get().is_authenticated
                fallback=|| {
                    view! { <div class="page-container">"Please log in to manage expenses."</div> }
                }
            >
                <div class="page-container expense-page">
                    <h2>"Manage Expenses"</h2>
                    <p>"Welcome, " {move || session.get().greeting_name()} "!"</p>

                    <Show when=move || !api_configured>
                        <p class="error-message config-error">{API_BASE_MISSING}</p>
                    </Show>

                    <div class="expense-form-section">
                        <h3>"Add New Expense"</h3>
                        <form on:submit=on_submit>
                            <label>
                                "Date:"
                                <input
                                    type="date"
                                    prop:value=move || date.get()
                                    on:input=move |ev| date.set(event_target_value(&ev))
                                />
                            </label>
                            <label>
                                "Description:"
                                <input
                                    type="text"
                                    maxlength="200"
                                    placeholder="e.g., Coffee with client"
                                    prop:value=move || description.get()
                                    on:input=move |ev| description.set(event_target_value(&ev))
                                />
                            </label>
                            <label>
                                "Amount:"
                                <input
                                    type="number"
                                    step="0.01"
                                    min="0.01"
                                    placeholder="e.g., 4.50"
                                    prop:value=move || amount.get()
                                    on:input=move |ev| amount.set(event_target_value(&ev))
                                />
                            </label>
                            <label>
                                "Category (Optional):"
                                <input
                                    type="text"
                                    maxlength="50"
                                    placeholder="e.g., Meals, Travel"
                                    prop:value=move || category.get()
                                    on:input=move |ev| category.set(event_target_value(&ev))
                                />
                            </label>
                            <button
                                type="submit"
                                disabled=move || submit.get().loading || session.get().is_loading
                            >
                                {move || if submit.get().loading { "Adding Expense..." } else { "Add Expense" }}
                            </button>
                        </form>
                        <Show when=move || submit.get().result.is_some()>
                            <p class="success-message">
                                {move || {
                                    submit
                                        .get()
                                        .result
                                        .as_ref()
                                        .map(success_message)
                                        .unwrap_or_default()
                                }}
                            </p>
                        </Show>
                        <Show when=move || submit.get().error.is_some()>
                            <p class="error-message">
                                "Error: " {move || submit.get().error.unwrap_or_default()}
                            </p>
                        </Show>
                    </div>

                    <div class="fetch-expense-section">
                        <h3>"Get Expense by ID"</h3>
                        <div class="fetch-expense-controls">
                            <input
                                type="number"
                                placeholder="Enter Expense ID"
                                prop:value=move || id_input.get()
                                on:input=move |ev| id_input.set(event_target_value(&ev))
                            />
                            <button
                                on:click=on_fetch_by_id
                                disabled=move || fetch_one.get().loading || session.get().is_loading
                            >
                                {move || if fetch_one.get().loading { "Fetching..." } else { "Fetch Expense" }}
                            </button>
                        </div>
                        <Show when=move || fetch_one.get().error.is_some()>
                            <p class="error-message">
                                "Error: " {move || fetch_one.get().error.unwrap_or_default()}
                            </p>
                        </Show>
                        <Show when=move || fetch_one.get().result.is_some()>
                            <div class="fetched-expense">
                                <h4>"Fetched Expense Details:"</h4>
                                <pre>
                                    {move || {
                                        fetch_one
                                            .get()
                                            .result
                                            .as_ref()
                                            .map(Expense::pretty)
                                            .unwrap_or_default()
                                    }}
                                </pre>
                            </div>
                        </Show>
                    </div>

                    <div class="fetch-all-expenses-section">
                        <h3>"All Expenses"</h3>
                        <button
                            on:click=on_fetch_all
                            disabled=move || fetch_all.get().loading || session.get().is_loading
                        >
                            {move || if fetch_all.get().loading { "Loading..." } else { "Fetch All Expenses" }}
                        </button>
                        <Show when=move || fetch_all.get().error.is_some()>
                            <p class="error-message">
                                "Error: " {move || fetch_all.get().error.unwrap_or_default()}
                            </p>
                        </Show>
                        <Show when=move || {
                            fetch_all
                                .get()
                                .result
                                .as_ref()
                                .is_some_and(|expenses| !expenses.is_empty())
                        }>
                            <div class="all-expenses">
                                <h4>"All Expenses:"</h4>
                                <pre>
                                    {move || {
                                        fetch_all
                                            .get()
                                            .result
                                            .as_ref()
                                            .and_then(|expenses| serde_json::to_string_pretty(expenses).ok())
                                            .unwrap_or_default()
                                    }}
                                </pre>
                            </div>
                        </Show>
                    </div>
                </div>
            </Show>
        </Show>
    }
}
