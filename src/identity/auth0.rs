//! `wasm-bindgen` bindings to the Auth0 SPA SDK.
//!
//! The SDK script is loaded by `index.html` and exposes the `auth0` global.
//! One client instance is created during `install` and kept in a
//! thread-local slot; WASM on the main thread is single-threaded, so the
//! slot is effectively process-wide.

use std::cell::RefCell;

use js_sys::{Promise, Reflect};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

use super::IDENTITY_UNAVAILABLE;
use super::options;
use crate::config::IdentityConfig;
use crate::state::session::{Profile, Session};

#[wasm_bindgen]
extern "C" {
    type Auth0Client;

    #[wasm_bindgen(js_namespace = auth0, js_name = createAuth0Client)]
    fn create_auth0_client(options: &JsValue) -> Promise;

    #[wasm_bindgen(method, js_name = isAuthenticated)]
    fn is_authenticated(this: &Auth0Client) -> Promise;

    #[wasm_bindgen(method, js_name = getUser)]
    fn get_user(this: &Auth0Client) -> Promise;

    #[wasm_bindgen(method, js_name = loginWithRedirect)]
    fn login_with_redirect_js(this: &Auth0Client) -> Promise;

    #[wasm_bindgen(method, js_name = logout)]
    fn logout_js(this: &Auth0Client, options: &JsValue) -> Promise;

    #[wasm_bindgen(method, js_name = getTokenSilently)]
    fn get_token_silently(this: &Auth0Client) -> Promise;

    #[wasm_bindgen(method, js_name = handleRedirectCallback)]
    fn handle_redirect_callback(this: &Auth0Client) -> Promise;
}

thread_local! {
    static CLIENT: RefCell<Option<Auth0Client>> = const { RefCell::new(None) };
}

/// Create the Auth0 client, finish any pending login redirect, and return
/// the settled session snapshot.
pub(super) async fn initialize(config: &IdentityConfig) -> Result<Session, String> {
    let window = web_sys::window().ok_or_else(|| "no browser window".to_owned())?;
    let origin = window.location().origin().map_err(js_error_message)?;

    let client_options = to_js(&options::client_options(config, &origin))?;
    let client: Auth0Client = JsFuture::from(create_auth0_client(&client_options))
        .await
        .map_err(js_error_message)?
        .unchecked_into();

    // Returning from universal login: finish the code/state exchange and
    // strip the parameters so a reload does not replay them.
    let search = window.location().search().unwrap_or_default();
    if search.contains("code=") && search.contains("state=") {
        JsFuture::from(client.handle_redirect_callback())
            .await
            .map_err(js_error_message)?;
        if let Ok(history) = window.history() {
            let path = window.location().pathname().unwrap_or_else(|_| "/".to_owned());
            let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(&path));
        }
    }

    let authenticated = JsFuture::from(client.is_authenticated())
        .await
        .map_err(js_error_message)?
        .as_bool()
        .unwrap_or(false);

    let user = if authenticated {
        let raw = JsFuture::from(client.get_user()).await.map_err(js_error_message)?;
        profile_from_js(&raw)
    } else {
        None
    };

    CLIENT.with(|slot| *slot.borrow_mut() = Some(client));

    Ok(Session {
        is_authenticated: authenticated,
        is_loading: false,
        user,
        error: None,
    })
}

pub(super) async fn login_with_redirect() -> Result<(), String> {
    let client = current_client()?;
    JsFuture::from(client.login_with_redirect_js())
        .await
        .map_err(js_error_message)?;
    Ok(())
}

pub(super) async fn logout(return_to: &str) -> Result<(), String> {
    let client = current_client()?;
    let logout_options = to_js(&options::logout_options(return_to))?;
    JsFuture::from(client.logout_js(&logout_options))
        .await
        .map_err(js_error_message)?;
    Ok(())
}

pub(super) async fn access_token() -> Result<String, String> {
    let client = current_client()?;
    let token = JsFuture::from(client.get_token_silently())
        .await
        .map_err(js_error_message)?;
    token
        .as_string()
        .ok_or_else(|| "identity provider returned a non-string token".to_owned())
}

fn current_client() -> Result<Auth0Client, String> {
    CLIENT
        .with(|slot| slot.borrow().as_ref().map(Clone::clone))
        .ok_or_else(|| IDENTITY_UNAVAILABLE.to_owned())
}

fn to_js(value: &serde_json::Value) -> Result<JsValue, String> {
    js_sys::JSON::parse(&value.to_string()).map_err(js_error_message)
}

fn profile_from_js(value: &JsValue) -> Option<Profile> {
    let raw = js_sys::JSON::stringify(value).ok()?;
    let raw = String::from(raw);
    serde_json::from_str(&raw).ok()
}

fn js_error_message(error: JsValue) -> String {
    if let Some(message) = error.as_string() {
        return message;
    }
    Reflect::get(&error, &JsValue::from_str("message"))
        .ok()
        .and_then(|message| message.as_string())
        .unwrap_or_else(|| "identity provider call failed".to_owned())
}
