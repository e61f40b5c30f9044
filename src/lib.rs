//! # fintrack-web
//!
//! Leptos + WASM single-page front end for the FinTrack expense tracker.
//!
//! Renders a public home page, delegates user authentication to the Auth0
//! identity provider, and issues bearer-authenticated calls to the remote
//! expense API from the dashboard and expenses views. There is no backend
//! in this crate; it is a presentation and API-client layer only.

pub mod app;
pub mod components;
pub mod config;
pub mod identity;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;
