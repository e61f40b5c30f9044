//! Reusable UI component modules.

pub mod login_button;
pub mod logout_button;
pub mod protected_route;
