//! Shared application state modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `session` is the read-only identity snapshot provided through context at
//! the app root; `request` is the per-operation state every data fetch and
//! submit owns privately inside its view.

pub mod request;
pub mod session;
