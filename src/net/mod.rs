//! Networking modules for the remote expense API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the bearer-authenticated HTTP calls, `error` collapses every
//! failure shape into one user-displayable string, and `types` defines the
//! wire DTOs.

pub mod api;
pub mod error;
pub mod types;
