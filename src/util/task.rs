//! View-lifetime tracking for in-flight async operations.
//!
//! SYSTEM CONTEXT
//! ==============
//! Operations spawned from a view keep running after the view unmounts; the
//! browser has no cancellation for an awaited fetch. Each view hands its
//! tasks a clone of an [`AliveFlag`] cleared on teardown, and tasks drop
//! their results instead of writing to disposed signals.

#[cfg(test)]
#[path = "task_test.rs"]
mod task_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::on_cleanup;

/// Cloneable flag marking whether the owning view is still mounted.
#[derive(Clone, Debug)]
pub struct AliveFlag(Arc<AtomicBool>);

impl AliveFlag {
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    pub fn is_alive(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    pub fn retire(&self) {
        self.0.store(false, Ordering::Relaxed);
    }
}

impl Default for AliveFlag {
    fn default() -> Self {
        Self::new()
    }
}

/// Create a flag retired automatically when the current reactive owner is
/// cleaned up. Call once per view, clone per spawned task.
pub fn view_alive() -> AliveFlag {
    let flag = AliveFlag::new();
    let on_drop = flag.clone();
    on_cleanup(move || on_drop.retire());
    flag
}
