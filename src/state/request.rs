//! Per-operation request state.
//!
//! DESIGN
//! ======
//! Every user-triggered operation (submit, fetch-by-id, fetch-all, private
//! fetch) owns one `RwSignal<RequestState<T>>`. Operations never share
//! state, so one in-flight request only disables its own trigger control.

#[cfg(test)]
#[path = "request_test.rs"]
mod request_test;

/// Loading/error/result tuple for a single asynchronous operation.
///
/// Invariants: `error` and `result` never coexist, and `loading` is cleared
/// whenever the operation settles, success or failure.
#[derive(Clone, Debug, PartialEq)]
pub struct RequestState<T> {
    pub loading: bool,
    pub error: Option<String>,
    pub result: Option<T>,
}

impl<T> Default for RequestState<T> {
    fn default() -> Self {
        Self {
            loading: false,
            error: None,
            result: None,
        }
    }
}

impl<T> RequestState<T> {
    /// Mark the operation in flight, dropping any previous outcome.
    pub fn begin(&mut self) {
        self.loading = true;
        self.error = None;
        self.result = None;
    }

    /// Settle with a parsed response body.
    pub fn succeed(&mut self, result: T) {
        self.loading = false;
        self.error = None;
        self.result = Some(result);
    }

    /// Settle with a user-displayable error, clearing any stale result.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.loading = false;
        self.error = Some(message.into());
        self.result = None;
    }
}
