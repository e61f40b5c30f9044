use super::*;

#[test]
fn default_state_is_idle_and_empty() {
    let state = RequestState::<i32>::default();
    assert!(!state.loading);
    assert_eq!(state.error, None);
    assert_eq!(state.result, None);
}

#[test]
fn begin_sets_loading_and_drops_previous_outcome() {
    let mut state = RequestState::default();
    state.succeed(7);
    state.begin();
    assert!(state.loading);
    assert_eq!(state.error, None);
    assert_eq!(state.result, None);
}

#[test]
fn succeed_clears_loading_and_error() {
    let mut state = RequestState::default();
    state.begin();
    state.succeed("body".to_owned());
    assert!(!state.loading);
    assert_eq!(state.error, None);
    assert_eq!(state.result.as_deref(), Some("body"));
}

#[test]
fn fail_clears_loading_and_any_stale_result() {
    let mut state = RequestState::default();
    state.succeed(41);
    state.begin();
    state.fail("server unavailable");
    assert!(!state.loading);
    assert_eq!(state.error.as_deref(), Some("server unavailable"));
    assert_eq!(state.result, None);
}

#[test]
fn validation_failure_without_begin_still_clears_result() {
    let mut state = RequestState::default();
    state.succeed(1);
    state.fail("Description and Amount are required.");
    assert_eq!(state.result, None);
    assert!(!state.loading);
}
