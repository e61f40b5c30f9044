use super::*;
use crate::state::session::Profile;

fn session(is_loading: bool, is_authenticated: bool) -> Session {
    Session {
        is_authenticated,
        is_loading,
        user: is_authenticated.then(Profile::default),
        error: None,
    }
}

#[test]
fn loading_session_renders_the_placeholder() {
    assert_eq!(guard_outcome(&session(true, false)), GuardOutcome::Loading);
}

#[test]
fn loading_wins_over_authenticated() {
    // Precedence: loading > authenticated > redirect.
    assert_eq!(guard_outcome(&session(true, true)), GuardOutcome::Loading);
}

#[test]
fn settled_authenticated_session_renders_the_target() {
    assert_eq!(guard_outcome(&session(false, true)), GuardOutcome::Render);
}

#[test]
fn settled_signed_out_session_redirects() {
    assert_eq!(guard_outcome(&session(false, false)), GuardOutcome::Redirect);
}

#[test]
fn every_session_state_maps_to_exactly_one_outcome() {
    for is_loading in [false, true] {
        for is_authenticated in [false, true] {
            let outcome = guard_outcome(&session(is_loading, is_authenticated));
            let expected = if is_loading {
                GuardOutcome::Loading
            } else if is_authenticated {
                GuardOutcome::Render
            } else {
                GuardOutcome::Redirect
            };
            assert_eq!(outcome, expected);
        }
    }
}
