use super::*;

fn ada() -> Profile {
    Profile { sub: "user-1".to_owned(), name: Some("Ada".to_owned()), email: None, email_verified: true }
}

// =============================================================================
// AuthState::apply
// =============================================================================

#[test]
fn default_state_is_loading() {
    let state = AuthState::default();
    assert!(state.loading);
    assert!(!state.authenticated);
    assert_eq!(state.snapshot(), AuthSnapshot::default());
}

#[test]
fn apply_user_loaded_mirrors_snapshot_and_clears_error() {
    let mut state = AuthState { last_error: Some("old".to_owned()), ..AuthState::default() };
    let snapshot = AuthSnapshot::authenticated(ada());
    state.apply(&AuthEvent::UserLoaded(ada()), &snapshot);

    assert_eq!(state.snapshot(), snapshot);
    assert_eq!(state.display_name(), Some("Ada"));
    assert_eq!(state.last_error, None);
}

#[test]
fn apply_silent_renew_error_records_message() {
    let mut state = AuthState::default();
    state.apply(&AuthEvent::SilentRenewError("boom".to_owned()), &AuthSnapshot::unauthenticated());

    assert!(!state.loading);
    assert!(!state.authenticated);
    assert_eq!(state.last_error.as_deref(), Some("Your session expired. Please sign in again."));
}

#[test]
fn apply_token_expired_during_startup_stays_loading_without_error() {
    let mut state = AuthState::default();
    let snapshot = AuthSnapshot::default().reduce(&AuthEvent::TokenExpired);
    state.apply(&AuthEvent::TokenExpired, &snapshot);

    assert!(state.loading);
    assert_eq!(state.last_error, None);
}

#[test]
fn apply_user_unloaded_signs_out_quietly() {
    let mut state = AuthState::default();
    state.apply(&AuthEvent::UserLoaded(ada()), &AuthSnapshot::authenticated(ada()));
    state.apply(&AuthEvent::UserUnloaded, &AuthSnapshot::unauthenticated());

    assert_eq!(state.user, None);
    assert!(!state.authenticated);
    assert_eq!(state.last_error, None);
}

#[test]
fn fail_startup_resolves_unauthenticated() {
    let mut state = AuthState::default();
    state.fail_startup("config unavailable");

    assert_eq!(state.snapshot(), AuthSnapshot::unauthenticated());
    assert_eq!(state.last_error.as_deref(), Some("config unavailable"));
}
