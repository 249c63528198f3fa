use oidc::Profile;

use super::*;

fn signed_in() -> AuthState {
    AuthState {
        user: Some(Profile {
            sub: "u1".to_owned(),
            name: Some("Alice".to_owned()),
            email: None,
            email_verified: false,
        }),
        authenticated: true,
        loading: false,
        last_error: None,
    }
}

fn signed_out() -> AuthState {
    AuthState { loading: false, ..AuthState::default() }
}

// =============================================================================
// Protected
// =============================================================================

#[test]
fn protected_waits_while_loading() {
    let state = AuthState::default();
    assert_eq!(redirect_target(&state, guard::protected), None);
    assert!(!should_render(&state, guard::protected));
}

#[test]
fn protected_redirects_unauthenticated_to_login() {
    assert_eq!(redirect_target(&signed_out(), guard::protected), Some("/login"));
    assert!(!should_render(&signed_out(), guard::protected));
}

#[test]
fn protected_renders_for_signed_in_user() {
    assert_eq!(redirect_target(&signed_in(), guard::protected), None);
    assert!(should_render(&signed_in(), guard::protected));
}

#[test]
fn protected_never_redirects_while_loading_even_with_stale_user() {
    let state = AuthState { loading: true, ..signed_in() };
    assert_eq!(redirect_target(&state, guard::protected), None);
}

// =============================================================================
// PublicOnly
// =============================================================================

#[test]
fn public_only_redirects_signed_in_user_home() {
    assert_eq!(redirect_target(&signed_in(), guard::public_only), Some("/"));
    assert!(!should_render(&signed_in(), guard::public_only));
}

#[test]
fn public_only_renders_when_signed_out() {
    assert_eq!(redirect_target(&signed_out(), guard::public_only), None);
    assert!(should_render(&signed_out(), guard::public_only));
}

#[test]
fn guard_redirects_replace_history() {
    assert!(replace_options().replace);
}
