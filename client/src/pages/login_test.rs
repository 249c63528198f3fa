use super::*;

// =============================================================================
// error_message
// =============================================================================

#[test]
fn error_message_describes_known_query_code() {
    assert_eq!(
        error_message(Some("E_AUTH_CALLBACK"), None),
        Some("Sign-in could not be completed. Please try again.".to_owned())
    );
}

#[test]
fn error_message_falls_back_for_unknown_code() {
    assert_eq!(error_message(Some("E_NOPE"), None), Some(UNKNOWN_ERROR_MESSAGE.to_owned()));
}

#[test]
fn error_message_prefers_query_over_last_error() {
    assert_eq!(
        error_message(Some("E_LOGIN_DISPATCH"), Some("Your session expired. Please sign in again.")),
        Some("Could not reach the sign-in service. Please try again.".to_owned())
    );
}

#[test]
fn error_message_uses_last_error_without_query() {
    assert_eq!(error_message(None, Some("expired")), Some("expired".to_owned()));
    assert_eq!(error_message(Some("  "), Some("expired")), Some("expired".to_owned()));
}

#[test]
fn error_message_none_when_nothing_failed() {
    assert_eq!(error_message(None, None), None);
}

// =============================================================================
// button_label
// =============================================================================

#[test]
fn button_label_reflects_busy() {
    assert_eq!(button_label(false), "Sign in");
    assert_eq!(button_label(true), "Redirecting...");
}
