use super::*;

fn profile(name: Option<&str>, email: Option<&str>, verified: bool) -> Profile {
    Profile {
        sub: "user-1".to_owned(),
        name: name.map(str::to_owned),
        email: email.map(str::to_owned),
        email_verified: verified,
    }
}

// =============================================================================
// initials
// =============================================================================

#[test]
fn initials_takes_first_two_words() {
    assert_eq!(initials("Ada Lovelace"), "AL");
    assert_eq!(initials("grace brewster murray hopper"), "GB");
}

#[test]
fn initials_splits_email_addresses() {
    assert_eq!(initials("ada@chat.test"), "AC");
}

#[test]
fn initials_empty_label() {
    assert_eq!(initials(""), "");
    assert_eq!(initials("   "), "");
}

// =============================================================================
// email_line
// =============================================================================

#[test]
fn email_line_shown_under_name() {
    assert_eq!(email_line(&profile(Some("Ada"), Some("ada@chat.test"), true)), Some("ada@chat.test".to_owned()));
}

#[test]
fn email_line_marks_unverified() {
    assert_eq!(
        email_line(&profile(Some("Ada"), Some("ada@chat.test"), false)),
        Some("ada@chat.test (unverified)".to_owned())
    );
}

#[test]
fn email_line_hidden_when_email_is_the_label() {
    assert_eq!(email_line(&profile(None, Some("ada@chat.test"), true)), None);
    assert_eq!(email_line(&profile(Some("Ada"), None, true)), None);
}
