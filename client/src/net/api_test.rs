use super::*;

#[test]
fn config_request_failed_message_formats_status() {
    assert_eq!(config_request_failed_message(503), "auth config request failed: 503");
}

