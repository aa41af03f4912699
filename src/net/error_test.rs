use super::*;

#[test]
fn business_error_displays_backend_message_verbatim() {
    let err = ApiError::Business { code: 40000, message: "account already exists".to_owned() };
    assert_eq!(err.to_string(), "account already exists");
}

#[test]
fn not_logged_in_is_terminal() {
    assert!(!ApiError::NotLoggedIn.retryable());
    assert_eq!(ApiError::NotLoggedIn.error_code(), "E_NOT_LOGGED_IN");
}

#[test]
fn business_errors_are_never_retryable() {
    let err = ApiError::Business { code: 50000, message: "system error".to_owned() };
    assert!(!err.retryable());
}

#[test]
fn transport_level_failures_are_retryable() {
    assert!(ApiError::Transport("connection reset".to_owned()).retryable());
    assert!(ApiError::Timeout { ms: 100_000 }.retryable());
    assert!(ApiError::Http { status: 503 }.retryable());
    assert!(ApiError::Http { status: 429 }.retryable());
}

#[test]
fn client_side_http_errors_are_not_retryable() {
    assert!(!ApiError::Http { status: 404 }.retryable());
    assert!(!ApiError::Parse("eof".to_owned()).retryable());
    assert!(!ApiError::Unavailable.retryable());
}

#[test]
fn timeout_display_names_budget() {
    assert_eq!(ApiError::Timeout { ms: 100_000 }.to_string(), "request timed out after 100000 ms");
}
