use super::*;
use crate::test_helpers::RecordingNotifier;
use crate::util::navigation::MemoryHistory;
use serde_json::json;

fn envelope(code: i64, message: Option<&str>, description: Option<&str>) -> Envelope {
    Envelope {
        code,
        data: json!({"id": 1}),
        message: message.map(str::to_owned),
        description: description.map(str::to_owned),
    }
}

// =============================================================
// Success
// =============================================================

#[test]
fn success_resolves_with_full_envelope() {
    let history = MemoryHistory::new("/admin/user-manage");
    let notifier = RecordingNotifier::default();
    let env = envelope(0, Some("ok"), Some(""));

    let result = intercept(env.clone(), &history, &notifier);

    assert_eq!(result, Ok(env));
    assert!(history.navigations().is_empty());
    assert!(notifier.messages().is_empty());
}

// =============================================================
// Not logged in
// =============================================================

#[test]
fn not_login_rejects_and_replaces_with_redirect_once() {
    let history = MemoryHistory::new("/admin/user-manage");
    let notifier = RecordingNotifier::default();

    let result = intercept(envelope(40100, Some("not login"), None), &history, &notifier);

    assert_eq!(result, Err(ApiError::NotLoggedIn));
    assert_eq!(
        history.navigations(),
        vec![Navigation::Replace {
            path: "/user/login".to_owned(),
            search: "redirect=%2Fadmin%2Fuser-manage".to_owned(),
        }]
    );
    assert_eq!(history.location(), "/user/login?redirect=%2Fadmin%2Fuser-manage");
    assert_eq!(history.len(), 1);
}

#[test]
fn not_login_notifies_user() {
    let history = MemoryHistory::new("/welcome");
    let notifier = RecordingNotifier::default();

    let _ = intercept(envelope(40100, None, None), &history, &notifier);

    assert_eq!(notifier.messages(), vec![NOT_LOGGED_IN_NOTICE.to_owned()]);
}

#[test]
fn not_login_error_is_terminal() {
    let history = MemoryHistory::new("/welcome");
    let err = intercept(envelope(40100, None, None), &history, &RecordingNotifier::default()).unwrap_err();
    assert!(!err.retryable());
}

// =============================================================
// Generic failures
// =============================================================

#[test]
fn failure_uses_description_field() {
    let history = MemoryHistory::new("/welcome");
    let result = intercept(envelope(40000, Some("request parameter error"), Some("account too short")), &history, &RecordingNotifier::default());
    assert_eq!(result, Err(ApiError::Business { code: 40000, message: "account too short".to_owned() }));
    assert!(history.navigations().is_empty());
}

#[test]
fn failure_never_uses_message_field() {
    let history = MemoryHistory::new("/welcome");
    let result = intercept(envelope(50000, Some("system error"), None), &history, &RecordingNotifier::default());
    assert_eq!(
        result,
        Err(ApiError::Business { code: 50000, message: REQUEST_FAILED_FALLBACK.to_owned() })
    );
}

#[test]
fn failure_with_empty_description_uses_fallback() {
    let env = envelope(40101, None, Some(""));
    assert_eq!(failure_message(&env), REQUEST_FAILED_FALLBACK);
}

#[test]
fn failure_with_whitespace_description_reports_it_verbatim() {
    let history = MemoryHistory::new("/welcome");
    let notifier = RecordingNotifier::default();
    let err = intercept(envelope(40000, None, Some("   ")), &history, &notifier).unwrap_err();
    assert_eq!(err, ApiError::Business { code: 40000, message: "   ".to_owned() });
}

#[test]
fn failure_does_not_notify_or_navigate() {
    let history = MemoryHistory::new("/welcome");
    let notifier = RecordingNotifier::default();

    for code in [-1, 1, 40000, 40101, 50000] {
        let _ = intercept(envelope(code, None, Some("x")), &history, &notifier);
    }

    assert!(history.navigations().is_empty());
    assert!(notifier.messages().is_empty());
}

#[test]
fn login_redirect_targets_login_route() {
    assert_eq!(
        login_redirect("/"),
        Navigation::Replace { path: "/user/login".to_owned(), search: "redirect=%2F".to_owned() }
    );
}
