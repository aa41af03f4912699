use super::*;
use crate::net::types::CurrentUser;
use crate::test_helpers::{RecordingNotifier, ScriptedTransport, user_json};
use crate::util::navigation::{MemoryHistory, Navigation};
use futures::executor::block_on;
use serde_json::json;

// =============================================================
// Helpers
// =============================================================

struct Harness {
    client: RequestClient<ScriptedTransport>,
    history: Rc<MemoryHistory>,
    notifier: Rc<RecordingNotifier>,
}

fn harness(transport: ScriptedTransport, base_url: Option<&str>) -> Harness {
    let history = Rc::new(MemoryHistory::new("/admin/user-manage"));
    let notifier = Rc::new(RecordingNotifier::default());
    let config = RequestConfig { base_url: base_url.map(str::to_owned), timeout_ms: 100_000 };
    let client = RequestClient::new(config, transport, history.clone(), notifier.clone());
    Harness { client, history, notifier }
}

// =============================================================
// Request shaping
// =============================================================

#[test]
fn get_resolves_base_url_query_and_timeout() {
    let h = harness(ScriptedTransport::default().reply(200, json!({"code": 0, "data": []})), Some("https://api.test"));

    let result: Result<Envelope<Vec<CurrentUser>>, _> =
        block_on(h.client.get("/api/user/search", &[("username", "a b".to_owned())], RequestOptions::default()));

    assert!(result.is_ok());
    let sent = h.client.transport.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].method, Method::Get);
    assert_eq!(sent[0].url, "https://api.test/api/user/search?username=a+b");
    assert_eq!(sent[0].timeout_ms, 100_000);
    assert_eq!(sent[0].body, None);
}

#[test]
fn post_serializes_json_body() {
    let h = harness(ScriptedTransport::default().reply(200, json!({"code": 0, "data": 5})), None);

    let result: Envelope<i64> = block_on(h.client.post(
        "/api/user/register",
        Some(&json!({"userAccount": "alice"})),
        RequestOptions::default(),
    ))
    .unwrap();

    assert_eq!(result.data, 5);
    let sent = h.client.transport.sent();
    assert_eq!(sent[0].method, Method::Post);
    assert_eq!(sent[0].url, "/api/user/register");
    assert_eq!(sent[0].body, Some(json!({"userAccount": "alice"})));
}

#[test]
fn with_query_appends_to_existing_query() {
    assert_eq!(with_query("/api/rule?x=1", &[("current", "2".to_owned())]), "/api/rule?x=1&current=2");
    assert_eq!(with_query("/api/rule", &[]), "/api/rule");
}

// =============================================================
// Interception
// =============================================================

#[test]
fn success_decodes_payload_into_envelope() {
    let h = harness(ScriptedTransport::default().reply(200, json!({"code": 0, "data": user_json(), "message": "ok"})), None);

    let env: Envelope<CurrentUser> =
        block_on(h.client.get("/api/user/current", &[], RequestOptions::default())).unwrap();

    assert_eq!(env.code, 0);
    assert_eq!(env.message.as_deref(), Some("ok"));
    assert_eq!(env.data.user_account, "alice");
}

#[test]
fn not_login_redirects_and_notifies_once() {
    let h = harness(ScriptedTransport::default().reply(200, json!({"code": 40100, "data": null})), None);

    let result: Result<Envelope<CurrentUser>, _> =
        block_on(h.client.get("/api/user/current", &[], RequestOptions::default()));

    assert_eq!(result.unwrap_err(), ApiError::NotLoggedIn);
    assert_eq!(
        h.history.navigations(),
        vec![Navigation::Replace {
            path: "/user/login".to_owned(),
            search: "redirect=%2Fadmin%2Fuser-manage".to_owned(),
        }]
    );
    assert_eq!(h.notifier.messages(), vec!["please log in first".to_owned()]);
}

#[test]
fn business_failure_is_surfaced_by_default_handler() {
    let h = harness(
        ScriptedTransport::default().reply(200, json!({"code": 40000, "data": null, "description": "account exists"})),
        None,
    );

    let result: Result<Envelope<i64>, _> =
        block_on(h.client.post("/api/user/register", Some(&json!({})), RequestOptions::default()));

    assert_eq!(result.unwrap_err(), ApiError::Business { code: 40000, message: "account exists".to_owned() });
    assert_eq!(h.notifier.messages(), vec!["account exists".to_owned()]);
    assert!(h.history.navigations().is_empty());
}

#[test]
fn skip_error_handler_suppresses_default_notification() {
    let h = harness(
        ScriptedTransport::default().reply(200, json!({"code": 50000, "data": null, "description": "boom"})),
        None,
    );

    let result: Result<Envelope<CurrentUser>, _> =
        block_on(h.client.get("/api/user/current", &[], RequestOptions::silent()));

    assert!(result.is_err());
    assert!(h.notifier.messages().is_empty());
}

// =============================================================
// Transport-level failures
// =============================================================

#[test]
fn non_2xx_status_is_http_error() {
    let h = harness(ScriptedTransport::default().reply_raw(502, "bad gateway"), None);
    let result: Result<Envelope<i64>, _> = block_on(h.client.get("/api/x", &[], RequestOptions::silent()));
    assert_eq!(result.unwrap_err(), ApiError::Http { status: 502 });
}

#[test]
fn non_envelope_body_is_parse_error() {
    let h = harness(ScriptedTransport::default().reply_raw(200, "<html></html>"), None);
    let result: Result<Envelope<i64>, _> = block_on(h.client.get("/api/x", &[], RequestOptions::silent()));
    assert!(matches!(result, Err(ApiError::Parse(_))));
}

#[test]
fn payload_shape_mismatch_is_parse_error() {
    let h = harness(ScriptedTransport::default().reply(200, json!({"code": 0, "data": "nope"})), None);
    let result: Result<Envelope<i64>, _> = block_on(h.client.get("/api/x", &[], RequestOptions::silent()));
    assert!(matches!(result, Err(ApiError::Parse(_))));
}

#[test]
fn timeout_is_reported_through_default_handler() {
    let h = harness(ScriptedTransport::default().fail(ApiError::Timeout { ms: 100_000 }), None);
    let result: Result<Envelope<i64>, _> = block_on(h.client.get("/api/x", &[], RequestOptions::default()));
    assert_eq!(result.unwrap_err(), ApiError::Timeout { ms: 100_000 });
    assert_eq!(h.notifier.messages(), vec!["request timed out after 100000 ms".to_owned()]);
}

#[test]
fn each_response_is_handled_once_without_retry() {
    let h = harness(ScriptedTransport::default().fail(ApiError::Transport("reset".to_owned())), None);
    let _: Result<Envelope<i64>, _> = block_on(h.client.get("/api/x", &[], RequestOptions::silent()));
    assert_eq!(h.client.transport.sent().len(), 1);
}
