use super::*;
use crate::config::RequestConfig;
use crate::net::transport::Method;
use crate::test_helpers::{RecordingNotifier, ScriptedTransport, user_json};
use crate::util::navigation::MemoryHistory;
use futures::executor::block_on;
use serde_json::json;

fn api(transport: ScriptedTransport) -> UserApi<ScriptedTransport> {
    let config = RequestConfig { base_url: None, timeout_ms: 100_000 };
    let client = RequestClient::new(
        config,
        transport,
        Rc::new(MemoryHistory::new("/welcome")),
        Rc::new(RecordingNotifier::default()),
    );
    UserApi::new(Rc::new(client))
}

fn sent(api: &UserApi<ScriptedTransport>) -> Vec<crate::net::transport::HttpRequest> {
    api.client.transport().sent()
}

// =============================================================
// Session
// =============================================================

#[test]
fn current_user_unwraps_envelope_payload() {
    let api = api(ScriptedTransport::default().reply(200, json!({"code": 0, "data": user_json()})));
    let user = block_on(api.current_user(RequestOptions::default())).unwrap();
    assert_eq!(user.display_name(), "Alice");
    assert_eq!(sent(&api)[0].url, CURRENT_USER_ENDPOINT);
}

#[test]
fn current_user_with_null_data_is_parse_error() {
    let api = api(ScriptedTransport::default().reply(200, json!({"code": 0, "data": null})));
    let result = block_on(api.current_user(RequestOptions::silent()));
    assert!(matches!(result, Err(ApiError::Parse(_))));
}

#[test]
fn session_source_passes_options_through() {
    let api = api(ScriptedTransport::default().reply(200, json!({"code": 40100, "data": null})));
    let result = block_on(api.fetch_current_user(RequestOptions::silent()));
    assert_eq!(result.unwrap_err(), ApiError::NotLoggedIn);
}

// =============================================================
// Account operations
// =============================================================

#[test]
fn login_posts_credentials() {
    let api = api(ScriptedTransport::default().reply(200, json!({"code": 0, "data": user_json()})));
    let params = LoginParams {
        user_account: Some("alice".to_owned()),
        user_password: Some("12345678".to_owned()),
        kind: Some("account".to_owned()),
        ..LoginParams::default()
    };

    let user = block_on(api.login(&params, RequestOptions::default())).unwrap();

    assert_eq!(user.id, 1);
    let req = &sent(&api)[0];
    assert_eq!(req.method, Method::Post);
    assert_eq!(req.url, LOGIN_ENDPOINT);
    assert_eq!(req.body, Some(json!({"userAccount": "alice", "userPassword": "12345678", "type": "account"})));
}

#[test]
fn register_returns_new_id() {
    let api = api(ScriptedTransport::default().reply(200, json!({"code": 0, "data": 99})));
    let id = block_on(api.register(&RegisterParams::default(), RequestOptions::default())).unwrap();
    assert_eq!(id, 99);
    assert_eq!(sent(&api)[0].body, Some(json!({})));
}

#[test]
fn logout_posts_without_body() {
    let api = api(ScriptedTransport::default().reply(200, json!({"code": 0, "data": 1})));
    assert_eq!(block_on(api.logout(RequestOptions::default())).unwrap(), 1);
    let req = &sent(&api)[0];
    assert_eq!(req.url, LOGOUT_ENDPOINT);
    assert_eq!(req.body, None);
}

// =============================================================
// Admin operations
// =============================================================

#[test]
fn search_users_sends_username_query() {
    let api = api(ScriptedTransport::default().reply(200, json!({"code": 0, "data": [user_json()]})));
    let params = SearchParams { username: Some("ali".to_owned()) };
    let users = block_on(api.search_users(&params, RequestOptions::default())).unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(sent(&api)[0].url, "/api/user/search?username=ali");
}

#[test]
fn search_users_omits_empty_username() {
    let api = api(ScriptedTransport::default().reply(200, json!({"code": 0, "data": []})));
    let params = SearchParams { username: Some(String::new()) };
    block_on(api.search_users(&params, RequestOptions::default())).unwrap();
    assert_eq!(sent(&api)[0].url, SEARCH_ENDPOINT);
}

#[test]
fn delete_user_posts_id() {
    let api = api(ScriptedTransport::default().reply(200, json!({"code": 0, "data": true})));
    let deleted = block_on(api.delete_user(&DeleteUserParams { id: Some(3) }, RequestOptions::default())).unwrap();
    assert!(deleted);
    assert_eq!(sent(&api)[0].body, Some(json!({"id": 3})));
}

#[test]
fn rules_sends_page_params() {
    let api = api(ScriptedTransport::default().reply(200, json!({"code": 0, "data": {"data": [], "total": 0}})));
    let params = PageParams { current: Some(1), page_size: Some(10) };
    let list = block_on(api.rules(&params, RequestOptions::default())).unwrap();
    assert_eq!(list.total, Some(0));
    assert_eq!(sent(&api)[0].url, "/api/rule?current=1&pageSize=10");
}

#[test]
fn notices_decode_list() {
    let api = api(ScriptedTransport::default().reply(
        200,
        json!({"code": 0, "data": {"data": [{"id": "n1", "type": "message"}], "total": 1}}),
    ));
    let list = block_on(api.notices(RequestOptions::default())).unwrap();
    assert_eq!(list.data.len(), 1);
    assert_eq!(list.unread_count(), 1);
}
