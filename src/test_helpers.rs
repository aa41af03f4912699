//! In-memory collaborators shared by unit tests.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

use async_trait::async_trait;

use crate::net::client::RequestOptions;
use crate::net::error::ApiError;
use crate::net::transport::{HttpRequest, RawResponse, Transport};
use crate::net::types::CurrentUser;
use crate::state::bootstrap::SessionSource;
use crate::util::notify::Notifier;

#[derive(Default)]
pub struct RecordingNotifier {
    messages: RefCell<Vec<String>>,
}

impl RecordingNotifier {
    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn error(&self, text: &str) {
        self.messages.borrow_mut().push(text.to_owned());
    }
}

/// Answers requests from a queue and records what was sent.
#[derive(Default)]
pub struct ScriptedTransport {
    replies: RefCell<VecDeque<Result<RawResponse, ApiError>>>,
    sent: RefCell<Vec<HttpRequest>>,
}

impl ScriptedTransport {
    pub fn reply(self, status: u16, body: serde_json::Value) -> Self {
        self.replies.borrow_mut().push_back(Ok(RawResponse { status, body: body.to_string() }));
        self
    }

    pub fn reply_raw(self, status: u16, body: &str) -> Self {
        self.replies.borrow_mut().push_back(Ok(RawResponse { status, body: body.to_owned() }));
        self
    }

    pub fn fail(self, err: ApiError) -> Self {
        self.replies.borrow_mut().push_back(Err(err));
        self
    }

    pub fn sent(&self) -> Vec<HttpRequest> {
        self.sent.borrow().clone()
    }
}

#[async_trait(?Send)]
impl Transport for ScriptedTransport {
    async fn send(&self, request: HttpRequest) -> Result<RawResponse, ApiError> {
        self.sent.borrow_mut().push(request);
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Transport("no scripted reply".to_owned())))
    }
}

/// Session source returning a fixed outcome and counting calls.
pub struct StubSession {
    outcome: Result<CurrentUser, ApiError>,
    calls: Cell<usize>,
    last_options: Cell<Option<RequestOptions>>,
}

impl StubSession {
    pub fn user(user: CurrentUser) -> Self {
        Self { outcome: Ok(user), calls: Cell::new(0), last_options: Cell::new(None) }
    }

    pub fn failing(err: ApiError) -> Self {
        Self { outcome: Err(err), calls: Cell::new(0), last_options: Cell::new(None) }
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    pub fn last_options(&self) -> Option<RequestOptions> {
        self.last_options.get()
    }
}

#[async_trait(?Send)]
impl SessionSource for StubSession {
    async fn fetch_current_user(&self, options: RequestOptions) -> Result<CurrentUser, ApiError> {
        self.calls.set(self.calls.get() + 1);
        self.last_options.set(Some(options));
        self.outcome.clone()
    }
}

pub fn alice() -> CurrentUser {
    CurrentUser {
        id: 1,
        username: Some("Alice".to_owned()),
        user_account: "alice".to_owned(),
        avatar_url: Some("https://cdn.example.test/alice.png".to_owned()),
        user_role: 1,
        planet_code: Some("1".to_owned()),
        ..CurrentUser::default()
    }
}

pub fn user_json() -> serde_json::Value {
    serde_json::json!({
        "id": 1,
        "username": "Alice",
        "userAccount": "alice",
        "avatarUrl": "https://cdn.example.test/alice.png",
        "userRole": 1,
        "planetCode": "1"
    })
}
