//! Request client: every call goes through the transport, then the envelope
//! interceptor, then payload decoding.
//!
//! ERROR HANDLING
//! ==============
//! Callers always get `Result<Envelope<T>, ApiError>`. Unless a request sets
//! [`RequestOptions::skip_error_handler`], failures are also surfaced through
//! the notifier; the not-logged-in branch has already notified inside the
//! interceptor and is not repeated.

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

use std::rc::Rc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::envelope::Envelope;
use super::error::ApiError;
use super::interceptor::intercept;
use super::transport::{HttpRequest, Method, Transport};
use crate::config::RequestConfig;
use crate::util::navigation::Navigator;
use crate::util::notify::Notifier;

/// Per-request switches.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RequestOptions {
    /// Leave error presentation to the caller.
    pub skip_error_handler: bool,
}

impl RequestOptions {
    pub fn silent() -> Self {
        Self { skip_error_handler: true }
    }
}

pub struct RequestClient<T> {
    config: RequestConfig,
    transport: T,
    navigator: Rc<dyn Navigator>,
    notifier: Rc<dyn Notifier>,
}

impl<T: Transport> RequestClient<T> {
    pub fn new(config: RequestConfig, transport: T, navigator: Rc<dyn Navigator>, notifier: Rc<dyn Notifier>) -> Self {
        Self { config, transport, navigator, notifier }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// `GET path?query`.
    ///
    /// # Errors
    ///
    /// Returns any [`ApiError`] produced by the transport, the interceptor or
    /// payload decoding.
    pub async fn get<D: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
        options: RequestOptions,
    ) -> Result<Envelope<D>, ApiError> {
        let url = with_query(&self.config.url_for(path), query);
        self.execute(Method::Get, url, None, options).await
    }

    /// `POST path` with a JSON body.
    ///
    /// # Errors
    ///
    /// Returns any [`ApiError`] produced by body encoding, the transport, the
    /// interceptor or payload decoding.
    pub async fn post<B: Serialize + ?Sized, D: DeserializeOwned>(
        &self,
        path: &str,
        body: Option<&B>,
        options: RequestOptions,
    ) -> Result<Envelope<D>, ApiError> {
        let body = body
            .map(serde_json::to_value)
            .transpose()
            .map_err(|e| ApiError::Parse(e.to_string()))?;
        let url = self.config.url_for(path);
        self.execute(Method::Post, url, body, options).await
    }

    async fn execute<D: DeserializeOwned>(
        &self,
        method: Method,
        url: String,
        body: Option<serde_json::Value>,
        options: RequestOptions,
    ) -> Result<Envelope<D>, ApiError> {
        log::debug!("{method:?} {url}");
        let request = HttpRequest { method, url, body, timeout_ms: self.config.timeout_ms };
        let result = self.round_trip(request).await;
        if let Err(err) = &result {
            log::debug!("request failed: {} ({err})", err.error_code());
            if !options.skip_error_handler && *err != ApiError::NotLoggedIn {
                self.notifier.error(&err.to_string());
            }
        }
        result
    }

    async fn round_trip<D: DeserializeOwned>(&self, request: HttpRequest) -> Result<Envelope<D>, ApiError> {
        let resp = self.transport.send(request).await?;
        if !resp.ok() {
            return Err(ApiError::Http { status: resp.status });
        }
        let envelope = Envelope::from_body(&resp.body)?;
        intercept(envelope, self.navigator.as_ref(), self.notifier.as_ref())?.into_typed()
    }
}

fn with_query(url: &str, query: &[(&str, String)]) -> String {
    if query.is_empty() {
        return url.to_owned();
    }
    let encoded = url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(query.iter().map(|(key, value)| (*key, value.as_str())))
        .finish();
    let separator = if url.contains('?') { '&' } else { '?' };
    format!("{url}{separator}{encoded}")
}
