//! HTTP transport seam beneath the request client.
//!
//! Client-side (csr): `fetch` via `gloo-net` with cookies included, aborted
//! through an `AbortController` once the request budget elapses.
//! Native builds: [`FetchTransport`] answers [`ApiError::Unavailable`] since
//! there is no browser to issue the request.

#![allow(clippy::unused_async)]

use async_trait::async_trait;

use super::error::ApiError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// A request after URL resolution.
#[derive(Clone, Debug, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    /// Absolute or same-origin URL including any query string.
    pub url: String,
    pub body: Option<serde_json::Value>,
    pub timeout_ms: u64,
}

/// Status and raw body of a completed request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[async_trait(?Send)]
pub trait Transport {
    /// Issue `request` and wait for the full body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Transport`] when no response arrives and
    /// [`ApiError::Timeout`] when the budget elapses first.
    async fn send(&self, request: HttpRequest) -> Result<RawResponse, ApiError>;
}

/// Browser `fetch` transport.
#[derive(Clone, Copy, Debug, Default)]
pub struct FetchTransport;

#[async_trait(?Send)]
impl Transport for FetchTransport {
    async fn send(&self, request: HttpRequest) -> Result<RawResponse, ApiError> {
        #[cfg(feature = "csr")]
        {
            fetch(request).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = request;
            Err(ApiError::Unavailable)
        }
    }
}

#[cfg(feature = "csr")]
async fn fetch(request: HttpRequest) -> Result<RawResponse, ApiError> {
    use std::cell::Cell;
    use std::rc::Rc;

    use gloo_net::http::Request;

    let controller = web_sys::AbortController::new().map_err(|e| ApiError::Transport(format!("{e:?}")))?;
    let timed_out = Rc::new(Cell::new(false));
    let timer = {
        let controller = controller.clone();
        let timed_out = Rc::clone(&timed_out);
        let millis = u32::try_from(request.timeout_ms).unwrap_or(u32::MAX);
        gloo_timers::callback::Timeout::new(millis, move || {
            timed_out.set(true);
            controller.abort();
        })
    };

    let signal = controller.signal();
    let builder = match request.method {
        Method::Get => Request::get(&request.url),
        Method::Post => Request::post(&request.url),
    }
    .credentials(web_sys::RequestCredentials::Include)
    .abort_signal(Some(&signal));
    let prepared = match &request.body {
        Some(body) => builder.json(body),
        None => builder.build(),
    }
    .map_err(|e| ApiError::Transport(e.to_string()))?;

    // The budget covers the body read as well as the headers.
    let outcome = async {
        let resp = prepared.send().await?;
        let status = resp.status();
        let body = resp.text().await?;
        Ok::<_, gloo_net::Error>(RawResponse { status, body })
    }
    .await;
    drop(timer);
    outcome.map_err(|e| {
        if timed_out.get() { ApiError::Timeout { ms: request.timeout_ms } } else { ApiError::Transport(e.to_string()) }
    })
}
