//! Errors produced by the request pipeline.
//!
//! ERROR HANDLING
//! ==============
//! Every failure a request can end in is one of these variants. The pipeline
//! never panics; callers receive `Result` and the session bootstrap folds any
//! variant into an absent session.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The backend answered with the not-logged-in business code.
    #[error("not logged in")]
    NotLoggedIn,

    /// The backend answered with any other non-zero business code.
    #[error("{message}")]
    Business { code: i64, message: String },

    /// The response carried a non-success HTTP status.
    #[error("HTTP status {status}")]
    Http { status: u16 },

    /// The request never produced a response.
    #[error("request failed: {0}")]
    Transport(String),

    /// The request exceeded the configured budget and was aborted.
    #[error("request timed out after {ms} ms")]
    Timeout { ms: u64 },

    /// The body was not an envelope, or its payload did not decode.
    #[error("response parse failed: {0}")]
    Parse(String),

    /// No browser transport is compiled into this build.
    #[error("not available outside the browser")]
    Unavailable,
}

impl ApiError {
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::NotLoggedIn => "E_NOT_LOGGED_IN",
            Self::Business { .. } => "E_BUSINESS",
            Self::Http { .. } => "E_HTTP_STATUS",
            Self::Transport(_) => "E_TRANSPORT",
            Self::Timeout { .. } => "E_TIMEOUT",
            Self::Parse(_) => "E_PARSE",
            Self::Unavailable => "E_UNAVAILABLE",
        }
    }

    /// Whether re-issuing the same request could plausibly succeed.
    ///
    /// Business outcomes, including not-logged-in, are final for the request.
    pub fn retryable(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::Timeout { .. } | Self::Http { status: 429 | 500..=599 })
    }
}
