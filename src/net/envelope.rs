//! Business envelope wrapping every backend response body.

#[cfg(test)]
#[path = "envelope_test.rs"]
mod envelope_test;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::error::ApiError;

/// Business code for a successful call.
pub const CODE_SUCCESS: i64 = 0;
/// Business code the backend uses when no session cookie is attached.
pub const CODE_NOT_LOGIN: i64 = 40100;

/// Wire wrapper `{ code, data, message?, description? }`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T = serde_json::Value> {
    pub code: i64,
    #[serde(default)]
    pub data: T,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl<T> Envelope<T> {
    pub fn is_success(&self) -> bool {
        self.code == CODE_SUCCESS
    }

    /// Detailed failure text. An empty string counts as absent.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref().filter(|d| !d.is_empty())
    }
}

impl Envelope<serde_json::Value> {
    /// Decode a raw response body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Parse`] if `body` is not an envelope.
    pub fn from_body(body: &str) -> Result<Self, ApiError> {
        serde_json::from_str(body).map_err(|e| ApiError::Parse(e.to_string()))
    }

    /// Decode `data` into the caller's payload type, keeping the rest intact.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Parse`] if `data` does not match `T`.
    pub fn into_typed<T: DeserializeOwned>(self) -> Result<Envelope<T>, ApiError> {
        let data = serde_json::from_value(self.data).map_err(|e| ApiError::Parse(e.to_string()))?;
        Ok(Envelope { code: self.code, data, message: self.message, description: self.description })
    }
}
