//! Response interceptor applied to every decoded envelope.
//!
//! The three outcomes:
//! - `code == 0` resolves with the whole envelope;
//! - `code == 40100` notifies, replaces the location with the login route
//!   (carrying the current path as `redirect`) and rejects with
//!   [`ApiError::NotLoggedIn`];
//! - anything else rejects with the envelope's `description`, or a fixed
//!   fallback when the backend left it empty.
//!
//! The backend fills `message` with a short category ("request parameter
//! error") and `description` with the detail meant for users, so only
//! `description` becomes the error text.

#[cfg(test)]
#[path = "interceptor_test.rs"]
mod interceptor_test;

use super::envelope::{CODE_NOT_LOGIN, CODE_SUCCESS, Envelope};
use super::error::ApiError;
use crate::config::LOGIN_PATH;
use crate::util::navigation::{Navigation, Navigator, redirect_search};
use crate::util::notify::Notifier;

pub const NOT_LOGGED_IN_NOTICE: &str = "please log in first";
pub const REQUEST_FAILED_FALLBACK: &str = "request failed";

/// Classify `envelope` and perform the not-logged-in side effects.
///
/// # Errors
///
/// Returns [`ApiError::NotLoggedIn`] for code 40100 and
/// [`ApiError::Business`] for any other non-zero code.
pub fn intercept<T>(
    envelope: Envelope<T>,
    navigator: &dyn Navigator,
    notifier: &dyn Notifier,
) -> Result<Envelope<T>, ApiError> {
    match envelope.code {
        CODE_SUCCESS => Ok(envelope),
        CODE_NOT_LOGIN => {
            notifier.error(NOT_LOGGED_IN_NOTICE);
            login_redirect(&navigator.pathname()).apply(navigator);
            Err(ApiError::NotLoggedIn)
        }
        code => {
            log::warn!(
                "request rejected: code={code} message={}",
                envelope.message.as_deref().unwrap_or("-")
            );
            Err(ApiError::Business { code, message: failure_message(&envelope) })
        }
    }
}

/// Replace-navigation to login that returns to `current_path` afterwards.
pub fn login_redirect(current_path: &str) -> Navigation {
    Navigation::Replace { path: LOGIN_PATH.to_owned(), search: redirect_search(current_path) }
}

pub fn failure_message<T>(envelope: &Envelope<T>) -> String {
    envelope.description().unwrap_or(REQUEST_FAILED_FALLBACK).to_owned()
}
