//! Session bootstrap: produces the initial application state once per load.
//!
//! SYSTEM CONTEXT
//! ==============
//! `Uninitialized -> Loading -> Ready(session, settings)`. The Loading ->
//! Ready step never fails outward: any fetch failure settles as "no session"
//! plus a declared push to the login route. When the page is loaded directly
//! on the login route the fetch is skipped and the state goes straight to
//! `Ready(None)`.

#[cfg(test)]
#[path = "bootstrap_test.rs"]
mod bootstrap_test;

use std::rc::Rc;

use async_trait::async_trait;

use super::store::{AppState, AppStore, BootstrapPhase, StateEvent};
use crate::config::LOGIN_PATH;
use crate::net::client::RequestOptions;
use crate::net::error::ApiError;
use crate::net::types::CurrentUser;
use crate::util::navigation::{Navigation, Navigator};

/// Where the current session comes from.
#[async_trait(?Send)]
pub trait SessionSource {
    /// # Errors
    ///
    /// Returns an [`ApiError`] when no session could be established.
    async fn fetch_current_user(&self, options: RequestOptions) -> Result<CurrentUser, ApiError>;
}

/// Result of one session fetch after normalization.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionOutcome {
    pub user: Option<CurrentUser>,
    pub effect: Option<Navigation>,
}

/// Fold a fetch result into the two-state session signal.
pub fn settle(result: Result<CurrentUser, ApiError>) -> SessionOutcome {
    match result {
        Ok(user) => SessionOutcome { user: Some(user), effect: None },
        Err(err) => {
            log::info!("no session: {} ({err})", err.error_code());
            SessionOutcome { user: None, effect: Some(Navigation::push(LOGIN_PATH)) }
        }
    }
}

pub struct Bootstrap<S> {
    source: S,
    navigator: Rc<dyn Navigator>,
    store: Rc<AppStore>,
}

impl<S: SessionSource> Bootstrap<S> {
    pub fn new(source: S, navigator: Rc<dyn Navigator>, store: Rc<AppStore>) -> Self {
        Self { source, navigator, store }
    }

    pub fn store(&self) -> &Rc<AppStore> {
        &self.store
    }

    /// Fetch the session without touching the store.
    ///
    /// The source's own error presentation is suppressed; a failure pushes
    /// the login route and yields `None`.
    pub async fn fetch_user_info(&self) -> Option<CurrentUser> {
        let outcome = settle(self.source.fetch_current_user(RequestOptions::silent()).await);
        if let Some(effect) = &outcome.effect {
            effect.apply(self.navigator.as_ref());
        }
        outcome.user
    }

    /// Drive the store from `Uninitialized` to `Ready`.
    pub async fn run(&self) -> AppState {
        let phase = self.store.snapshot().phase;
        if phase != BootstrapPhase::Uninitialized {
            log::debug!("bootstrap already started ({phase:?})");
            return self.store.snapshot();
        }
        if self.navigator.pathname() == LOGIN_PATH {
            log::debug!("initial location is the login route; skipping session fetch");
            let generation = self.store.snapshot().session_generation;
            self.store.dispatch(StateEvent::SessionResolved { generation, user: None });
            return self.store.snapshot();
        }
        self.refresh().await
    }

    /// Fetch the session and apply it, tagged with a fresh generation.
    pub async fn refresh(&self) -> AppState {
        let generation = self.store.next_generation();
        self.store.dispatch(StateEvent::SessionRequested { generation });
        let user = self.fetch_user_info().await;
        log::info!("session fetch {generation} settled: present={}", user.is_some());
        self.store.dispatch(StateEvent::SessionResolved { generation, user });
        self.store.snapshot()
    }

    /// Drop the session after logout, superseding any fetch in flight.
    pub fn clear_session(&self) {
        let generation = self.store.next_generation();
        self.store.dispatch(StateEvent::SessionRequested { generation });
        self.store.dispatch(StateEvent::SessionResolved { generation, user: None });
    }
}
