//! Route guard applied on every navigation.
//!
//! SYSTEM CONTEXT
//! ==============
//! Whitelisted routes are always reachable. Any other route requires a
//! session; without one the guard pushes the login route (no `redirect`
//! parameter, unlike the request interceptor).

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;

use crate::config::{LOGIN_PATH, NO_NEED_LOGIN_WHITELIST};
use crate::state::store::{AppState, BootstrapPhase};
use crate::util::navigation::{Navigation, Navigator};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    Redirect(Navigation),
}

pub fn is_public_route(pathname: &str) -> bool {
    NO_NEED_LOGIN_WHITELIST.contains(&pathname)
}

/// Decide whether `pathname` may be shown given session presence.
pub fn evaluate_route(pathname: &str, has_session: bool) -> GuardDecision {
    if is_public_route(pathname) || has_session || pathname == LOGIN_PATH {
        GuardDecision::Allow
    } else {
        GuardDecision::Redirect(Navigation::push(LOGIN_PATH))
    }
}

/// Stateful guard that skips re-evaluating an unchanged (path, session) pair.
#[derive(Debug, Default)]
pub struct RouteGuard {
    last: RefCell<Option<(String, bool)>>,
}

impl RouteGuard {
    /// Evaluate and, on redirect, navigate. Returns the navigation performed.
    pub fn check(&self, pathname: &str, has_session: bool, navigator: &dyn Navigator) -> Option<Navigation> {
        let key = (pathname.to_owned(), has_session);
        if self.last.borrow().as_ref() == Some(&key) {
            return None;
        }
        *self.last.borrow_mut() = Some(key);

        match evaluate_route(pathname, has_session) {
            GuardDecision::Allow => None,
            GuardDecision::Redirect(nav) => {
                log::info!("guard: {pathname} requires a session, redirecting");
                nav.apply(navigator);
                Some(nav)
            }
        }
    }
}

impl RouteGuard {
    /// [`RouteGuard::check`] against a full state snapshot. Nothing is
    /// evaluated, or remembered, until bootstrap is `Ready`.
    pub fn observe(&self, pathname: &str, state: &AppState, navigator: &dyn Navigator) -> Option<Navigation> {
        if state.phase != BootstrapPhase::Ready {
            return None;
        }
        self.check(pathname, state.has_session(), navigator)
    }
}

/// Run the route guard whenever the location or the session changes, once
/// bootstrap has reached `Ready`.
pub fn install_route_guard(app_state: RwSignal<AppState>, pathname: Memo<String>, navigator: Rc<dyn Navigator>) {
    let guard = RouteGuard::default();
    Effect::new(move || {
        let path = pathname.get();
        app_state.with(|state| {
            guard.observe(&path, state, navigator.as_ref());
        });
    });
}
