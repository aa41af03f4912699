//! Single-owner application state: session + settings.
//!
//! DESIGN
//! ======
//! `AppStore` owns the only `AppState`. Writers send `StateEvent`s; the pure
//! `reduce` function builds the next value and the store swaps it in whole.
//! Readers take a snapshot or subscribe. Fields that an event does not touch
//! are carried over as `Arc` clones, so observers can compare by pointer.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::sync::Arc;

use leptos::prelude::*;

use super::settings::{LayoutSettings, SettingsPatch};
use crate::net::types::CurrentUser;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BootstrapPhase {
    #[default]
    Uninitialized,
    Loading,
    Ready,
}

/// State bundle exposed to the shell.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppState {
    pub phase: BootstrapPhase,
    pub settings: Arc<LayoutSettings>,
    pub current_user: Option<Arc<CurrentUser>>,
    /// Generation of the most recently requested session fetch.
    pub session_generation: u64,
}

impl AppState {
    pub fn new(settings: LayoutSettings) -> Self {
        Self { settings: Arc::new(settings), ..Self::default() }
    }

    pub fn loading(&self) -> bool {
        self.phase == BootstrapPhase::Loading
    }

    pub fn has_session(&self) -> bool {
        self.current_user.is_some()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum StateEvent {
    /// A session fetch tagged `generation` has started.
    SessionRequested { generation: u64 },
    /// A session fetch finished; `None` means no session.
    SessionResolved { generation: u64, user: Option<CurrentUser> },
    SettingsChanged(SettingsPatch),
}

/// Build the state that follows `state` after `event`.
pub fn reduce(state: &AppState, event: StateEvent) -> AppState {
    match event {
        StateEvent::SessionRequested { generation } => AppState {
            phase: match state.phase {
                BootstrapPhase::Ready => BootstrapPhase::Ready,
                BootstrapPhase::Uninitialized | BootstrapPhase::Loading => BootstrapPhase::Loading,
            },
            session_generation: generation.max(state.session_generation),
            ..state.clone()
        },
        StateEvent::SessionResolved { generation, user } => {
            if generation < state.session_generation {
                // No cancellation exists; a superseded fetch still lands.
                log::warn!(
                    "applying session from superseded fetch {generation} (latest {})",
                    state.session_generation
                );
            }
            AppState { phase: BootstrapPhase::Ready, current_user: user.map(Arc::new), ..state.clone() }
        }
        StateEvent::SettingsChanged(patch) => {
            if patch.is_empty() {
                return state.clone();
            }
            AppState { settings: Arc::new(state.settings.merged(&patch)), ..state.clone() }
        }
    }
}

type Subscriber = Rc<dyn Fn(&AppState)>;

pub struct AppStore {
    state: RefCell<AppState>,
    subscribers: RefCell<Vec<Subscriber>>,
    generation: Cell<u64>,
}

impl AppStore {
    pub fn new(initial: AppState) -> Self {
        Self { state: RefCell::new(initial), subscribers: RefCell::new(Vec::new()), generation: Cell::new(0) }
    }

    pub fn snapshot(&self) -> AppState {
        self.state.borrow().clone()
    }

    /// Register `f` to receive every state that replaces the current one.
    pub fn subscribe<F>(&self, f: F)
    where
        F: Fn(&AppState) + 'static,
    {
        self.subscribers.borrow_mut().push(Rc::new(f));
    }

    pub fn dispatch(&self, event: StateEvent) {
        let next = reduce(&self.state.borrow(), event);
        *self.state.borrow_mut() = next.clone();
        let subscribers: Vec<Subscriber> = self.subscribers.borrow().clone();
        for subscriber in subscribers {
            subscriber(&next);
        }
    }

    /// A signal seeded with the current state that follows every dispatch.
    pub fn mirror(&self) -> RwSignal<AppState> {
        let signal = RwSignal::new(self.snapshot());
        self.subscribe(move |state| signal.set(state.clone()));
        signal
    }

    pub fn update_settings(&self, patch: SettingsPatch) {
        self.dispatch(StateEvent::SettingsChanged(patch));
    }

    /// Allocate the tag for a new session fetch.
    pub fn next_generation(&self) -> u64 {
        let next = self.generation.get() + 1;
        self.generation.set(next);
        next
    }
}
