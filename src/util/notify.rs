//! User-visible notifications raised by the request pipeline.

#[cfg(test)]
#[path = "notify_test.rs"]
mod notify_test;

use std::cell::Cell;

use leptos::prelude::*;

pub trait Notifier {
    fn error(&self, text: &str);
}

/// A single toast shown by the shell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub text: String,
}

/// Publishes notifications into a signal the shell renders as a toast.
///
/// Ids only ever grow, so a dismiss timer armed for an earlier notice never
/// matches a later one, even after the toast was closed in between.
#[derive(Debug)]
pub struct ToastNotifier {
    notice: RwSignal<Option<Notice>>,
    next_id: Cell<u64>,
}

impl ToastNotifier {
    pub fn new(notice: RwSignal<Option<Notice>>) -> Self {
        Self { notice, next_id: Cell::new(0) }
    }
}

impl Notifier for ToastNotifier {
    fn error(&self, text: &str) {
        log::debug!("notice: {text}");
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.notice.set(Some(Notice { id, text: text.to_owned() }));
    }
}
