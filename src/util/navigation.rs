//! Router capability used by the request pipeline and the route guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! The interceptor, bootstrap and guard only ever need three things from a
//! router: the current pathname, `push`, and `replace` with a search string.
//! [`RouterNavigator`] binds them to `leptos_router`; [`MemoryHistory`] keeps
//! an in-process stack for tests and non-browser hosts.

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

use std::cell::RefCell;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

/// Query parameter carrying the path to return to after login.
pub const REDIRECT_PARAM: &str = "redirect";

pub trait Navigator {
    /// Pathname of the current location, without search or hash.
    fn pathname(&self) -> String;

    /// Navigate to `path`, adding a history entry.
    fn push(&self, path: &str);

    /// Navigate to `path?search`, overwriting the current history entry.
    fn replace(&self, path: &str, search: &str);
}

/// A navigation side effect, described rather than performed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Navigation {
    Push { path: String },
    Replace { path: String, search: String },
}

impl Navigation {
    pub fn push(path: impl Into<String>) -> Self {
        Self::Push { path: path.into() }
    }

    pub fn apply(&self, navigator: &dyn Navigator) {
        match self {
            Self::Push { path } => navigator.push(path),
            Self::Replace { path, search } => navigator.replace(path, search),
        }
    }

    pub fn href(&self) -> String {
        match self {
            Self::Push { path } => path.clone(),
            Self::Replace { path, search } => with_search(path, search),
        }
    }
}

/// `path` with `search` appended, omitting the `?` when `search` is empty.
pub fn with_search(path: &str, search: &str) -> String {
    let search = search.trim_start_matches('?');
    if search.is_empty() { path.to_owned() } else { format!("{path}?{search}") }
}

/// Form-encode `redirect=<path>`.
pub fn redirect_search(path: &str) -> String {
    url::form_urlencoded::Serializer::new(String::new())
        .append_pair(REDIRECT_PARAM, path)
        .finish()
}

/// Read the `redirect` parameter from a search string.
///
/// Only same-site absolute paths are returned; anything else (including
/// protocol-relative `//host` targets) yields `None`.
pub fn redirect_target(search: &str) -> Option<String> {
    url::form_urlencoded::parse(search.trim_start_matches('?').as_bytes())
        .find(|(key, _)| key == REDIRECT_PARAM)
        .map(|(_, value)| value.into_owned())
        .filter(|target| target.starts_with('/') && !target.starts_with("//"))
}

// =============================================================
// MemoryHistory
// =============================================================

#[derive(Debug)]
struct HistoryInner {
    entries: Vec<String>,
    index: usize,
    log: Vec<Navigation>,
}

/// In-process history stack.
#[derive(Debug)]
pub struct MemoryHistory {
    inner: RefCell<HistoryInner>,
}

impl MemoryHistory {
    pub fn new(initial: &str) -> Self {
        Self {
            inner: RefCell::new(HistoryInner { entries: vec![initial.to_owned()], index: 0, log: Vec::new() }),
        }
    }

    /// Full href of the current entry.
    pub fn location(&self) -> String {
        let inner = self.inner.borrow();
        inner.entries.get(inner.index).cloned().unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.inner.borrow().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.borrow().entries.is_empty()
    }

    /// Every navigation performed so far, oldest first.
    pub fn navigations(&self) -> Vec<Navigation> {
        self.inner.borrow().log.clone()
    }

    pub fn back(&self) {
        let mut inner = self.inner.borrow_mut();
        inner.index = inner.index.saturating_sub(1);
    }
}

impl Navigator for MemoryHistory {
    fn pathname(&self) -> String {
        let location = self.location();
        let end = location.find(['?', '#']).unwrap_or(location.len());
        location[..end].to_owned()
    }

    fn push(&self, path: &str) {
        let mut inner = self.inner.borrow_mut();
        let keep = inner.index + 1;
        inner.entries.truncate(keep);
        inner.entries.push(path.to_owned());
        inner.index = inner.entries.len() - 1;
        inner.log.push(Navigation::push(path));
    }

    fn replace(&self, path: &str, search: &str) {
        let mut inner = self.inner.borrow_mut();
        let index = inner.index;
        let href = with_search(path, search);
        match inner.entries.get_mut(index) {
            Some(entry) => *entry = href,
            None => inner.entries.push(href),
        }
        inner.log.push(Navigation::Replace { path: path.to_owned(), search: search.to_owned() });
    }
}

// =============================================================
// RouterNavigator
// =============================================================

/// [`Navigator`] backed by `leptos_router`.
///
/// Must be constructed inside a `<Router>` so `use_navigate` and
/// `use_location` resolve.
pub struct RouterNavigator {
    navigate: Box<dyn Fn(&str, NavigateOptions)>,
    pathname: Memo<String>,
}

impl RouterNavigator {
    pub fn new<F>(navigate: F, pathname: Memo<String>) -> Self
    where
        F: Fn(&str, NavigateOptions) + 'static,
    {
        Self { navigate: Box::new(navigate), pathname }
    }

    /// Bind to the router of the current reactive owner.
    pub fn from_router() -> Self {
        let location = leptos_router::hooks::use_location();
        Self::new(leptos_router::hooks::use_navigate(), location.pathname)
    }
}

impl Navigator for RouterNavigator {
    fn pathname(&self) -> String {
        self.pathname.get_untracked()
    }

    fn push(&self, path: &str) {
        (self.navigate)(path, NavigateOptions::default());
    }

    fn replace(&self, path: &str, search: &str) {
        let options = NavigateOptions { replace: true, ..NavigateOptions::default() };
        (self.navigate)(&with_search(path, search), options);
    }
}
