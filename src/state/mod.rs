//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `store` owns the one application state value, `bootstrap` fills it with
//! the session, `settings` holds the layout options and `layout` derives the
//! chrome from all of the above.

pub mod bootstrap;
pub mod layout;
pub mod settings;
pub mod store;
