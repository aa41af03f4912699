//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the admin chrome while reading shared state from Leptos
//! context providers.

pub mod layout;
pub mod notice;
pub mod settings_drawer;
