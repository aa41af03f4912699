//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate router and notification concerns from page and
//! component logic so the request pipeline and guard stay testable natively.

pub mod auth;
pub mod navigation;
pub mod notify;
