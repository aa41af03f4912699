//! Routed pages.

pub mod login;
pub mod register;
pub mod welcome;
