//! Networking modules for the backend REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `transport` issues raw HTTP requests, `client` runs every response through
//! the `interceptor`, `api` exposes typed endpoints, and `envelope`/`types`
//! define the wire schema.

pub mod api;
pub mod client;
pub mod envelope;
pub mod error;
pub mod interceptor;
pub mod transport;
pub mod types;
