//! Networking modules for the sign-in and submission backends.
//!
//! SYSTEM CONTEXT
//! ==============
//! `service` defines the `SessionService` seam and the `Backend` dispatch,
//! `mock` is the in-memory stand-in, `api` the real HTTP client, and
//! `types` the shared records and wire schema.

pub mod api;
pub mod mock;
pub mod service;
pub mod types;
