//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth`, `router`, `registration`, etc.) so
//! individual screens depend on small focused models. The plain structs here
//! are wrapped in `RwSignal`s and provided via context by `app`.

pub mod auth;
pub mod board;
pub mod registration;
pub mod router;
pub mod ui;
