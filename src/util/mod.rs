//! Utility helpers shared across pages and components.

pub mod dates;
