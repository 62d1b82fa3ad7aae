//! Page modules for the top-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns screen-scoped state and delegates repeated pieces to
//! `components`. `app` picks which page to mount from the router state.

pub mod dashboard;
pub mod gallery;
pub mod landing;
pub mod login;
pub mod lore;
pub mod register;
