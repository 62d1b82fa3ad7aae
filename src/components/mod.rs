//! Reusable view components.
//!
//! ARCHITECTURE
//! ============
//! Site chrome (`nav_bar`, `footer`, `decorations`) wraps every screen; the
//! `*_panel` components render the dashboard tabs.

pub mod board_panel;
pub mod decorations;
pub mod events_panel;
pub mod footer;
pub mod links_panel;
pub mod nav_bar;
