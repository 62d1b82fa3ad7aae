//! # pasture
//!
//! Leptos front end for the Cows with a K members site: public lore and
//! gallery screens, a registration questionnaire, and a member dashboard
//! behind a sign-in.
//!
//! Views never talk to a backend directly. They go through the
//! [`net::service::SessionService`] seam, backed by either the in-memory
//! mock or the HTTP client selected at build time (see [`config`]).

pub mod app;
pub mod components;
pub mod config;
pub mod content;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install the panic hook and logger, then mount.
#[cfg(feature = "csr")]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("mounting pasture");
    leptos::mount::mount_to_body(app::App);
}
