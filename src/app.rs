//! Root application component and context providers.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::{footer::Footer, nav_bar::NavBar};
use crate::config::{AppConfig, ConfigError};
use crate::net::mock::MockSessionService;
use crate::net::service::Backend;
use crate::pages::{
    dashboard::DashboardPage, gallery::GalleryPage, landing::LandingPage, login::LoginPage, lore::LorePage,
    register::RegisterPage,
};
use crate::state::{auth::AuthState, router::RouterState, router::View, ui::UiState};

/// Pick the backend for this build. A bad configuration falls back to the
/// mock so the site still renders.
fn compose_backend(config: Result<AppConfig, ConfigError>) -> Backend {
    let built = config.and_then(|c| Backend::from_config(&c));
    match built {
        Ok(backend) => {
            log::info!("session backend: {}", if backend.is_mock() { "mock" } else { "http" });
            backend
        }
        Err(e) => {
            log::warn!("invalid backend configuration ({e}); using mock");
            Backend::Mock(MockSessionService::default())
        }
    }
}

/// Root application component.
///
/// Provides the shared state and the session backend, then renders the
/// screen selected by the router.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let router = RwSignal::new(RouterState::default());
    let ui = RwSignal::new(UiState::default());

    provide_context(auth);
    provide_context(router);
    provide_context(ui);
    provide_context(compose_backend(AppConfig::from_build_env()));

    let screen = Memo::new(move |_| router.with(|r| r.screen(auth.with(AuthState::is_signed_in))));

    view! {
        <Title text="Cows with a K"/>

        <div class="app">
            <NavBar/>
            <main class="app__main">
                {move || match screen.get() {
                    View::Landing => view! { <LandingPage/> }.into_any(),
                    View::Lore => view! { <LorePage/> }.into_any(),
                    View::Gallery => view! { <GalleryPage/> }.into_any(),
                    View::Register => view! { <RegisterPage/> }.into_any(),
                    View::Login => view! { <LoginPage/> }.into_any(),
                    View::Dashboard => view! { <DashboardPage/> }.into_any(),
                }}
            </main>
            <Footer/>
        </div>
    }
}
