//! Member dashboard: greeting header, tab sidebar, and the active panel.

use leptos::prelude::*;

use crate::components::board_panel::BoardPanel;
use crate::components::decorations::PlantDecoration;
use crate::components::events_panel::EventsPanel;
use crate::components::links_panel::LinksPanel;
use crate::state::auth::AuthState;
use crate::state::board::BoardState;
use crate::state::ui::DashboardTab;

/// Rendered only with a session; the app shows the login screen otherwise.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let tab = RwSignal::new(DashboardTab::default());
    let board = RwSignal::new(BoardState::default());

    let username = move || auth.with(|a| a.user.as_ref().map(|u| u.username.clone()).unwrap_or_default());
    let clearance = move || auth.with(|a| a.user.as_ref().map(|u| u.clearance.clone()).unwrap_or_default());

    let tabs = DashboardTab::ALL
        .into_iter()
        .map(|t| {
            view! {
                <button
                    class="dashboard__tab"
                    class:dashboard__tab--active=move || tab.get() == t
                    on:click=move |_| tab.set(t)
                >
                    {t.label()}
                </button>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="dashboard">
            <header class="dashboard__header">
                <h1 class="dashboard__welcome">"Welcome back, " {username} "."</h1>
                <p class="dashboard__subtitle">"The herd missed you."</p>
                <span class="dashboard__clearance">"Clearance: " {clearance}</span>
            </header>
            <main class="dashboard__body">
                <aside class="dashboard__sidebar">{tabs}</aside>
                <section class="dashboard__content">
                    <PlantDecoration position="plant--corner"/>
                    {move || match tab.get() {
                        DashboardTab::Events => view! { <EventsPanel/> }.into_any(),
                        DashboardTab::Board => view! { <BoardPanel board=board/> }.into_any(),
                        DashboardTab::Links => view! { <LinksPanel/> }.into_any(),
                    }}
                </section>
            </main>
        </div>
    }
}
