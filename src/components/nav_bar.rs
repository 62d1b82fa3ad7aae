//! Top navigation bar with desktop links, mobile menu, and logout.

#[cfg(test)]
#[path = "nav_bar_test.rs"]
mod nav_bar_test;

use leptos::prelude::*;

use crate::net::service::{Backend, SessionService};
use crate::state::auth::AuthState;
use crate::state::router::{RouterState, View};
use crate::state::ui::UiState;

/// A navigation entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub view: View,
    pub label: &'static str,
}

/// Entries visible for the given sign-in status, in display order.
///
/// Register and login are offered only to visitors; the dashboard only to
/// members.
pub fn visible_nav_items(signed_in: bool) -> Vec<NavItem> {
    [
        (View::Landing, "Home", true),
        (View::Lore, "Lore", true),
        (View::Gallery, "Gallery", true),
        (View::Register, "Join the Herd", !signed_in),
        (View::Login, "Login", !signed_in),
        (View::Dashboard, "The Pasture", signed_in),
    ]
    .into_iter()
    .filter(|(_, _, visible)| *visible)
    .map(|(view, label, _)| NavItem { view, label })
    .collect()
}

/// Local half of logout: drop the session, close the menu, go home.
///
/// Runs before the backend is told; the Logout control is gone while a
/// remote sign-out is still in flight.
pub fn end_session(auth: &mut AuthState, router: &mut RouterState, ui: &mut UiState) {
    ui.close_menu();
    router.sign_out(auth);
}

/// Sticky site header.
#[component]
pub fn NavBar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let router = expect_context::<RwSignal<RouterState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let backend = expect_context::<Backend>();

    let signed_in = move || auth.with(AuthState::is_signed_in);

    let go = move |view: View| {
        router.update(|r| r.navigate(view));
        ui.update(UiState::close_menu);
    };

    let logout = Callback::new(move |()| {
        ui.update(|u| auth.update(|a| router.update(|r| end_session(a, r, u))));
        let backend = backend.clone();
        leptos::task::spawn_local(async move {
            backend.sign_out().await;
        });
    });

    let links = move || {
        visible_nav_items(signed_in())
            .into_iter()
            .map(|item| {
                view! {
                    <button class="nav__link" on:click=move |_| go(item.view)>
                        {item.label}
                    </button>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <nav class="nav">
            <div class="nav__bar">
                <button class="nav__brand" on:click=move |_| go(View::Landing)>
                    "COWS WITH A "
                    <span class="nav__brand-k">"K"</span>
                </button>
                <div class="nav__links">
                    {links}
                    <Show when=signed_in>
                        <button class="nav__logout" on:click=move |_| logout.run(())>
                            "Logout"
                        </button>
                    </Show>
                </div>
                <button
                    class="nav__menu-toggle"
                    on:click=move |_| ui.update(UiState::toggle_menu)
                    title="Menu"
                >
                    {move || if ui.with(|u| u.menu_open) { "✕" } else { "☰" }}
                </button>
            </div>
            <Show when=move || ui.with(|u| u.menu_open)>
                <div class="nav__mobile">
                    {links}
                    <Show when=signed_in>
                        <button class="nav__logout nav__logout--mobile" on:click=move |_| logout.run(())>
                            "Logout"
                        </button>
                    </Show>
                </div>
            </Show>
        </nav>
    }
}
