//! Dashboard tab with member resource links.

use leptos::prelude::*;

use crate::content::MEMBER_LINKS;

#[component]
pub fn LinksPanel() -> impl IntoView {
    view! {
        <div class="links-panel">
            <h2 class="panel__title">"Useful Links"</h2>
            <div class="links-panel__grid">
                {MEMBER_LINKS
                    .iter()
                    .map(|link| {
                        view! {
                            <a class="link-card" href=link.url>
                                <h3 class="link-card__title">{link.title}</h3>
                                <p class="link-card__note">"External secure channel"</p>
                            </a>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}
