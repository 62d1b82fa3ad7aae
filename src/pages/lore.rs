//! Lore archive page.

use leptos::prelude::*;

use crate::content::LORE;

/// Classified archive entries. Entry bodies may contain inline redaction markup.
#[component]
pub fn LorePage() -> impl IntoView {
    view! {
        <div class="lore-page">
            <h2 class="lore-page__title">"ARCHIVES: CLASSIFIED"</h2>
            <div class="lore-page__entries">
                {LORE
                    .iter()
                    .map(|entry| {
                        view! {
                            <article class="lore-entry">
                                <div class="lore-entry__clearance">{entry.clearance}</div>
                                <h3 class="lore-entry__title">{entry.title}</h3>
                                <p class="lore-entry__date">{format!("LOG DATE: {}", entry.date)}</p>
                                <div class="lore-entry__body" inner_html=entry.content></div>
                            </article>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}
