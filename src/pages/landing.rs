//! Landing page: hero banner and the festival takeover grid.

use leptos::prelude::*;

use crate::components::decorations::{GrassStrip, PlantDecoration};
use crate::content::FESTIVAL_IMAGES;

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="landing-page">
            <PlantDecoration position="plant--left"/>
            <PlantDecoration position="plant--right"/>

            <section class="hero">
                <div class="hero__stamp">"TOP SECRET!"</div>
                <h1 class="hero__title">
                    "WE ARE " <span class="hero__accent--pink">"WATCHING"</span> "."
                    <br/>
                    "WE ARE " <span class="hero__accent--green">"GRAZING"</span> "."
                </h1>
                <p class="hero__lead">
                    "The secret society they warned you about."
                    <br/>
                    <span class="hero__lead-strong">"Not sheep. Never sheep."</span>
                </p>
            </section>

            <section class="festival">
                <h2 class="festival__title">"Operation: MOOSIC FESTIVAL TAKEOVER"</h2>
                <div class="festival__grid">
                    {FESTIVAL_IMAGES
                        .iter()
                        .map(|img| {
                            view! {
                                <figure class="festival-card">
                                    <img class="festival-card__img" src=img.url alt=img.caption/>
                                    <figcaption class="festival-card__caption">{img.caption}</figcaption>
                                </figure>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </section>

            <GrassStrip/>
        </div>
    }
}
