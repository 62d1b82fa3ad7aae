//! Decorative SVG pieces: the grass strip and the flowering plant.

use leptos::prelude::*;

/// Wavy grass strip pinned to the bottom of a screen.
#[component]
pub fn GrassStrip() -> impl IntoView {
    view! {
        <div class="grass-strip">
            <svg class="grass-strip__svg" viewBox="0 0 1200 120" preserveAspectRatio="none" aria-hidden="true">
                <path d="M0,0 V46.29 C47.79,22.2 103.59,32.17 158,28 C170.36,27.05 180.75,23.16 192,20 C242.42,5.84 286.07,35.45 330,45 C386.4,57.25 436.56,23.36 500,29 C562.9,34.59 598.67,61.9 655,67 C705.57,71.58 751.99,44.27 800,34 C861.91,20.76 910.82,46.12 970,52 C1032.55,58.21 1083.47,31.24 1140,31 C1160.7,30.91 1180.87,33.51 1200,38 V120 H0 V0 Z"></path>
            </svg>
        </div>
    }
}

/// Three-stemmed plant; `position` is an extra class that places it.
#[component]
pub fn PlantDecoration(#[prop(into)] position: String) -> impl IntoView {
    view! {
        <div class=format!("plant {position}")>
            <svg width="100" height="100" viewBox="0 0 100 100" aria-hidden="true">
                <path d="M50 100 Q 20 50 10 20 Q 50 40 50 100"></path>
                <path d="M50 100 Q 80 50 90 20 Q 50 40 50 100"></path>
                <path d="M50 100 Q 50 10 50 0 Q 60 40 50 100"></path>
                <circle class="plant__bloom plant__bloom--pink" cx="10" cy="20" r="5"></circle>
                <circle class="plant__bloom plant__bloom--yellow" cx="90" cy="20" r="5"></circle>
                <circle class="plant__bloom plant__bloom--white" cx="50" cy="0" r="5"></circle>
            </svg>
        </div>
    }
}
