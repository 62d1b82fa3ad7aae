//! Site footer.

use leptos::prelude::*;

use crate::util::dates::current_year;

#[component]
pub fn Footer() -> impl IntoView {
    let year = current_year();

    view! {
        <footer class="footer">
            <p class="footer__copyright">{format!("© {year} Cows with a K.")}</p>
            <p class="footer__tagline">"Hosted on AWS S3 • Powered by Grass & Secrets"</p>
        </footer>
    }
}
