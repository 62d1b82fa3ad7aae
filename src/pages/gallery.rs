//! "Hall of Hooves" gallery page.

use leptos::prelude::*;

use crate::content::GALLERY_IMAGES;

#[component]
pub fn GalleryPage() -> impl IntoView {
    view! {
        <div class="gallery-page">
            <header class="gallery-page__header">
                <h2 class="gallery-page__title">"Hall of Hooves"</h2>
                <p class="gallery-page__subtitle">"Honoring excellence in the field (literally)."</p>
            </header>
            <div class="gallery-page__grid">
                {GALLERY_IMAGES
                    .iter()
                    .map(|img| {
                        view! {
                            <figure class="polaroid">
                                <div class="polaroid__tape"></div>
                                <img class="polaroid__img" src=img.url alt=img.caption/>
                                <figcaption class="polaroid__caption">{img.caption}</figcaption>
                            </figure>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}
