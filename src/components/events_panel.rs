//! Dashboard tab listing upcoming gatherings.

use leptos::prelude::*;

use crate::content::EVENTS;
use crate::util::dates::event_badge;

#[component]
pub fn EventsPanel() -> impl IntoView {
    view! {
        <div class="events-panel">
            <h2 class="panel__title">"Upcoming Gatherings"</h2>
            <div class="events-panel__list">
                {EVENTS
                    .iter()
                    .map(|ev| {
                        let (month, day) = event_badge(ev.date)
                            .map_or_else(|| (String::new(), String::new()), |(m, d)| (m, d.to_string()));
                        view! {
                            <div class="event-card">
                                <div class="event-card__body">
                                    <h3 class="event-card__title">{ev.title}</h3>
                                    <p class="event-card__location">{ev.location}</p>
                                </div>
                                <div class="event-card__badge">
                                    <span class="event-card__month">{month}</span>
                                    <span class="event-card__day">{day}</span>
                                </div>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}
