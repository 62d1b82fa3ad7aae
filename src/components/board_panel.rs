//! Dashboard tab showing the herd message board and a send box.

use leptos::prelude::*;

use crate::net::service::{Backend, SessionService};
use crate::state::board::{BoardState, author_name};

/// Message list plus input. `board` is owned by the dashboard so messages
/// survive tab switches.
#[component]
pub fn BoardPanel(board: RwSignal<BoardState>) -> impl IntoView {
    let backend = expect_context::<Backend>();

    let input = RwSignal::new(String::new());

    let do_send = move || {
        let Some(text) = board.try_update(|b| b.begin_send(&input.get_untracked())).flatten() else {
            return;
        };
        let author = author_name(backend.current_session());
        let backend = backend.clone();
        leptos::task::spawn_local(async move {
            let result = backend.submit_message(&text).await;
            if board.try_update(|b| b.finish_send(&author, text, result)).unwrap_or(false) {
                let _ = input.try_set(String::new());
            }
        });
    };
    let send_on_click = do_send.clone();

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_send();
        }
    };

    let sending = move || board.with(|b| b.sending);
    let can_send = move || !sending() && !input.with(|i| i.trim().is_empty());

    view! {
        <div class="board-panel">
            <h2 class="panel__title">"Herd Chatter"</h2>
            <div class="board-panel__messages">
                {move || {
                    board
                        .get()
                        .messages
                        .into_iter()
                        .map(|msg| {
                            view! {
                                <div class="board-message" class:board-message--own=msg.own>
                                    <span class="board-message__author">{msg.author}</span>
                                    <div class="board-message__text">{msg.content}</div>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>
            <Show when=move || board.with(|b| b.error.is_some())>
                <p class="board-panel__error">{move || board.with(|b| b.error.clone().unwrap_or_default())}</p>
            </Show>
            <div class="board-panel__input-row">
                <input
                    class="board-panel__input"
                    type="text"
                    placeholder="Type a message..."
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                    on:keydown=on_keydown
                />
                <button
                    class="board-panel__send"
                    on:click=move |_| send_on_click()
                    disabled=move || !can_send()
                >
                    "Moo!"
                </button>
            </div>
        </div>
    }
}
