//! Registration questionnaire and its acknowledgement screen.

use leptos::prelude::*;

use crate::content::{Question, QuestionKind, REGISTRATION_QUESTIONS};
use crate::net::service::{Backend, SessionService};
use crate::state::registration::{RegistrationDraft, SubmitStatus};
use crate::state::router::{RouterState, View};

#[component]
pub fn RegisterPage() -> impl IntoView {
    let router = expect_context::<RwSignal<RouterState>>();
    let backend = expect_context::<Backend>();

    let draft = RwSignal::new(RegistrationDraft::default());
    let status = RwSignal::new(SubmitStatus::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !draft.with_untracked(|d| d.is_complete(REGISTRATION_QUESTIONS)) {
            return;
        }
        if !status.try_update(SubmitStatus::begin).unwrap_or(false) {
            return;
        }
        let answers = draft.with_untracked(|d| d.answers().clone());
        let backend = backend.clone();
        leptos::task::spawn_local(async move {
            let result = backend.submit_registration(&answers).await;
            if let Some(info) = result.as_ref().ok().and_then(|ack| ack.debug_info.as_deref()) {
                log::debug!("registration debug: {info}");
            }
            let succeeded = result.is_ok();
            let _ = status.try_update(|s| s.finish(result));
            if succeeded {
                let _ = draft.try_set(RegistrationDraft::default());
            }
        });
    };

    let can_submit = move || {
        draft.with(|d| d.is_complete(REGISTRATION_QUESTIONS)) && !status.with(SubmitStatus::is_submitting)
    };
    let error = move || match status.get() {
        SubmitStatus::Error(msg) => Some(msg),
        _ => None,
    };

    let form = move || {
        view! {
            <div class="register-page">
                <h2 class="register-page__title">"Initiate Protocol: JOIN"</h2>
                <p class="register-page__intro">
                    "Answer truthfully. We have ways of knowing."
                </p>
                <form class="register-form" on:submit=on_submit.clone()>
                    {REGISTRATION_QUESTIONS
                        .iter()
                        .map(|q| view! { <QuestionField question=*q draft=draft/> })
                        .collect::<Vec<_>>()}
                    <label class="register-form__consent">
                        <input
                            type="checkbox"
                            prop:checked=move || draft.with(|d| d.consent)
                            on:change=move |ev| {
                                let checked = event_target_checked(&ev);
                                draft.update(|d| d.consent = checked);
                            }
                        />
                        "I consent to having my data processed by AWS Lambda functions. I understand that my account status is subject to the whims of the Bovine High Council."
                    </label>
                    {move || error().map(|msg| view! { <p class="register-form__error">{msg}</p> })}
                    <button class="register-form__submit" type="submit" disabled=move || !can_submit()>
                        {move || status.with(SubmitStatus::button_label)}
                    </button>
                </form>
            </div>
        }
    };

    let acknowledgement = move || match status.get() {
        SubmitStatus::Success(ack) => ack.message,
        _ => String::new(),
    };

    view! {
        <Show when=move || matches!(status.get(), SubmitStatus::Success(_)) fallback=form>
            <div class="register-success">
                <h2 class="register-success__title">"Moo-velous!"</h2>
                <p class="register-success__message">{acknowledgement}</p>
                <p class="register-success__next">"Next Steps: Graze patiently. Wait for the signal."</p>
                <button class="register-success__back" on:click=move |_| router.update(|r| r.navigate(View::Landing))>
                    "Return to Safety"
                </button>
            </div>
        </Show>
    }
}

/// One labelled input, rendered per question kind.
#[component]
fn QuestionField(question: Question, draft: RwSignal<RegistrationDraft>) -> impl IntoView {
    let id = question.id;
    let value = move || draft.with(|d| d.answer(id).to_owned());
    let set = move |ev: leptos::ev::Event| {
        let v = event_target_value(&ev);
        draft.update(|d| d.set_answer(id, v));
    };

    let input = match question.kind {
        QuestionKind::Text => view! {
            <input class="register-form__input" type="text" prop:value=value on:input=set/>
        }
        .into_any(),
        QuestionKind::Select(options) => view! {
            <select class="register-form__input" prop:value=value on:change=set>
                <option value="" disabled=true>"Select an option..."</option>
                {options
                    .iter()
                    .map(|opt| view! { <option value=*opt>{*opt}</option> })
                    .collect::<Vec<_>>()}
            </select>
        }
        .into_any(),
        QuestionKind::TextArea => view! {
            <textarea class="register-form__input" rows="4" prop:value=value on:input=set></textarea>
        }
        .into_any(),
    };

    view! {
        <label class="register-form__field">
            <span class="register-form__label">{question.label}</span>
            {input}
        </label>
    }
}
