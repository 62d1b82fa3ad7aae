//! Member login page.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::net::mock::{VALID_IDENTIFIER, VALID_SECRET};
use crate::net::service::{Backend, SessionService};
use crate::state::auth::AuthState;
use crate::state::router::{RouterState, View};

const MISSING_CREDENTIALS: &str = "Email and password are required";

/// Starting field values. The mock backend's pair is prefilled and hinted.
fn initial_credentials(mock: bool) -> (String, String) {
    if mock { (VALID_IDENTIFIER.to_owned(), VALID_SECRET.to_owned()) } else { (String::new(), String::new()) }
}

fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(MISSING_CREDENTIALS);
    }
    Ok((email.to_owned(), password.to_owned()))
}

fn submit_label(loading: bool) -> &'static str {
    if loading { "AUTHENTICATING..." } else { "ENTER PASTURE" }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let router = expect_context::<RwSignal<RouterState>>();
    let backend = expect_context::<Backend>();

    let show_hint = backend.is_mock();
    let (initial_email, initial_password) = initial_credentials(show_hint);
    let email = RwSignal::new(initial_email);
    let password = RwSignal::new(initial_password);
    let error = RwSignal::new(String::new());

    let loading = move || auth.with(|a| a.loading);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let (email_value, password_value) =
            match validate_login_input(&email.get_untracked(), &password.get_untracked()) {
                Ok(values) => values,
                Err(msg) => {
                    error.set(msg.to_owned());
                    return;
                }
            };
        if !auth.try_update(AuthState::begin_sign_in).unwrap_or(false) {
            return;
        }
        error.set(String::new());

        let backend = backend.clone();
        leptos::task::spawn_local(async move {
            let result = backend.sign_in(&email_value, &password_value).await;
            match auth.try_update(|a| a.finish_sign_in(result)) {
                Some(Ok(())) => {
                    let _ = router.try_update(|r| r.navigate(View::Dashboard));
                }
                Some(Err(e)) => {
                    let _ = error.try_set(e.to_string());
                }
                None => {}
            }
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h2 class="login-card__title">"MEMBER ACCESS"</h2>

                <Show when=move || !error.get().is_empty()>
                    <div class="login-card__error">{move || error.get()}</div>
                </Show>

                <form class="login-form" on:submit=on_submit>
                    <label class="login-form__label">
                        "Email"
                        <input
                            class="login-input"
                            type="email"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="login-form__label">
                        "Password"
                        <input
                            class="login-input"
                            type="password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="login-button" type="submit" disabled=loading>
                        {move || submit_label(loading())}
                    </button>
                </form>

                {show_hint
                    .then(|| {
                        view! {
                            <p class="login-card__hint">
                                {format!("Hint: {VALID_IDENTIFIER} / {VALID_SECRET}")}
                            </p>
                        }
                    })}
            </div>
        </div>
    }
}
