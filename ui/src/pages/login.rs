//! Login page.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::components::A;

use finansrisk::guard::REGISTER_PATH;

use crate::state::auth::AuthState;

const LOGIN_FAILED: &str = "Login failed. Check your credentials.";

/// Trimmed username and raw password, or the message to show.
pub(crate) fn validate_login_input(username: &str, password: &str) -> Result<(String, String), &'static str> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err("Enter both username and password.");
    }
    Ok((username.to_owned(), password.to_owned()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<AuthState>();
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        error.set(None);
        let (user, pass) = match validate_login_input(&username.get_untracked(), &password.get_untracked()) {
            Ok(input) => input,
            Err(msg) => {
                error.set(Some(msg.to_owned()));
                return;
            }
        };

        busy.set(true);
        let manager = auth.manager();
        leptos::task::spawn_local(async move {
            // Success re-validates the session and the guest guard redirects.
            if let Err(e) = manager.login(&user, &pass).await {
                leptos::logging::warn!("login failed: {e}");
                error.set(Some(e.display_message(LOGIN_FAILED)));
                busy.set(false);
            }
        });
    };

    view! {
        <div class="auth-page">
            <h2>"Log in"</h2>
            <form class="auth-form" on:submit=on_submit>
                {move || error.get().map(|msg| view! { <p class="error-text">{msg}</p> })}
                <label for="login-username">"Username"</label>
                <input
                    id="login-username"
                    type="text"
                    autocomplete="username"
                    required
                    prop:value=move || username.get()
                    on:input=move |ev| username.set(event_target_value(&ev))
                />
                <label for="login-password">"Password"</label>
                <input
                    id="login-password"
                    type="password"
                    autocomplete="current-password"
                    required
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Logging in..." } else { "Log in" }}
                </button>
            </form>
            <p class="auth-page__switch">
                "No account yet? " <A href=REGISTER_PATH>"Register"</A>
            </p>
        </div>
    }
}
