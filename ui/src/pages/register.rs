//! Registration page.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use finansrisk::guard::LOGIN_PATH;
use finansrisk::session::check_registration;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::auth::AuthState;

const REGISTER_FAILED: &str = "Registration failed.";
#[cfg(feature = "csr")]
const REDIRECT_DELAY_MS: u32 = 2_000;

/// Local checks run before the request: confirmation first, then the core's
/// account policy.
pub(crate) fn validate_register_input(username: &str, password: &str, confirm: &str) -> Result<(), String> {
    if password != confirm {
        return Err("Passwords do not match.".to_owned());
    }
    check_registration(username, password).map_err(|e| e.display_message(REGISTER_FAILED))
}

pub(crate) fn register_success_message(server_msg: Option<&str>) -> String {
    let msg = server_msg.map(str::trim).filter(|m| !m.is_empty()).unwrap_or("Registration successful");
    format!("{}. Redirecting to login...", msg.trim_end_matches('.'))
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = expect_context::<AuthState>();
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let success = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);
    #[cfg(feature = "csr")]
    let navigate = leptos_router::hooks::use_navigate();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() || success.get_untracked().is_some() {
            return;
        }
        error.set(None);
        let user = username.get_untracked().trim().to_owned();
        let pass = password.get_untracked();
        if let Err(msg) = validate_register_input(&user, &pass, &confirm.get_untracked()) {
            error.set(Some(msg));
            return;
        }

        busy.set(true);
        let manager = auth.manager();
        #[cfg(feature = "csr")]
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match manager.register(&user, &pass).await {
                Ok(reply) => {
                    busy.set(false);
                    success.set(Some(register_success_message(reply.msg.as_deref())));
                    #[cfg(feature = "csr")]
                    {
                        gloo_timers::future::TimeoutFuture::new(REDIRECT_DELAY_MS).await;
                        navigate(LOGIN_PATH, leptos_router::NavigateOptions::default());
                    }
                }
                Err(e) => {
                    leptos::logging::warn!("registration failed: {e}");
                    busy.set(false);
                    error.set(Some(e.display_message(REGISTER_FAILED)));
                }
            }
        });
    };

    view! {
        <div class="auth-page">
            <h2>"Register"</h2>
            <form class="auth-form" on:submit=on_submit>
                {move || error.get().map(|msg| view! { <p class="error-text">{msg}</p> })}
                {move || success.get().map(|msg| view! { <p class="success-text">{msg}</p> })}
                <label for="register-username">"Username"</label>
                <input
                    id="register-username"
                    type="text"
                    autocomplete="username"
                    required
                    prop:value=move || username.get()
                    on:input=move |ev| username.set(event_target_value(&ev))
                />
                <label for="register-password">"Password"</label>
                <input
                    id="register-password"
                    type="password"
                    autocomplete="new-password"
                    required
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <label for="register-confirm">"Confirm password"</label>
                <input
                    id="register-confirm"
                    type="password"
                    autocomplete="new-password"
                    required
                    prop:value=move || confirm.get()
                    on:input=move |ev| confirm.set(event_target_value(&ev))
                />
                <button
                    class="btn btn--primary"
                    type="submit"
                    disabled=move || busy.get() || success.with(Option::is_some)
                >
                    {move || if busy.get() { "Registering..." } else { "Register" }}
                </button>
            </form>
            <p class="auth-page__switch">
                "Already have an account? " <A href=LOGIN_PATH>"Log in"</A>
            </p>
        </div>
    }
}
