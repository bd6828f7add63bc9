//! Top navigation bar reflecting the current session.

use finansrisk::guard::{DASHBOARD_PATH, LOGIN_PATH, REGISTER_PATH};
use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::auth::AuthState;

#[component]
pub fn NavBar() -> impl IntoView {
    let auth = expect_context::<AuthState>();
    let session = auth.session;

    view! {
        <nav class="navbar">
            <span class="navbar__brand">
                <A href="/">"FinansRisk Pro"</A>
            </span>
            <div class="navbar__links">
                {move || {
                    let state = session.get();
                    if !state.is_ready() {
                        view! { <span class="navbar__status">"Loading..."</span> }.into_any()
                    } else if let Some(user) = state.user {
                        view! {
                            <A href=DASHBOARD_PATH>"Dashboard"</A>
                            <span class="navbar__user">"(" {user.username} ")"</span>
                            <button class="btn btn--danger" on:click=move |_| auth.logout()>
                                "Logout"
                            </button>
                        }
                            .into_any()
                    } else {
                        view! {
                            <A href=LOGIN_PATH>"Login"</A>
                            <A href=REGISTER_PATH>"Register"</A>
                        }
                            .into_any()
                    }
                }}
            </div>
        </nav>
    }
}
