//! Route guard components.
//!
//! SYSTEM CONTEXT
//! ==============
//! The decision itself is `finansrisk::guard`; these components only turn an
//! outcome into a placeholder, the protected children, or a redirect. Each
//! outcome is memoized so a re-validation that lands on the same answer does
//! not remount the page underneath.

use finansrisk::guard::{GuardOutcome, guard, guest_only, landing};
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::Redirect;

use crate::state::auth::AuthState;

/// Render `children` only for an authenticated session.
#[component]
pub fn PrivateRoute(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<AuthState>();
    let outcome = Memo::new(move |_| guard(&auth.session.get()));

    move || match outcome.get() {
        GuardOutcome::Checking => view! { <p class="auth-checking">"Checking authorization..."</p> }.into_any(),
        GuardOutcome::Allow => children().into_any(),
        other => redirect_view(other),
    }
}

/// Render `children` only while nobody is logged in.
#[component]
pub fn GuestRoute(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<AuthState>();
    let outcome = Memo::new(move |_| guest_only(&auth.session.get()));

    move || match outcome.get() {
        GuardOutcome::Checking => view! { <p class="auth-checking">"Loading..."</p> }.into_any(),
        GuardOutcome::Allow => children().into_any(),
        other => redirect_view(other),
    }
}

/// Root path: forward to the dashboard or the login page.
#[component]
pub fn LandingRedirect() -> impl IntoView {
    let auth = expect_context::<AuthState>();
    let outcome = Memo::new(move |_| landing(&auth.session.get()));

    move || match outcome.get() {
        GuardOutcome::Checking => view! { <p class="auth-checking">"Redirecting..."</p> }.into_any(),
        other => redirect_view(other),
    }
}

/// Replace the current history entry with the outcome's target, if any.
pub fn redirect_view(outcome: GuardOutcome) -> AnyView {
    match outcome.redirect_path() {
        Some(path) => {
            let options = NavigateOptions { replace: true, ..NavigateOptions::default() };
            view! { <Redirect path=path options=options/> }.into_any()
        }
        None => ().into_any(),
    }
}
