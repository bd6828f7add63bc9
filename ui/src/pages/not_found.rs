//! Fallback for unknown routes.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found-page">
            <h2>"404 - Page not found"</h2>
            <p>"The page you are looking for does not exist."</p>
            <A href="/">"Back to the home page"</A>
        </div>
    }
}
