//! Root component: session bootstrap, layout, and routes.

use std::sync::Arc;

use finansrisk::AuthSession;
use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::{ParamSegment, StaticSegment};

use crate::components::nav_bar::NavBar;
use crate::components::private_route::{GuestRoute, LandingRedirect, PrivateRoute};
use crate::net::browser_client;
use crate::pages::dashboard::DashboardPage;
use crate::pages::firma_detail::FirmaDetailPage;
use crate::pages::login::LoginPage;
use crate::pages::not_found::NotFoundPage;
use crate::pages::register::RegisterPage;
use crate::state::auth::AuthState;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = AuthState::new(Arc::new(AuthSession::new(browser_client())));
    provide_context(auth);
    // Every page load starts by checking the stored credential.
    auth.validate();

    view! {
        <Title text="FinansRisk Pro"/>
        <Router>
            <div class="app-shell">
                <NavBar/>
                <main class="app-main">
                    <Routes fallback=|| view! { <NotFoundPage/> }>
                        <Route path=StaticSegment("") view=LandingRedirect/>
                        <Route
                            path=StaticSegment("login")
                            view=|| view! { <GuestRoute><LoginPage/></GuestRoute> }
                        />
                        <Route path=StaticSegment("register") view=RegisterPage/>
                        <Route
                            path=StaticSegment("dashboard")
                            view=|| view! { <PrivateRoute><DashboardPage/></PrivateRoute> }
                        />
                        <Route
                            path=(StaticSegment("firmalar"), ParamSegment("firma_id"), StaticSegment("detay"))
                            view=|| view! { <PrivateRoute><FirmaDetailPage/></PrivateRoute> }
                        />
                    </Routes>
                </main>
                <footer class="app-footer">"FinansRisk Pro - financial risk analysis prototype"</footer>
            </div>
        </Router>
    }
}
