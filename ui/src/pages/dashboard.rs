//! Dashboard: the user's firms with add and delete.

use finansrisk::firma::Firma;
use leptos::prelude::*;

use crate::components::firma_form::FirmaForm;
use crate::components::firma_table::FirmaTable;
use crate::state::auth::AuthState;
use crate::state::firmalar::{FirmalarState, delete_confirm_message};
use crate::util::dialog::{alert, confirm};

const LOAD_FAILED: &str = "Failed to load the firm list.";
const DELETE_FAILED: &str = "Failed to delete the firma.";

fn load_firmalar(auth: AuthState, firmalar: RwSignal<FirmalarState>) {
    firmalar.update(FirmalarState::begin_load);
    leptos::task::spawn_local(async move {
        match auth.api().list_firmalar().await {
            Ok(items) => firmalar.update(|s| s.finish_load(items)),
            Err(e) => {
                firmalar.update(|s| s.fail_load(e.display_message(LOAD_FAILED)));
                auth.handle_error(&e);
            }
        }
    });
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<AuthState>();
    let firmalar = RwSignal::new(FirmalarState::default());
    let show_form = RwSignal::new(false);

    load_firmalar(auth, firmalar);

    let on_created = Callback::new(move |firma: Firma| {
        firmalar.update(|s| s.insert_sorted(firma));
        show_form.set(false);
    });
    let on_cancel = Callback::new(move |()| show_form.set(false));
    let on_delete = Callback::new(move |firma: Firma| {
        if !confirm(&delete_confirm_message(&firma)) {
            return;
        }
        leptos::task::spawn_local(async move {
            match auth.api().delete_firma(firma.id).await {
                Ok(_) => firmalar.update(|s| s.remove(firma.id)),
                Err(e) => {
                    if !auth.handle_error(&e) {
                        alert(&e.display_message(DELETE_FAILED));
                    }
                }
            }
        });
    });

    let welcome = move || auth.session.with(|s| s.username().unwrap_or_default().to_owned());

    view! {
        <div class="dashboard-page">
            <h2>"Welcome, " {welcome} "!"</h2>
            <section class="panel">
                <h3>"Firma management"</h3>
                <Show
                    when=move || show_form.get()
                    fallback=move || {
                        view! {
                            <button class="btn btn--primary" on:click=move |_| show_form.set(true)>
                                "+ Add new firma"
                            </button>
                        }
                    }
                >
                    <FirmaForm on_created on_cancel/>
                </Show>
            </section>
            <section class="panel">
                <h3>"Registered firms"</h3>
                <Show when=move || firmalar.with(|s| s.loading)>
                    <p class="info-text">"Loading firms..."</p>
                </Show>
                {move || firmalar.with(|s| s.error.clone()).map(|msg| view! { <p class="error-text">{msg}</p> })}
                <Show when=move || firmalar.with(|s| !s.loading && s.error.is_none())>
                    <Show
                        when=move || firmalar.with(|s| !s.items.is_empty())
                        fallback=|| view! { <p class="info-text">"No firms registered yet."</p> }
                    >
                        <FirmaTable firmalar on_delete/>
                    </Show>
                </Show>
            </section>
        </div>
    }
}
