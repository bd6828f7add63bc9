//! Dashboard form for registering a new firma.

use finansrisk::firma::{Firma, NewFirma};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::state::auth::AuthState;

const CREATE_FAILED: &str = "Failed to add the firma.";

#[component]
pub fn FirmaForm(on_created: Callback<Firma>, on_cancel: Callback<()>) -> impl IntoView {
    let auth = expect_context::<AuthState>();
    let adi = RwSignal::new(String::new());
    let vkn = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        error.set(None);
        let new_firma = match NewFirma::new(&adi.get_untracked(), &vkn.get_untracked()) {
            Ok(firma) => firma,
            Err(e) => {
                error.set(Some(e.display_message(CREATE_FAILED)));
                return;
            }
        };

        busy.set(true);
        leptos::task::spawn_local(async move {
            match auth.api().create_firma(&new_firma).await {
                Ok(firma) => {
                    adi.set(String::new());
                    vkn.set(String::new());
                    busy.set(false);
                    on_created.run(firma);
                }
                Err(e) => {
                    busy.set(false);
                    error.set(Some(e.display_message(CREATE_FAILED)));
                    auth.handle_error(&e);
                }
            }
        });
    };

    view! {
        <form class="firma-form" on:submit=on_submit>
            <h4>"New firma"</h4>
            {move || error.get().map(|msg| view! { <p class="error-text">{msg}</p> })}
            <label for="firma-adi">"Name"</label>
            <input
                id="firma-adi"
                type="text"
                required
                prop:value=move || adi.get()
                on:input=move |ev| adi.set(event_target_value(&ev))
            />
            <label for="firma-vkn">"VKN"</label>
            <input
                id="firma-vkn"
                type="text"
                required
                prop:value=move || vkn.get()
                on:input=move |ev| vkn.set(event_target_value(&ev))
            />
            <div class="firma-form__actions">
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Saving..." } else { "Save" }}
                </button>
                <button class="btn" type="button" on:click=move |_| on_cancel.run(())>
                    "Cancel"
                </button>
            </div>
        </form>
    }
}
