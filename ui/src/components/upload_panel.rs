//! File upload panel for one import kind on the firma detail page.
//!
//! The chosen `File` stays in the DOM input and is read only when the user
//! submits; the reactive state tracks just its name and the request status.

use leptos::ev::{Event, MouseEvent};
use leptos::html::Input;
use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::state::upload::{UploadKind, UploadState, file_name_from_input};

#[component]
pub fn UploadPanel(firma_id: i64, kind: UploadKind, on_uploaded: Callback<()>) -> impl IntoView {
    let auth = expect_context::<AuthState>();
    let state = RwSignal::new(UploadState::default());
    let input_ref = NodeRef::<Input>::new();

    let on_change = move |ev: Event| {
        let name = file_name_from_input(&event_target_value(&ev));
        state.update(|s| s.select(name));
    };

    let on_upload = move |_: MouseEvent| {
        let mut started = false;
        state.update(|s| started = s.begin(kind).is_ok());
        if !started {
            return;
        }
        submit(auth, state, input_ref, firma_id, kind, on_uploaded);
    };

    view! {
        <section class="panel upload-panel">
            <h3>{kind.title()}</h3>
            <label for=kind.input_id()>"Choose file: "</label>
            <input
                id=kind.input_id()
                type="file"
                accept=kind.accept()
                node_ref=input_ref
                on:change=on_change
            />
            <button
                class="btn btn--primary"
                on:click=on_upload
                disabled=move || state.with(|s| s.busy || s.selected_file.is_none())
            >
                {move || if state.with(|s| s.busy) { "Uploading..." } else { "Upload" }}
            </button>
            {move || state.with(|s| s.error.clone()).map(|msg| view! { <p class="error-text">{msg}</p> })}
            {move || state.with(|s| s.success.clone()).map(|msg| view! { <p class="success-text">{msg}</p> })}
        </section>
    }
}

#[cfg(feature = "csr")]
fn submit(
    auth: AuthState,
    state: RwSignal<UploadState>,
    input_ref: NodeRef<Input>,
    firma_id: i64,
    kind: UploadKind,
    on_uploaded: Callback<()>,
) {
    leptos::task::spawn_local(async move {
        let Some(input) = input_ref.get_untracked() else {
            state.update(|s| s.fail("File input is not available.".to_owned()));
            return;
        };
        let upload = match crate::util::file::read_selected(&input, kind).await {
            Ok(upload) => upload,
            Err(msg) => {
                state.update(|s| s.fail(msg));
                return;
            }
        };

        match kind.send(&auth.api(), firma_id, upload).await {
            Ok(reply) => {
                crate::util::file::reset(&input);
                let message = reply.msg.unwrap_or_else(|| kind.success_fallback().to_owned());
                state.update(|s| s.succeed(message));
                on_uploaded.run(());
            }
            Err(e) => {
                state.update(|s| s.fail(e.display_message(kind.error_fallback())));
                auth.handle_error(&e);
            }
        }
    });
}

#[cfg(not(feature = "csr"))]
fn submit(
    _auth: AuthState,
    state: RwSignal<UploadState>,
    _input_ref: NodeRef<Input>,
    _firma_id: i64,
    _kind: UploadKind,
    _on_uploaded: Callback<()>,
) {
    state.update(|s| s.fail("File uploads need the browser build.".to_owned()));
}
