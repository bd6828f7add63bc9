//! Dashboard table of the user's firms.

use finansrisk::firma::Firma;
use finansrisk::guard::firma_detail_path;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::firmalar::FirmalarState;

#[component]
pub fn FirmaTable(firmalar: RwSignal<FirmalarState>, on_delete: Callback<Firma>) -> impl IntoView {
    view! {
        <table class="firma-table">
            <thead>
                <tr>
                    <th>"ID"</th>
                    <th>"Name"</th>
                    <th>"VKN"</th>
                    <th>"Actions"</th>
                </tr>
            </thead>
            <tbody>
                <For
                    each=move || firmalar.with(|s| s.items.clone())
                    key=|firma| firma.id
                    children=move |firma| view! { <FirmaRow firma on_delete/> }
                />
            </tbody>
        </table>
    }
}

#[component]
fn FirmaRow(firma: Firma, on_delete: Callback<Firma>) -> impl IntoView {
    let id = firma.id;
    let adi = firma.adi.clone();
    let vkn = firma.vkn.clone();

    view! {
        <tr>
            <td>{id}</td>
            <td>
                <A href=firma_detail_path(id)>{adi}</A>
            </td>
            <td>{vkn}</td>
            <td class="firma-table__actions">
                <A href=firma_detail_path(id)>"Details"</A>
                <button class="btn btn--danger" on:click=move |_| on_delete.run(firma.clone())>
                    "Delete"
                </button>
            </td>
        </tr>
    }
}
