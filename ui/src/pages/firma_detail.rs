//! Firma detail: record, imports, and per-period analysis.

use finansrisk::guard::DASHBOARD_PATH;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::components::analysis_panel::AnalysisPanel;
use crate::components::upload_panel::UploadPanel;
use crate::state::auth::AuthState;
use crate::state::firma_detail::{FirmaDetailState, analysis_error_fallback, parse_firma_id};
use crate::state::upload::UploadKind;

const FIRMA_FAILED: &str = "Failed to load the firma.";
const PERIODS_FAILED: &str = "Failed to load the financial periods.";

fn load_firma(auth: AuthState, detail: RwSignal<FirmaDetailState>, firma_id: i64) {
    detail.update(|s| {
        s.firma_loading = true;
        s.firma_error = None;
    });
    leptos::task::spawn_local(async move {
        let result = auth.api().get_firma(firma_id).await;
        match result {
            Ok(firma) => detail.update(|s| {
                s.firma = Some(firma);
                s.firma_loading = false;
            }),
            Err(e) => {
                detail.update(|s| {
                    s.firma_loading = false;
                    s.firma_error = Some(e.display_message(FIRMA_FAILED));
                });
                auth.handle_error(&e);
            }
        }
    });
}

fn load_periods(auth: AuthState, detail: RwSignal<FirmaDetailState>, firma_id: i64) {
    detail.update(FirmaDetailState::begin_periods);
    leptos::task::spawn_local(async move {
        match auth.api().list_financial_periods(firma_id).await {
            Ok(periods) => detail.update(|s| s.finish_periods(periods)),
            Err(e) => {
                detail.update(|s| s.fail_periods(e.display_message(PERIODS_FAILED)));
                auth.handle_error(&e);
            }
        }
    });
}

fn load_analysis(auth: AuthState, detail: RwSignal<FirmaDetailState>, firma_id: i64, donem: String) {
    let mut started = false;
    detail.update(|s| started = s.begin_analysis(&donem));
    if !started {
        return;
    }
    leptos::task::spawn_local(async move {
        match auth.api().get_financial_analysis(firma_id, &donem).await {
            Ok(analysis) => detail.update(|s| s.finish_analysis(&donem, analysis)),
            Err(e) => {
                let message = e.display_message(&analysis_error_fallback(&donem));
                detail.update(|s| s.fail_analysis(&donem, message));
                auth.handle_error(&e);
            }
        }
    });
}

#[component]
pub fn FirmaDetailPage() -> impl IntoView {
    let auth = expect_context::<AuthState>();
    let params = use_params_map();
    let firma_id = Memo::new(move |_| params.with(|p| p.get("firma_id").as_deref().and_then(parse_firma_id)));
    let detail = RwSignal::new(FirmaDetailState::default());

    Effect::new(move || match firma_id.get() {
        Some(id) => {
            detail.set(FirmaDetailState::default());
            load_firma(auth, detail, id);
            load_periods(auth, detail, id);
        }
        None => detail.update(|s| {
            s.firma_loading = false;
            s.firma_error = Some("Invalid firma id.".to_owned());
        }),
    });

    let header = Memo::new(move |_| detail.with(|s| (s.firma.clone(), s.firma_loading, s.firma_error.clone())));
    let loaded = Memo::new(move |_| detail.with(|s| s.firma.is_some()));

    let on_uploaded = Callback::new(move |()| {
        detail.update(FirmaDetailState::reset_after_upload);
        if let Some(id) = firma_id.get_untracked() {
            load_periods(auth, detail, id);
        }
    });
    let on_select = move |donem: String| {
        if let Some(id) = firma_id.get_untracked() {
            load_analysis(auth, detail, id, donem);
        }
    };

    view! {
        <div class="firma-detail-page">
            <A href=DASHBOARD_PATH>"Back to dashboard"</A>
            {move || {
                let (firma, loading, error) = header.get();
                if loading {
                    return view! { <p class="info-text">"Loading firma details..."</p> }.into_any();
                }
                if let Some(msg) = error {
                    return view! { <p class="error-text">{msg}</p> }.into_any();
                }
                match firma {
                    Some(firma) => {
                        let owner = firma.user_id.map_or_else(|| "N/A".to_owned(), |id| id.to_string());
                        view! {
                            <section class="panel firma-info">
                                <h2>{firma.adi}</h2>
                                <p><strong>"ID: "</strong>{firma.id}</p>
                                <p><strong>"VKN: "</strong>{firma.vkn}</p>
                                <p><strong>"Owner user ID: "</strong>{owner}</p>
                            </section>
                        }
                            .into_any()
                    }
                    None => view! { <p class="info-text">"Firma not found."</p> }.into_any(),
                }
            }}
            <Show when=move || loaded.get()>
                {move || {
                    firma_id
                        .get()
                        .map(|id| {
                            view! {
                                <UploadPanel firma_id=id kind=UploadKind::Csv on_uploaded/>
                                <UploadPanel firma_id=id kind=UploadKind::Edefter on_uploaded/>
                            }
                        })
                }}
                <section class="panel">
                    <h3>"Financial periods and analysis"</h3>
                    <Show when=move || detail.with(|s| s.periods_loading)>
                        <p class="info-text">"Loading periods..."</p>
                    </Show>
                    {move || detail.with(|s| s.periods_error.clone()).map(|msg| view! { <p class="error-text">{msg}</p> })}
                    <Show when=move || detail.with(|s| !s.periods_loading && !s.periods.is_empty())>
                        <label for="donem-select">"Select period: "</label>
                        <select
                            id="donem-select"
                            on:change=move |ev| on_select(event_target_value(&ev))
                            prop:value=move || detail.with(|s| s.selected_donem.clone().unwrap_or_default())
                        >
                            <option value="">"-- Select a period --"</option>
                            <For
                                each=move || detail.with(|s| s.periods.clone())
                                key=|period| period.donem.clone()
                                children=move |period| {
                                    let label = period.donem.clone();
                                    view! { <option value=period.donem>{label}</option> }
                                }
                            />
                        </select>
                    </Show>
                    <Show when=move || detail.with(FirmaDetailState::has_no_periods)>
                        <p class="info-text">"No financial data uploaded for this firma yet."</p>
                    </Show>
                    <Show when=move || detail.with(|s| s.analysis_loading)>
                        <p class="info-text">"Loading analysis..."</p>
                    </Show>
                    {move || detail.with(|s| s.analysis_error.clone()).map(|msg| view! { <p class="error-text">{msg}</p> })}
                    {move || {
                        detail
                            .with(|s| if s.analysis_loading { None } else { s.analysis.clone() })
                            .map(|analysis| view! { <AnalysisPanel analysis/> })
                    }}
                </section>
            </Show>
        </div>
    }
}
