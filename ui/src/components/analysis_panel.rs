//! Read-only rendering of one period's analysis result.

#[cfg(test)]
#[path = "analysis_panel_test.rs"]
mod analysis_panel_test;

use finansrisk::firma::AnalysisResult;
use leptos::prelude::*;

const NOT_AVAILABLE: &str = "N/A";

/// Numeric metric, or `N/A` when the server omitted it.
pub fn format_metric(value: Option<f64>) -> String {
    value.map_or_else(|| NOT_AVAILABLE.to_owned(), |v| v.to_string())
}

/// Text field, or `N/A` when missing or blank.
pub fn format_text(value: Option<&str>) -> String {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or(NOT_AVAILABLE)
        .to_owned()
}

#[component]
pub fn AnalysisPanel(analysis: AnalysisResult) -> impl IntoView {
    let ratios = analysis.hesaplanan_oranlar.unwrap_or_default();
    let scores = analysis.risk_skorlari.unwrap_or_default();
    let heading = format!("{} analysis results", format_text(analysis.analiz_donemi.as_deref()));

    view! {
        <div class="analysis">
            <h4>{heading}</h4>
            <p>
                <strong>"Firma: "</strong>
                {format_text(analysis.firma_adi.as_deref())}
            </p>
            <h5>"Financial ratios"</h5>
            <ul class="analysis__list">
                <li>"Current ratio: " {format_metric(ratios.cari_oran)}</li>
                <li>"Debt to equity: " {format_metric(ratios.borc_bolu_ozkaynak_orani)}</li>
            </ul>
            <h5>"Risk scores"</h5>
            <ul class="analysis__list">
                <li>"Altman Z-score: " {format_metric(scores.altman_z_skoru)}</li>
                <li>"Interpretation: " {format_text(scores.altman_z_skoru_yorum.as_deref())}</li>
            </ul>
        </div>
    }
}
