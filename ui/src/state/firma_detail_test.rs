use super::*;

fn analysis(donem: &str) -> AnalysisResult {
    AnalysisResult { analiz_donemi: Some(donem.to_owned()), ..AnalysisResult::default() }
}

#[test]
fn default_state_is_loading_firma() {
    let state = FirmaDetailState::default();
    assert!(state.firma_loading);
    assert!(state.firma.is_none());
}

#[test]
fn begin_analysis_rejects_blank_period() {
    let mut state = FirmaDetailState::default();
    assert!(!state.begin_analysis("  "));
    assert!(state.selected_donem.is_none());
    assert!(!state.analysis_loading);
}

#[test]
fn blank_selection_during_request_stops_loading() {
    let mut state = FirmaDetailState::default();
    assert!(state.begin_analysis("2024"));
    assert!(state.analysis_loading);

    assert!(!state.begin_analysis(""));
    assert!(!state.analysis_loading);
    state.finish_analysis("2024", analysis("2024"));
    assert!(!state.analysis_loading);
    assert!(state.analysis.is_none());
}

#[test]
fn blank_selection_clears_previous_error() {
    let mut state = FirmaDetailState::default();
    state.begin_analysis("2023");
    state.fail_analysis("2023", "boom".to_owned());
    assert_eq!(state.analysis_error.as_deref(), Some("boom"));

    state.begin_analysis("");
    assert!(state.analysis_error.is_none());
}

#[test]
fn begin_analysis_clears_previous_result() {
    let mut state = FirmaDetailState::default();
    assert!(state.begin_analysis("2022"));
    state.finish_analysis("2022", analysis("2022"));
    assert!(state.analysis.is_some());

    assert!(state.begin_analysis("2023"));
    assert!(state.analysis.is_none());
    assert!(state.analysis_loading);
    assert_eq!(state.selected_donem.as_deref(), Some("2023"));
}

#[test]
fn stale_analysis_response_is_ignored() {
    let mut state = FirmaDetailState::default();
    state.begin_analysis("2022");
    state.begin_analysis("2023");
    state.finish_analysis("2022", analysis("2022"));
    assert!(state.analysis.is_none());
    assert!(state.analysis_loading);

    state.fail_analysis("2022", "late".to_owned());
    assert!(state.analysis_error.is_none());
}

#[test]
fn reset_after_upload_clears_selection() {
    let mut state = FirmaDetailState::default();
    state.begin_analysis("2023");
    state.finish_analysis("2023", analysis("2023"));
    state.reset_after_upload();
    assert!(state.selected_donem.is_none());
    assert!(state.analysis.is_none());
}

#[test]
fn has_no_periods_only_after_successful_empty_load() {
    let mut state = FirmaDetailState::default();
    state.begin_periods();
    assert!(!state.has_no_periods());
    state.finish_periods(Vec::new());
    assert!(state.has_no_periods());
    state.fail_periods("boom".to_owned());
    assert!(!state.has_no_periods());
}

#[test]
fn parse_firma_id_accepts_positive_integers() {
    assert_eq!(parse_firma_id("12"), Some(12));
    assert_eq!(parse_firma_id("0"), None);
    assert_eq!(parse_firma_id("abc"), None);
}

#[test]
fn analysis_error_fallback_names_period() {
    assert_eq!(analysis_error_fallback("2023"), "Failed to load the analysis for period '2023'.");
}
