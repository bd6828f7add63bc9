//! Firma detail page state: record, uploaded periods, and selected analysis.
//!
//! DESIGN
//! ======
//! The three sections load independently and keep their own loading/error
//! flags, so a failed analysis does not hide the firma record above it.

#[cfg(test)]
#[path = "firma_detail_test.rs"]
mod firma_detail_test;

use finansrisk::firma::{AnalysisResult, FinancialPeriod, Firma};

#[derive(Clone, Debug)]
pub struct FirmaDetailState {
    pub firma: Option<Firma>,
    pub firma_loading: bool,
    pub firma_error: Option<String>,

    pub periods: Vec<FinancialPeriod>,
    pub periods_loading: bool,
    pub periods_error: Option<String>,

    pub selected_donem: Option<String>,
    pub analysis: Option<AnalysisResult>,
    pub analysis_loading: bool,
    pub analysis_error: Option<String>,
}

impl Default for FirmaDetailState {
    fn default() -> Self {
        Self {
            firma: None,
            firma_loading: true,
            firma_error: None,
            periods: Vec::new(),
            periods_loading: false,
            periods_error: None,
            selected_donem: None,
            analysis: None,
            analysis_loading: false,
            analysis_error: None,
        }
    }
}

impl FirmaDetailState {
    pub fn begin_periods(&mut self) {
        self.periods_loading = true;
        self.periods_error = None;
    }

    pub fn finish_periods(&mut self, periods: Vec<FinancialPeriod>) {
        self.periods = periods;
        self.periods_loading = false;
    }

    pub fn fail_periods(&mut self, message: String) {
        self.periods_loading = false;
        self.periods_error = Some(message);
    }

    /// Select `donem` and clear the previous result. Returns `false` for a
    /// blank selection, which the caller should not request.
    pub fn begin_analysis(&mut self, donem: &str) -> bool {
        if donem.trim().is_empty() {
            self.selected_donem = None;
            self.analysis = None;
            self.analysis_error = None;
            self.analysis_loading = false;
            return false;
        }
        self.selected_donem = Some(donem.to_owned());
        self.analysis = None;
        self.analysis_error = None;
        self.analysis_loading = true;
        true
    }

    /// Store a result only if it is still for the selected period.
    pub fn finish_analysis(&mut self, donem: &str, analysis: AnalysisResult) {
        if self.selected_donem.as_deref() != Some(donem) {
            return;
        }
        self.analysis = Some(analysis);
        self.analysis_loading = false;
    }

    pub fn fail_analysis(&mut self, donem: &str, message: String) {
        if self.selected_donem.as_deref() != Some(donem) {
            return;
        }
        self.analysis_loading = false;
        self.analysis_error = Some(message);
    }

    /// New data invalidates the selected period and its analysis.
    pub fn reset_after_upload(&mut self) {
        self.selected_donem = None;
        self.analysis = None;
        self.analysis_error = None;
        self.analysis_loading = false;
    }

    pub fn has_no_periods(&self) -> bool {
        !self.periods_loading && self.periods_error.is_none() && self.periods.is_empty()
    }
}

/// Fallback text when the analysis request fails without a server message.
pub fn analysis_error_fallback(donem: &str) -> String {
    format!("Failed to load the analysis for period '{donem}'.")
}

/// Parse the `:firma_id` route segment.
pub fn parse_firma_id(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok().filter(|id| *id > 0)
}
