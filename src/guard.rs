//! Route gating derived from session state.
//!
//! Pure functions only: the UI recomputes them on every session change, so
//! there is nothing here to keep in sync.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::session::{Phase, Session};

pub const LOGIN_PATH: &str = "/login";
pub const REGISTER_PATH: &str = "/register";
pub const DASHBOARD_PATH: &str = "/dashboard";

pub fn firma_detail_path(firma_id: i64) -> String {
    format!("/firmalar/{firma_id}/detay")
}

/// What a gated route should render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Validation still running; show a placeholder.
    Checking,
    /// Render the route's own content.
    Allow,
    RedirectToLogin,
    RedirectToDashboard,
}

impl GuardOutcome {
    /// Target path for the redirect outcomes.
    pub fn redirect_path(self) -> Option<&'static str> {
        match self {
            Self::RedirectToLogin => Some(LOGIN_PATH),
            Self::RedirectToDashboard => Some(DASHBOARD_PATH),
            Self::Checking | Self::Allow => None,
        }
    }
}

/// Gate for protected views.
pub fn guard(session: &Session) -> GuardOutcome {
    match (session.phase, &session.user) {
        (Phase::Initializing, _) => GuardOutcome::Checking,
        (Phase::Ready, Some(_)) => GuardOutcome::Allow,
        (Phase::Ready, None) => GuardOutcome::RedirectToLogin,
    }
}

/// Gate for views only meaningful to anonymous users, such as the login form.
pub fn guest_only(session: &Session) -> GuardOutcome {
    match (session.phase, &session.user) {
        (Phase::Initializing, _) => GuardOutcome::Checking,
        (Phase::Ready, Some(_)) => GuardOutcome::RedirectToDashboard,
        (Phase::Ready, None) => GuardOutcome::Allow,
    }
}

/// Where the root path sends a visitor.
pub fn landing(session: &Session) -> GuardOutcome {
    match (session.phase, &session.user) {
        (Phase::Initializing, _) => GuardOutcome::Checking,
        (Phase::Ready, Some(_)) => GuardOutcome::RedirectToDashboard,
        (Phase::Ready, None) => GuardOutcome::RedirectToLogin,
    }
}
