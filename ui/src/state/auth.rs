//! Auth-session handle for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The `finansrisk` session manager owns the state machine. This module
//! mirrors its snapshots into a signal so route guards and user-aware
//! components re-render on every transition, and gives views one place to
//! report authorization failures.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::sync::Arc;

use finansrisk::{ApiClient, ApiError, AuthSession, Session};
use leptos::prelude::*;

/// Provided once through context by `App`. Cheap to copy into closures.
#[derive(Clone, Copy)]
pub struct AuthState {
    pub session: RwSignal<Session>,
    manager: StoredValue<Arc<AuthSession>>,
}

impl AuthState {
    /// Wrap `manager` and keep `session` in step with its transitions.
    pub fn new(manager: Arc<AuthSession>) -> Self {
        let session = RwSignal::new(manager.session());
        manager.subscribe(move |snapshot| session.set(snapshot.clone()));
        Self { session, manager: StoredValue::new(manager) }
    }

    pub fn manager(&self) -> Arc<AuthSession> {
        self.manager.get_value()
    }

    /// Gateway sharing the session's credential.
    pub fn api(&self) -> ApiClient {
        self.manager.with_value(|m| m.api().clone())
    }

    /// Re-derive the session from the stored credential in the background.
    pub fn validate(&self) {
        let manager = self.manager();
        leptos::task::spawn_local(async move {
            manager.validate().await;
        });
    }

    pub fn logout(&self) {
        self.manager.with_value(|m| {
            m.logout();
        });
    }

    /// Forward a failed call; returns `true` when it forced a logout.
    pub fn handle_error(&self, err: &ApiError) -> bool {
        let forced = self.manager.with_value(|m| m.handle_api_error(err));
        if forced {
            leptos::logging::warn!("session expired: {err}");
        }
        forced
    }
}
