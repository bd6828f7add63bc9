//! Authenticated-session state machine.
//!
//! SYSTEM CONTEXT
//! ==============
//! [`AuthSession`] is the single owner of "who is logged in". Views never
//! hold their own copy of that answer: they read [`AuthSession::session`] or
//! subscribe to transitions, and report authorization failures back through
//! [`AuthSession::handle_api_error`] so every view converges on one state.
//!
//! STATE
//! =====
//! Two independent dimensions: `phase` (`Initializing` until a validation
//! cycle finishes) and `user` (present only while the stored credential was
//! last accepted by `GET /me`).
//!
//! CONCURRENCY
//! ===========
//! Operations are not mutually exclusive. Overlapping `login`/`validate`
//! calls resolve last-write-wins; callers are expected to serialize them.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::{Arc, Mutex, PoisonError};

use crate::config::MIN_PASSWORD_LEN;
use crate::error::ApiError;
use crate::gateway::ApiClient;
use crate::types::{MessageResponse, UserIdentity};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Initializing,
    Ready,
}

/// Snapshot of the current authentication state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    pub user: Option<UserIdentity>,
    pub phase: Phase,
}

impl Session {
    pub fn is_ready(&self) -> bool {
        self.phase == Phase::Ready
    }

    pub fn is_authenticated(&self) -> bool {
        self.is_ready() && self.user.is_some()
    }

    pub fn username(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.username.as_str())
    }
}

type Listener = Arc<dyn Fn(&Session) + Send + Sync>;

/// Session manager shared by every view. Construct once per application.
pub struct AuthSession {
    api: ApiClient,
    state: Mutex<Session>,
    listeners: Mutex<Vec<Listener>>,
}

impl AuthSession {
    pub fn new(api: ApiClient) -> Self {
        Self { api, state: Mutex::new(Session::default()), listeners: Mutex::new(Vec::new()) }
    }

    /// Gateway sharing this session's token store.
    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    pub fn session(&self) -> Session {
        self.state.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    pub fn current_user(&self) -> Option<UserIdentity> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner).user.clone()
    }

    /// Call `listener` with the new snapshot after every transition.
    pub fn subscribe<F>(&self, listener: F)
    where
        F: Fn(&Session) + Send + Sync + 'static,
    {
        self.listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Arc::new(listener));
    }

    fn update(&self, apply: impl FnOnce(&mut Session)) -> Session {
        let snapshot = {
            let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
            apply(&mut state);
            state.clone()
        };
        log::debug!(
            "session transition: phase={:?} user={}",
            snapshot.phase,
            snapshot.username().unwrap_or("-")
        );
        // Listeners run outside both locks so they may read the session.
        let listeners = self.listeners.lock().unwrap_or_else(PoisonError::into_inner).clone();
        for listener in &listeners {
            listener(&snapshot);
        }
        snapshot
    }

    /// Re-derive the session from the stored credential.
    ///
    /// Without a credential this resolves to an anonymous session with no
    /// network call. With one, `GET /me` decides: any failure, or a success
    /// without an identity, clears the credential. Always ends `Ready`.
    pub async fn validate(&self) -> Session {
        self.update(|s| s.phase = Phase::Initializing);

        let user = if self.api.current_token().is_none() {
            None
        } else {
            match self.api.me().await {
                Ok(Some(user)) if !user.username.is_empty() => Some(user),
                Ok(_) => {
                    log::info!("credential rejected: /me returned no identity");
                    self.api.tokens().clear();
                    None
                }
                Err(e) => {
                    log::info!("credential rejected: {e}");
                    self.api.tokens().clear();
                    None
                }
            }
        };

        self.update(|s| {
            s.user = user;
            s.phase = Phase::Ready;
        })
    }

    /// Exchange credentials for a token, persist it, then converge through
    /// [`AuthSession::validate`].
    ///
    /// # Errors
    ///
    /// The gateway error from `/login`, unchanged, or [`ApiError::Decode`]
    /// when the reply carries no token. The stored credential and session
    /// are untouched on error.
    pub async fn login(&self, username: &str, password: &str) -> Result<Session, ApiError> {
        let reply = self.api.login(username, password).await?;
        let token = reply
            .access_token
            .filter(|token| !token.is_empty())
            .ok_or_else(|| ApiError::Decode("login response has no access_token".to_owned()))?;
        self.api.tokens().save(&token);
        Ok(self.validate().await)
    }

    /// Drop the credential and the user. Local only; always succeeds.
    pub fn logout(&self) -> Session {
        self.api.tokens().clear();
        self.update(|s| s.user = None)
    }

    /// Create an account. Does not log in.
    ///
    /// # Errors
    ///
    /// [`ApiError::InvalidInput`] for a policy violation (no request is
    /// made), otherwise the gateway error from `/register`.
    pub async fn register(&self, username: &str, password: &str) -> Result<MessageResponse, ApiError> {
        check_registration(username, password)?;
        self.api.register(username, password).await
    }

    /// Report a failed authenticated call. Authorization failures force a
    /// logout and return `true`; anything else leaves the session alone.
    pub fn handle_api_error(&self, err: &ApiError) -> bool {
        if !err.is_auth_failure() {
            return false;
        }
        log::info!("forcing logout after {err}");
        self.logout();
        true
    }
}

/// Local registration policy applied before `/register` is called.
///
/// # Errors
///
/// [`ApiError::InvalidInput`] describing the first violated rule.
pub fn check_registration(username: &str, password: &str) -> Result<(), ApiError> {
    if username.trim().is_empty() {
        return Err(ApiError::InvalidInput("Username is required.".to_owned()));
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ApiError::InvalidInput(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters."
        )));
    }
    Ok(())
}
