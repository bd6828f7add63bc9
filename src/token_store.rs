//! Bearer credential persistence.
//!
//! SYSTEM CONTEXT
//! ==============
//! One store instance is shared by the gateway, which reads it to attach the
//! `Authorization` header, and the session manager, which is its only writer.
//! The contract has no error conditions; backends that can fail swallow and
//! log their failures.

#[cfg(test)]
#[path = "token_store_test.rs"]
mod token_store_test;

use std::sync::{Mutex, PoisonError};

/// Mechanical key-value persistence for a single opaque credential.
pub trait TokenStore: Send + Sync {
    /// Replace any stored credential with `token`.
    fn save(&self, token: &str);

    /// Currently stored credential, if any.
    fn read(&self) -> Option<String>;

    /// Forget the stored credential. Clearing an empty store is a no-op.
    fn clear(&self);
}

/// Process-lifetime store used by tests and embedders without persistence.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self { token: Mutex::new(Some(token.into())) }
    }
}

impl TokenStore for MemoryTokenStore {
    fn save(&self, token: &str) {
        *self.token.lock().unwrap_or_else(PoisonError::into_inner) = Some(token.to_owned());
    }

    fn read(&self) -> Option<String> {
        self.token.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    fn clear(&self) {
        self.token.lock().unwrap_or_else(PoisonError::into_inner).take();
    }
}
