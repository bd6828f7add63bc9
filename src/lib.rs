//! # finansrisk
//!
//! Client core for the FinansRisk financial-risk service.
//!
//! The remote API owns every record and every calculation. This crate owns the
//! one piece of client state with real transitions: the authenticated session.
//! It is shared by the Leptos browser client (`ui/`) and the native CLI
//! (`cli/`), each of which supplies its own `Transport` and `TokenStore`.
//!
//! ARCHITECTURE
//! ============
//! `token_store` -> `gateway` -> `session` -> `guard`, leaves first. `firma`
//! adds the company endpoints on top of the same gateway so that every
//! authenticated call reads the credential from one place.

pub mod config;
pub mod error;
pub mod firma;
pub mod gateway;
pub mod guard;
pub mod session;
pub mod token_store;
pub mod transport;
pub mod types;

#[cfg(test)]
pub(crate) mod test_support;

pub use config::ApiConfig;
pub use error::ApiError;
pub use gateway::ApiClient;
pub use guard::GuardOutcome;
pub use session::{AuthSession, Phase, Session};
pub use token_store::{MemoryTokenStore, TokenStore};
pub use transport::{HttpRequest, HttpResponse, Method, RequestBody, Transport, Upload};
pub use types::UserIdentity;
