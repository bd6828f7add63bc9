//! Browser networking and persistence.
//!
//! SYSTEM CONTEXT
//! ==============
//! `transport` sends the core's requests with `gloo-net`, `storage` keeps the
//! bearer credential in `localStorage`. Both compile natively as inert stubs
//! so pure UI helpers stay testable without a browser.

pub mod storage;
pub mod transport;

use std::sync::Arc;

use finansrisk::config::{ApiConfig, DEFAULT_BASE_URL};
use finansrisk::{ApiClient, TokenStore, Transport};

use self::storage::LocalStorageTokenStore;
use self::transport::GlooTransport;

/// API base address baked in at build time.
pub fn api_config() -> ApiConfig {
    ApiConfig::new(option_env!("FINANSRISK_API_URL").unwrap_or(DEFAULT_BASE_URL))
}

/// Gateway wired to the browser transport and `localStorage` credential.
pub fn browser_client() -> ApiClient {
    let transport: Arc<dyn Transport> = Arc::new(GlooTransport);
    let tokens: Arc<dyn TokenStore> = Arc::new(LocalStorageTokenStore::default());
    ApiClient::new(api_config(), transport, tokens)
}
