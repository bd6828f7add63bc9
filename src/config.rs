//! Client configuration shared by the browser and CLI front ends.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Base address used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

/// Environment variable naming the API base address.
pub const BASE_URL_ENV: &str = "FINANSRISK_API_URL";

/// Fixed key the browser credential lives under in `localStorage`.
pub const TOKEN_STORAGE_KEY: &str = "accessToken";

/// Shortest password the client will submit to `/register`.
pub const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    /// Build a config for `base_url`, dropping any trailing slashes so paths
    /// can be appended verbatim.
    pub fn new(base_url: impl Into<String>) -> Self {
        let raw = base_url.into();
        let trimmed = raw.trim();
        let base_url = if trimmed.is_empty() {
            DEFAULT_BASE_URL.to_owned()
        } else {
            trimmed.trim_end_matches('/').to_owned()
        };
        Self { base_url }
    }

    /// Read `FINANSRISK_API_URL`, falling back to [`DEFAULT_BASE_URL`] when it
    /// is unset or blank.
    pub fn from_env() -> Self {
        Self::new(std::env::var(BASE_URL_ENV).unwrap_or_default())
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
