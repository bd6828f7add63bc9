//! API gateway client.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every call to the remote API goes through [`ApiClient`]: it resolves the
//! path against the configured base address, attaches the stored bearer
//! credential, and classifies failures into [`ApiError`]. It never retries,
//! caches, or swallows an error.
//!
//! The firma endpoints live in `crate::firma` as a second `impl` block so
//! this module stays about transport mechanics and authentication.

#[cfg(test)]
#[path = "gateway_test.rs"]
mod gateway_test;

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::token_store::TokenStore;
use crate::transport::{HttpRequest, HttpResponse, Method, RequestBody, Transport, Upload};
use crate::types::{Credentials, MessageResponse, TokenResponse, UserIdentity};

/// Shared HTTP client for the FinansRisk API. Cheap to clone.
#[derive(Clone)]
pub struct ApiClient {
    config: ApiConfig,
    transport: Arc<dyn Transport>,
    tokens: Arc<dyn TokenStore>,
}

impl ApiClient {
    pub fn new(config: ApiConfig, transport: Arc<dyn Transport>, tokens: Arc<dyn TokenStore>) -> Self {
        Self { config, transport, tokens }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// The credential store this client reads bearer tokens from.
    pub fn tokens(&self) -> &Arc<dyn TokenStore> {
        &self.tokens
    }

    /// Stored credential, treating an empty string as no credential.
    pub fn current_token(&self) -> Option<String> {
        self.tokens.read().filter(|token| !token.is_empty())
    }

    /// Absolute URL for `path` with percent-encoded `query` pairs appended.
    pub fn url(&self, path: &str, query: &[(&str, &str)]) -> String {
        let mut url = format!("{}{path}", self.config.base_url);
        for (i, (key, value)) in query.iter().enumerate() {
            url.push(if i == 0 { '?' } else { '&' });
            url.push_str(&urlencoding::encode(key));
            url.push('=');
            url.push_str(&urlencoding::encode(value));
        }
        url
    }

    /// Send one request and return the raw response when it is a 2xx.
    ///
    /// # Errors
    ///
    /// [`ApiError::Transport`] when no response arrived, otherwise the
    /// status-classified error for any non-2xx response.
    pub async fn send(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, &str)],
        body: RequestBody,
    ) -> Result<HttpResponse, ApiError> {
        let request = HttpRequest {
            method,
            url: self.url(path, query),
            bearer: self.current_token(),
            body,
        };
        log::debug!("api request: {} {path}", method.as_str());

        let response = match self.transport.send(request).await {
            Ok(response) => response,
            Err(e) => {
                log::warn!("api request failed: {} {path}: {e}", method.as_str());
                return Err(e);
            }
        };
        if response.is_success() {
            return Ok(response);
        }

        let err = ApiError::from_status(response.status, &response.body);
        log::warn!(
            "api error: {} {path} status={} msg={}",
            method.as_str(),
            response.status,
            err.server_message().unwrap_or("-")
        );
        Err(err)
    }

    /// # Errors
    ///
    /// See [`ApiClient::send`]; also [`ApiError::Decode`] for an unexpected body.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str, query: &[(&str, &str)]) -> Result<T, ApiError> {
        let response = self.send(Method::Get, path, query, RequestBody::Empty).await?;
        decode_body(&response.body)
    }

    /// # Errors
    ///
    /// See [`ApiClient::get_json`]. A body that cannot be serialized is an
    /// [`ApiError::InvalidInput`].
    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let json = serde_json::to_value(body).map_err(|e| ApiError::InvalidInput(e.to_string()))?;
        let response = self.send(Method::Post, path, &[], RequestBody::Json(json)).await?;
        decode_body(&response.body)
    }

    /// # Errors
    ///
    /// See [`ApiClient::get_json`].
    pub async fn delete_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.send(Method::Delete, path, &[], RequestBody::Empty).await?;
        decode_body(&response.body)
    }

    /// # Errors
    ///
    /// See [`ApiClient::get_json`].
    pub async fn post_multipart<T: DeserializeOwned>(&self, path: &str, upload: Upload) -> Result<T, ApiError> {
        let response = self.send(Method::Post, path, &[], RequestBody::Multipart(upload)).await?;
        decode_body(&response.body)
    }

    // =========================================================================
    // AUTH ENDPOINTS
    // =========================================================================

    /// `POST /register`.
    ///
    /// # Errors
    ///
    /// Any gateway error; a duplicate username comes back as [`ApiError::Rejected`].
    pub async fn register(&self, username: &str, password: &str) -> Result<MessageResponse, ApiError> {
        self.post_json("/register", &Credentials { username, password }).await
    }

    /// `POST /login`. Does not touch the token store.
    ///
    /// # Errors
    ///
    /// Any gateway error; bad credentials come back as [`ApiError::Unauthorized`].
    pub async fn login(&self, username: &str, password: &str) -> Result<TokenResponse, ApiError> {
        self.post_json("/login", &Credentials { username, password }).await
    }

    /// `GET /me`. `Ok(None)` when the server answered 2xx with an empty or
    /// `null` body.
    ///
    /// # Errors
    ///
    /// Any gateway error.
    pub async fn me(&self) -> Result<Option<UserIdentity>, ApiError> {
        self.get_json("/me", &[]).await
    }
}

/// Decode a 2xx body; an empty body decodes as JSON `null`.
pub(crate) fn decode_body<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    let text = body.trim();
    let text = if text.is_empty() { "null" } else { text };
    serde_json::from_str(text).map_err(|e| ApiError::Decode(e.to_string()))
}
