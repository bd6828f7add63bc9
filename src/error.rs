//! Error taxonomy for calls made through the API gateway.
//!
//! DESIGN
//! ======
//! Every non-2xx response is classified once, here, so callers branch on the
//! variant instead of re-checking status codes. 401 and 422 are the pair the
//! remote API uses for a missing, invalid, or expired bearer token.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Errors produced by gateway and session operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("network request failed: {0}")]
    Transport(String),

    /// The credential was rejected (401 or 422).
    #[error("authorization failed: status {status}")]
    Unauthorized { status: u16, message: Option<String> },

    /// The server refused the request as invalid (other 4xx).
    #[error("request rejected: status {status}")]
    Rejected { status: u16, message: Option<String> },

    /// The server failed to handle the request (5xx or an unexpected status).
    #[error("server error: status {status}")]
    Server { status: u16, message: Option<String> },

    /// A 2xx body could not be decoded into the expected shape.
    #[error("malformed response: {0}")]
    Decode(String),

    /// Input rejected locally before any request was made.
    #[error("{0}")]
    InvalidInput(String),
}

impl ApiError {
    /// Classify a non-2xx response. `body` is the raw response text.
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = server_message_from_body(body);
        match status {
            401 | 422 => Self::Unauthorized { status, message },
            400..=499 => Self::Rejected { status, message },
            _ => Self::Server { status, message },
        }
    }

    /// HTTP status of the failed response, if there was one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized { status, .. } | Self::Rejected { status, .. } | Self::Server { status, .. } => {
                Some(*status)
            }
            Self::Transport(_) | Self::Decode(_) | Self::InvalidInput(_) => None,
        }
    }

    /// Message supplied by the server in the error body, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Unauthorized { message, .. } | Self::Rejected { message, .. } | Self::Server { message, .. } => {
                message.as_deref()
            }
            Self::Transport(_) | Self::Decode(_) | Self::InvalidInput(_) => None,
        }
    }

    /// True when the stored credential should be discarded.
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }

    /// Text to show a user: the server's message when it sent one, the
    /// local validation text for [`ApiError::InvalidInput`], else `fallback`.
    pub fn display_message(&self, fallback: &str) -> String {
        if let Self::InvalidInput(text) = self {
            return text.clone();
        }
        self.server_message().unwrap_or(fallback).to_owned()
    }
}

/// Pull a human-readable message out of a JSON error body.
///
/// The API answers with `{"msg": ...}`; `message` and `error` are accepted
/// for proxies and framework defaults that use those keys instead.
pub(crate) fn server_message_from_body(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    ["msg", "message", "error"]
        .iter()
        .find_map(|key| value.get(key).and_then(serde_json::Value::as_str))
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(str::to_owned)
}
