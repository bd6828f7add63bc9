//! Wire DTOs for the authentication endpoints.
//!
//! Records keep unknown fields in a flattened `extra` map so a newer server
//! can add data without the client dropping it on the floor.

use serde::{Deserialize, Serialize};

pub type Extra = serde_json::Map<String, serde_json::Value>;

/// The authenticated user as returned by `GET /me`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserIdentity {
    /// Unique login name.
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(flatten)]
    pub extra: Extra,
}

impl UserIdentity {
    pub fn new(username: impl Into<String>) -> Self {
        Self { username: username.into(), id: None, extra: Extra::new() }
    }
}

/// Request body for `/login` and `/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Credentials<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

/// Body returned by `POST /login`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct TokenResponse {
    #[serde(default)]
    pub access_token: Option<String>,
}

/// `{msg}` acknowledgement returned by register, delete and upload endpoints.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub msg: Option<String>,
}
