//! HTTP transport seam.
//!
//! DESIGN
//! ======
//! The gateway builds fully-resolved requests and hands them to a
//! [`Transport`]. Browser builds plug in `gloo-net`, the CLI plugs in
//! `reqwest`, and tests plug in a scripted mock. Futures are `?Send` because
//! browser fetch futures hold JS values.

use crate::error::ApiError;

pub const CSV_CONTENT_TYPE: &str = "text/csv";
pub const XML_CONTENT_TYPE: &str = "application/xml";

/// Multipart field name the upload endpoints read the file from.
pub const UPLOAD_FIELD: &str = "file";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Delete => "DELETE",
        }
    }
}

/// A file attached to a multipart upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Upload {
    pub field: String,
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl Upload {
    pub fn csv(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self::new(file_name, CSV_CONTENT_TYPE, bytes)
    }

    pub fn edefter_xml(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self::new(file_name, XML_CONTENT_TYPE, bytes)
    }

    fn new(file_name: impl Into<String>, content_type: &str, bytes: Vec<u8>) -> Self {
        Self {
            field: UPLOAD_FIELD.to_owned(),
            file_name: file_name.into(),
            content_type: content_type.to_owned(),
            bytes,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    Empty,
    Json(serde_json::Value),
    Multipart(Upload),
}

/// A request ready to go on the wire.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    /// Absolute URL including any query string.
    pub url: String,
    /// Bearer credential for the `Authorization` header.
    pub bearer: Option<String>,
    pub body: RequestBody,
}

/// Status and raw text of a completed response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends one request and returns whatever the server answered.
///
/// Implementations return `Ok` for every response that arrived, whatever its
/// status; only failures to get a response at all become
/// [`ApiError::Transport`].
#[async_trait::async_trait(?Send)]
pub trait Transport: Send + Sync {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}
