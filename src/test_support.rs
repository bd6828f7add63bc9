//! Scripted transport shared by the crate's unit tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::gateway::ApiClient;
use crate::token_store::{MemoryTokenStore, TokenStore};
use crate::transport::{HttpRequest, HttpResponse, Transport};

pub(crate) const BASE_URL: &str = "http://api.test";

/// Replays queued responses in order and records every request it sees.
#[derive(Default)]
pub(crate) struct MockTransport {
    responses: Mutex<VecDeque<Result<HttpResponse, ApiError>>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl MockTransport {
    pub(crate) fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub(crate) fn push_json(&self, status: u16, body: serde_json::Value) {
        self.push_raw(status, &body.to_string());
    }

    pub(crate) fn push_raw(&self, status: u16, body: &str) {
        self.responses
            .lock()
            .unwrap()
            .push_back(Ok(HttpResponse { status, body: body.to_owned() }));
    }

    pub(crate) fn push_error(&self, err: ApiError) {
        self.responses.lock().unwrap().push_back(Err(err));
    }

    pub(crate) fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub(crate) fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait::async_trait(?Send)]
impl Transport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Transport("no scripted response".to_owned())))
    }
}

pub(crate) fn client(transport: &Arc<MockTransport>, tokens: &Arc<MemoryTokenStore>) -> ApiClient {
    let transport: Arc<dyn Transport> = transport.clone();
    let tokens: Arc<dyn TokenStore> = tokens.clone();
    ApiClient::new(ApiConfig::new(BASE_URL), transport, tokens)
}
