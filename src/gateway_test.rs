use super::*;
use crate::test_support::{BASE_URL, MockTransport, client};
use crate::token_store::MemoryTokenStore;

// =============================================================
// URL building
// =============================================================

#[test]
fn url_appends_path_to_base() {
    let api = client(&MockTransport::new(), &Arc::new(MemoryTokenStore::new()));
    assert_eq!(api.url("/firmalar", &[]), format!("{BASE_URL}/firmalar"));
}

#[test]
fn url_percent_encodes_query_pairs() {
    let api = client(&MockTransport::new(), &Arc::new(MemoryTokenStore::new()));
    assert_eq!(
        api.url("/firmalar/3/finansal_analiz", &[("donem", "2023 Q4"), ("x", "a&b")]),
        format!("{BASE_URL}/firmalar/3/finansal_analiz?donem=2023%20Q4&x=a%26b")
    );
}

// =============================================================
// Bearer attachment
// =============================================================

#[tokio::test]
async fn send_attaches_stored_bearer() {
    let transport = MockTransport::new();
    transport.push_json(200, serde_json::json!([]));
    let api = client(&transport, &Arc::new(MemoryTokenStore::with_token("T")));

    let _: Vec<serde_json::Value> = api.get_json("/firmalar", &[]).await.unwrap();

    let requests = transport.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, Method::Get);
    assert_eq!(requests[0].bearer.as_deref(), Some("T"));
}

#[tokio::test]
async fn send_omits_bearer_when_store_empty_or_blank() {
    let transport = MockTransport::new();
    transport.push_json(200, serde_json::json!({ "msg": "ok" }));
    transport.push_json(200, serde_json::json!({ "msg": "ok" }));

    let api = client(&transport, &Arc::new(MemoryTokenStore::new()));
    api.register("bob", "secret1").await.unwrap();
    let api = client(&transport, &Arc::new(MemoryTokenStore::with_token("")));
    api.register("bob", "secret1").await.unwrap();

    assert!(transport.requests().iter().all(|r| r.bearer.is_none()));
}

// =============================================================
// Error classification and decoding
// =============================================================

#[tokio::test]
async fn non_success_status_becomes_classified_error() {
    let transport = MockTransport::new();
    transport.push_json(422, serde_json::json!({ "msg": "Signature verification failed" }));
    let api = client(&transport, &Arc::new(MemoryTokenStore::with_token("bad")));

    let err = api.me().await.unwrap_err();
    assert_eq!(
        err,
        ApiError::Unauthorized { status: 422, message: Some("Signature verification failed".to_owned()) }
    );
}

#[tokio::test]
async fn transport_error_passes_through_unchanged() {
    let transport = MockTransport::new();
    transport.push_error(ApiError::Transport("connection refused".to_owned()));
    let api = client(&transport, &Arc::new(MemoryTokenStore::new()));

    let err = api.login("alice", "secret").await.unwrap_err();
    assert_eq!(err, ApiError::Transport("connection refused".to_owned()));
}

#[tokio::test]
async fn me_empty_or_null_body_is_none() {
    let transport = MockTransport::new();
    transport.push_raw(200, "");
    transport.push_raw(200, "null");
    let api = client(&transport, &Arc::new(MemoryTokenStore::with_token("T")));

    assert_eq!(api.me().await.unwrap(), None);
    assert_eq!(api.me().await.unwrap(), None);
}

#[tokio::test]
async fn malformed_success_body_is_decode_error() {
    let transport = MockTransport::new();
    transport.push_raw(200, "{\"unexpected\": true}");
    let api = client(&transport, &Arc::new(MemoryTokenStore::with_token("T")));

    assert!(matches!(api.me().await, Err(ApiError::Decode(_))));
}

#[tokio::test]
async fn login_posts_credentials_as_json() {
    let transport = MockTransport::new();
    transport.push_json(200, serde_json::json!({ "access_token": "T" }));
    let api = client(&transport, &Arc::new(MemoryTokenStore::new()));

    let token = api.login("alice", "secret").await.unwrap();
    assert_eq!(token.access_token.as_deref(), Some("T"));

    let request = &transport.requests()[0];
    assert_eq!(request.method, Method::Post);
    assert_eq!(request.url, format!("{BASE_URL}/login"));
    assert_eq!(
        request.body,
        RequestBody::Json(serde_json::json!({ "username": "alice", "password": "secret" }))
    );
}
