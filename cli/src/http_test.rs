use super::*;

use finansrisk::transport::{CSV_CONTENT_TYPE, UPLOAD_FIELD};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

/// Accept one connection, capture the raw request bytes, and answer with
/// `status` and `body`.
async fn serve_once(status: u16, body: &'static str) -> (String, JoinHandle<Vec<u8>>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());
    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let raw = read_request(&mut socket).await;
        let reply = format!(
            "HTTP/1.1 {status} Test\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(reply.as_bytes()).await.unwrap();
        let _ = socket.shutdown().await;
        raw
    });
    (base, handle)
}

async fn read_request(socket: &mut TcpStream) -> Vec<u8> {
    let mut raw = Vec::new();
    let mut buf = [0_u8; 4096];
    loop {
        let n = socket.read(&mut buf).await.unwrap();
        if n == 0 {
            break;
        }
        raw.extend_from_slice(&buf[..n]);
        if request_complete(&raw) {
            break;
        }
    }
    raw
}

fn request_complete(raw: &[u8]) -> bool {
    let Some(end) = raw.windows(4).position(|w| w == b"\r\n\r\n") else {
        return false;
    };
    let head = String::from_utf8_lossy(&raw[..end]).to_ascii_lowercase();
    let body = &raw[end + 4..];
    let content_length = head
        .lines()
        .find_map(|line| line.strip_prefix("content-length:"))
        .and_then(|value| value.trim().parse::<usize>().ok());
    match content_length {
        Some(len) => body.len() >= len,
        None if head.contains("transfer-encoding: chunked") => body.ends_with(b"0\r\n\r\n"),
        None => true,
    }
}

fn request(method: Method, url: String, bearer: Option<&str>, body: RequestBody) -> HttpRequest {
    HttpRequest { method, url, bearer: bearer.map(str::to_owned), body }
}

#[tokio::test]
async fn bearer_becomes_authorization_header() {
    let (base, server) = serve_once(200, r#"{"username":"ayse"}"#).await;
    let response = ReqwestTransport::new()
        .send(request(Method::Get, format!("{base}/me"), Some("tok-123"), RequestBody::Empty))
        .await
        .unwrap();

    assert_eq!(response.status, 200);
    assert_eq!(response.body, r#"{"username":"ayse"}"#);
    let raw = String::from_utf8_lossy(&server.await.unwrap()).to_ascii_lowercase();
    assert!(raw.starts_with("get /me http/1.1\r\n"));
    assert!(raw.contains("\r\nauthorization: bearer tok-123\r\n"));
}

#[tokio::test]
async fn missing_bearer_sends_no_authorization_header() {
    let (base, server) = serve_once(200, "{}").await;
    ReqwestTransport::new()
        .send(request(Method::Delete, format!("{base}/firmalar/3"), None, RequestBody::Empty))
        .await
        .unwrap();

    let raw = String::from_utf8_lossy(&server.await.unwrap()).to_ascii_lowercase();
    assert!(raw.starts_with("delete /firmalar/3 http/1.1\r\n"));
    assert!(!raw.contains("authorization:"));
}

#[tokio::test]
async fn json_body_is_sent_with_json_content_type() {
    let (base, server) = serve_once(200, r#"{"msg":"ok"}"#).await;
    let body = RequestBody::Json(serde_json::json!({ "username": "bob", "password": "secret1" }));
    ReqwestTransport::new()
        .send(request(Method::Post, format!("{base}/register"), None, body))
        .await
        .unwrap();

    let raw = String::from_utf8_lossy(&server.await.unwrap()).into_owned();
    assert!(raw.to_ascii_lowercase().contains("\r\ncontent-type: application/json\r\n"));
    assert!(raw.contains(r#""username":"bob""#));
}

#[tokio::test]
async fn upload_is_sent_as_multipart_file_part() {
    let (base, server) = serve_once(200, r#"{"msg":"ok"}"#).await;
    let upload = Upload::csv("bilanco.csv", b"kalem,tutar\nkasa,100\n".to_vec());
    ReqwestTransport::new()
        .send(request(
            Method::Post,
            format!("{base}/firmalar/7/financials/upload"),
            Some("tok"),
            RequestBody::Multipart(upload),
        ))
        .await
        .unwrap();

    let raw = String::from_utf8_lossy(&server.await.unwrap()).into_owned();
    let lower = raw.to_ascii_lowercase();
    assert!(lower.contains("\r\ncontent-type: multipart/form-data; boundary="));
    assert!(lower.contains("\r\nauthorization: bearer tok\r\n"));
    assert!(raw.contains(&format!(r#"name="{UPLOAD_FIELD}"; filename="bilanco.csv""#)));
    assert!(lower.contains(&format!("content-type: {CSV_CONTENT_TYPE}")));
    assert!(raw.contains("kalem,tutar\nkasa,100\n"));
}

#[tokio::test]
async fn error_status_is_returned_not_raised() {
    let (base, server) = serve_once(422, r#"{"msg":"Signature verification failed"}"#).await;
    let response = ReqwestTransport::new()
        .send(request(Method::Get, format!("{base}/firmalar"), Some("bad"), RequestBody::Empty))
        .await
        .unwrap();

    assert_eq!(response.status, 422);
    assert!(response.body.contains("Signature verification failed"));
    server.await.unwrap();
}

#[tokio::test]
async fn unreachable_host_is_a_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = ReqwestTransport::new()
        .send(request(Method::Get, format!("http://{addr}/me"), None, RequestBody::Empty))
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)));
}
