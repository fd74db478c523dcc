//! Tests for the single-exchange connection session

mod common;

use common::{INDEX_HTML, TempRoot};
use docserve::http::connection::{Session, SessionState};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt, DuplexStream, duplex};

fn peer() -> SocketAddr {
    "127.0.0.1:40000".parse().unwrap()
}

fn session(root: &TempRoot, stream: DuplexStream, read_timeout: Duration) -> Session<DuplexStream> {
    Session::new(stream, peer(), Arc::new(root.store()), read_timeout)
}

/// Send `input`, half-close, and collect everything the session writes back
async fn exchange(root: &TempRoot, input: &[u8]) -> (anyhow::Result<()>, Vec<u8>) {
    let (mut client, server) = duplex(64 * 1024);
    let task = tokio::spawn(session(root, server, Duration::from_secs(5)).run());

    client.write_all(input).await.unwrap();
    client.shutdown().await.unwrap();

    let mut out = Vec::new();
    client.read_to_end(&mut out).await.unwrap();
    (task.await.unwrap(), out)
}

#[tokio::test]
async fn test_get_existing_resource() {
    let root = TempRoot::new();
    root.write("/index.html", INDEX_HTML);

    let (result, out) = exchange(&root, b"GET /index.html\r\n").await;
    let text = String::from_utf8(out).unwrap();

    assert!(result.is_ok());
    assert!(text.starts_with("HTTP/1.1 200 OK\r\n"));
    assert!(text.contains("Content-Type: text/html\r\n"));
    assert!(text.contains("Content-Length: 12\r\n"));
    assert!(text.ends_with("\r\n\r\n<p>hello</p>"));
}

#[tokio::test]
async fn test_missing_resource() {
    let root = TempRoot::new();

    let (result, out) = exchange(&root, b"GET /missing.html\n").await;
    let text = String::from_utf8(out).unwrap();

    assert!(result.is_ok());
    assert!(text.starts_with("HTTP/1.1 404 Not Found\r\n"));
    assert!(text.contains("/missing.html"));
}

#[tokio::test]
async fn test_unknown_method() {
    let root = TempRoot::new();
    root.write("/index.html", INDEX_HTML);

    let (_, out) = exchange(&root, b"PATCH /index.html\n").await;
    let text = String::from_utf8(out).unwrap();

    assert_eq!(
        text,
        "HTTP/1.1 501 Not Implemented\r\nContent-Type: text/html\r\nContent-Length: 0\r\n\r\n"
    );
}

#[tokio::test]
async fn test_immediate_disconnect_gets_no_response() {
    let root = TempRoot::new();

    let (result, out) = exchange(&root, b"").await;

    assert!(result.is_ok());
    assert!(out.is_empty());
}

#[tokio::test]
async fn test_line_without_newline_before_eof() {
    let root = TempRoot::new();
    root.write("/index.html", INDEX_HTML);

    let (_, out) = exchange(&root, b"HEAD /index.html").await;
    let text = String::from_utf8(out).unwrap();

    assert!(text.starts_with("HTTP/1.1 200 OK\r\n"));
    assert!(text.ends_with("Content-Length: 12\r\n\r\n"));
}

#[tokio::test]
async fn test_only_first_line_is_served() {
    let root = TempRoot::new();
    root.write("/index.html", INDEX_HTML);

    let (_, out) = exchange(&root, b"HEAD /index.html\nGET /index.html\n").await;
    let text = String::from_utf8(out).unwrap();

    assert_eq!(text.matches("HTTP/1.1").count(), 1);
    assert!(!text.contains("<p>hello</p>"));
}

#[tokio::test]
async fn test_read_timeout_closes_without_response() {
    let root = TempRoot::new();
    let (mut client, server) = duplex(1024);

    let result = session(&root, server, Duration::from_millis(50)).run().await;
    assert!(result.is_err());

    let mut out = Vec::new();
    client.read_to_end(&mut out).await.unwrap();
    assert!(out.is_empty());
}

#[tokio::test]
async fn test_oversized_line_aborts() {
    let root = TempRoot::new();
    let mut line = b"GET /".to_vec();
    line.extend(std::iter::repeat_n(b'a', 10 * 1024));

    let (result, out) = exchange(&root, &line).await;

    assert!(result.is_err());
    assert!(out.is_empty());
}

#[tokio::test]
async fn test_read_request_line_strips_terminator() {
    let root = TempRoot::new();
    let (mut client, server) = duplex(1024);
    let mut session = session(&root, server, Duration::from_secs(5));
    assert_eq!(session.state(), SessionState::AwaitingRequest);

    client.write_all(b"OPTIONS *\r\n").await.unwrap();
    let line = session.read_request_line().await.unwrap();

    assert_eq!(line.as_deref(), Some("OPTIONS *"));
}

#[tokio::test]
async fn test_directory_target_gets_not_found() {
    let root = TempRoot::new();
    root.write("/dir/inner.html", INDEX_HTML);

    let (get_result, get) = exchange(&root, b"GET /dir\n").await;
    let (_, head) = exchange(&root, b"HEAD /dir\n").await;
    let get = String::from_utf8(get).unwrap();
    let head = String::from_utf8(head).unwrap();

    assert!(get_result.is_ok());
    assert!(get.starts_with("HTTP/1.1 404 Not Found\r\n"));
    assert_eq!(get, head);
}
