//! Integration tests for one loop-body iteration over a real socket.
//!
//! # Purpose
//!
//! These tests wire the *real* HTTP publisher to a local TCP listener and
//! drive the use case exactly as `main` does (only the OS pointer query is
//! replaced by the mock).  They verify:
//!
//! - One call through the loop body produces exactly one outbound POST.
//! - The POST body deserializes to an object with exactly the keys
//!   `time`, `x`, `y`, carrying the sampled coordinates.
//! - The `time` field matches the fixed microsecond-precision UTC format
//!   with the trailing `Z`.
//! - A non-2xx response is indistinguishable from success: the response is
//!   never inspected, so only transport failures can error.
//!
//! # Why a hand-rolled listener?
//!
//! The publisher needs nothing more than "accept, read one request, answer
//! a fixed status line", which a plain `tokio::net::TcpListener` provides
//! without pulling a test-server dependency into the tree.

use std::sync::Arc;
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use mouse_stream::application::StreamSamplesUseCase;
use mouse_stream::infrastructure::pointer::MockPointerQuery;
use mouse_stream::infrastructure::{BlockingPointerSource, HttpSamplePublisher};

/// Locates `needle` inside `haystack` (first occurrence).
fn find_subsequence(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}

/// Accepts one connection, reads one full HTTP request, and answers with
/// `response`.  Returns the request head (request line + headers) and body.
async fn recv_one_request(listener: &TcpListener, response: &str) -> (String, String) {
    let (mut stream, _) = listener.accept().await.expect("accept");

    // Read until the blank line that ends the headers.
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    let header_end = loop {
        let n = stream.read(&mut chunk).await.expect("read headers");
        assert!(n > 0, "connection closed before the headers finished");
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = find_subsequence(&buf, b"\r\n\r\n") {
            break pos + 4;
        }
    };
    let head = String::from_utf8_lossy(&buf[..header_end]).to_string();

    // The body length comes from the content-length header.
    let content_length: usize = head
        .lines()
        .find_map(|line| {
            let (name, value) = line.split_once(':')?;
            if name.eq_ignore_ascii_case("content-length") {
                value.trim().parse().ok()
            } else {
                None
            }
        })
        .expect("request must carry a content-length header");

    while buf.len() < header_end + content_length {
        let n = stream.read(&mut chunk).await.expect("read body");
        assert!(n > 0, "connection closed before the body finished");
        buf.extend_from_slice(&chunk[..n]);
    }
    let body = String::from_utf8(buf[header_end..header_end + content_length].to_vec())
        .expect("body must be UTF-8");

    stream
        .write_all(response.as_bytes())
        .await
        .expect("write response");

    (head, body)
}

/// Builds the use case around the real publisher and the mock pointer,
/// exactly as `main` wires the native query.
fn build_use_case(endpoint: &str, x: f64, y: f64) -> StreamSamplesUseCase {
    let source = BlockingPointerSource::new(MockPointerQuery::fixed(x, y));
    let publisher = HttpSamplePublisher::new(endpoint).expect("endpoint must parse");
    StreamSamplesUseCase::new(
        Arc::new(source),
        Arc::new(publisher),
        Duration::from_millis(400),
    )
}

#[tokio::test]
async fn test_one_loop_body_iteration_produces_exactly_one_well_formed_post() {
    // Step 1: bind a local listener on an ephemeral port.
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");

    // Step 2: serve exactly one request, then require silence.
    let server = tokio::spawn(async move {
        let (head, body) =
            recv_one_request(&listener, "HTTP/1.1 200 OK\r\ncontent-length: 0\r\n\r\n").await;

        // No second connection may arrive: one loop body iteration means
        // one outbound POST.
        let second = tokio::time::timeout(Duration::from_millis(200), listener.accept()).await;
        assert!(second.is_err(), "loop body must issue exactly one POST");

        (head, body)
    });

    // Step 3: run one loop body iteration against the listener.
    let uc = build_use_case(&format!("http://{addr}/samples"), 100.0, 250.0);
    uc.sample_once().await.expect("loop body must succeed");

    let (head, body) = server.await.expect("server task");

    // Step 4: the request must be a POST to the configured path.
    assert!(
        head.starts_with("POST /samples HTTP/1.1"),
        "unexpected request line: {head}"
    );

    // Step 5: the body must be an object with exactly the keys time, x, y
    // carrying the sampled coordinates.
    let value: serde_json::Value = serde_json::from_str(&body).expect("body must be JSON");
    let object = value.as_object().expect("body must be a JSON object");
    let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(keys, ["time", "x", "y"]);
    assert_eq!(object["x"].as_f64(), Some(100.0));
    assert_eq!(object["y"].as_f64(), Some(250.0));

    // Step 6: the timestamp must match the fixed-width UTC wire format.
    let time = object["time"].as_str().expect("time must be a string");
    assert_eq!(time.len(), 27, "time must be fixed-width: {time}");
    assert!(time.ends_with('Z'), "time must end with Z: {time}");
    assert!(
        chrono::NaiveDateTime::parse_from_str(time, "%Y-%m-%dT%H:%M:%S%.6fZ").is_ok(),
        "time must parse in the wire format: {time}"
    );
}

#[tokio::test]
async fn test_non_2xx_response_is_indistinguishable_from_success() {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");

    // The endpoint rejects the sample; the stream must not care.
    let server = tokio::spawn(async move {
        recv_one_request(
            &listener,
            "HTTP/1.1 404 Not Found\r\ncontent-length: 0\r\n\r\n",
        )
        .await
    });

    let uc = build_use_case(&format!("http://{addr}/ingest"), 5.0, 6.0);
    let result = uc.sample_once().await;

    server.await.expect("server task");
    assert!(
        result.is_ok(),
        "a non-2xx response must not surface as an error: {result:?}"
    );
}
