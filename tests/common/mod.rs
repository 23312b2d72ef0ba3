//! Minimal localhost HTTP server for downloader tests.
//!
//! Replays a caller-supplied raw response verbatim, which lets tests declare
//! a dishonest Content-Length or omit the header entirely, which is exactly
//! what the size ceiling defends against.

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// Starts a server answering every request with `response`, then closing the
/// connection. Returns the base URL (e.g. "http://127.0.0.1:12345/"). The
/// server runs until the process exits.
pub fn serve_raw(response: Vec<u8>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let response = Arc::new(response);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let response = Arc::clone(&response);
            thread::spawn(move || handle(stream, &response));
        }
    });
    format!("http://127.0.0.1:{port}/")
}

fn handle(mut stream: TcpStream, response: &[u8]) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    if stream.read(&mut buf).is_err() {
        return;
    }
    let _ = stream.write_all(response);
    let _ = stream.flush();
}

/// 200 OK with an honest Content-Length.
pub fn ok_response(body: &[u8]) -> Vec<u8> {
    ok_response_with_length(body, body.len() as u64)
}

/// 200 OK declaring `declared` bytes no matter how long `body` really is.
pub fn ok_response_with_length(body: &[u8], declared: u64) -> Vec<u8> {
    let mut response = format!(
        "HTTP/1.1 200 OK\r\nContent-Length: {declared}\r\nConnection: close\r\n\r\n"
    )
    .into_bytes();
    response.extend_from_slice(body);
    response
}

/// 200 OK with no Content-Length at all; the body is framed by the
/// connection close.
pub fn ok_response_unsized(body: &[u8]) -> Vec<u8> {
    let mut response = b"HTTP/1.1 200 OK\r\nConnection: close\r\n\r\n".to_vec();
    response.extend_from_slice(body);
    response
}
