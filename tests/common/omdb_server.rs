//! Minimal HTTP/1.1 server standing in for OMDb in integration tests.
//!
//! Answers every request with the same status and body, and records the
//! request line of each hit so tests can inspect the query string.

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

pub struct OmdbServer {
    pub url: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl OmdbServer {
    /// Request lines seen so far, e.g. `GET /?t=Inception&apikey=k HTTP/1.1`.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    pub fn hits(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

/// Serve `body` as JSON with HTTP 200.
pub fn start_json(body: &str) -> OmdbServer {
    start(200, "OK", body)
}

/// Starts a server in a background thread. It runs until the process exits.
pub fn start(status: u16, reason: &'static str, body: &str) -> OmdbServer {
    spawn(status, reason, body, body.len())
}

/// Like `start`, but announces more body bytes than it sends and then
/// closes the connection, so reading the body fails.
pub fn start_truncated(status: u16, reason: &'static str, body: &str) -> OmdbServer {
    spawn(status, reason, body, body.len() + 64)
}

fn spawn(status: u16, reason: &'static str, body: &str, content_length: usize) -> OmdbServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let requests = Arc::new(Mutex::new(Vec::new()));
    let body = Arc::new(body.to_string());

    let seen = Arc::clone(&requests);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let seen = Arc::clone(&seen);
            let body = Arc::clone(&body);
            thread::spawn(move || handle(stream, status, reason, &body, content_length, &seen));
        }
    });

    OmdbServer {
        url: format!("http://127.0.0.1:{}/", port),
        requests,
    }
}

/// A URL nothing is listening on.
pub fn unreachable_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}/", port)
}

fn handle(
    mut stream: TcpStream,
    status: u16,
    reason: &str,
    body: &str,
    content_length: usize,
    seen: &Mutex<Vec<String>>,
) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) | Err(_) => return,
        Ok(n) => n,
    };
    let request = String::from_utf8_lossy(&buf[..n]);
    if let Some(line) = request.lines().next() {
        seen.lock().unwrap().push(line.to_string());
    }

    let response = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        reason,
        content_length,
        body
    );
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.flush();
}
