//! Minimal HTTP/1.1 server for integration tests.
//!
//! Serves one static body on every path, with a configurable status code
//! and optional HEAD refusal, and counts the requests it handles so tests
//! can assert that skip-if-exists really skips the network.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;

#[derive(Debug, Clone, Copy)]
pub struct PageServerOptions {
    /// Status for every response (e.g. 200 or 404).
    pub status: u16,
    /// If false, HEAD gets 405 while GET still works.
    pub head_allowed: bool,
}

impl Default for PageServerOptions {
    fn default() -> Self {
        Self {
            status: 200,
            head_allowed: true,
        }
    }
}

/// Starts a server in a background thread serving `body`. Returns the base
/// URL (e.g. "http://127.0.0.1:12345/") and the request counter. The server
/// runs until the process exits.
pub fn start(body: &str, opts: PageServerOptions) -> (String, Arc<AtomicUsize>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let body: Arc<Vec<u8>> = Arc::new(body.as_bytes().to_vec());
    let hits = Arc::new(AtomicUsize::new(0));
    let hits_srv = Arc::clone(&hits);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let body = Arc::clone(&body);
            let hits = Arc::clone(&hits_srv);
            thread::spawn(move || handle(stream, &body, opts, &hits));
        }
    });
    (format!("http://127.0.0.1:{}/", port), hits)
}

fn handle(
    mut stream: std::net::TcpStream,
    body: &[u8],
    opts: PageServerOptions,
    hits: &AtomicUsize,
) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) => return,
        Ok(n) => n,
        Err(_) => return,
    };
    let request = match std::str::from_utf8(&buf[..n]) {
        Ok(s) => s,
        Err(_) => return,
    };
    let method = request.split_whitespace().next().unwrap_or("");
    hits.fetch_add(1, Ordering::SeqCst);

    let is_head = method.eq_ignore_ascii_case("HEAD");
    if is_head && !opts.head_allowed {
        let _ = stream.write_all(b"HTTP/1.1 405 Method Not Allowed\r\nContent-Length: 0\r\n\r\n");
        return;
    }

    let reason = match opts.status {
        200 => "OK",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "Status",
    };
    let header = format!(
        "HTTP/1.1 {} {}\r\nContent-Length: {}\r\nContent-Type: text/html\r\nConnection: close\r\n\r\n",
        opts.status,
        reason,
        body.len()
    );
    let _ = stream.write_all(header.as_bytes());
    if !is_head {
        let _ = stream.write_all(body);
    }
}
