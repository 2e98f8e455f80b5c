//! A one-shot HTTP server for exercising remote manifest sources.
//!
//! Each call binds an ephemeral localhost port, answers exactly one request
//! with a canned response and then closes. The request path is ignored.

use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::thread;

/// Serve a single response and return a URL pointing at it.
///
/// ```rust,no_run
/// use mesh_test_utils::http::serve_once;
///
/// let url = serve_once(200, "charm-a:\n  channel: latest/edge\n");
/// assert!(url.starts_with("http://127.0.0.1:"));
/// ```
pub fn serve_once(status: u16, body: &str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let body = body.to_string();

    thread::spawn(move || {
        let Ok((mut stream, _)) = listener.accept() else {
            return;
        };

        // Drain the request head before answering.
        let mut reader = BufReader::new(&stream);
        let mut line = String::new();
        while reader.read_line(&mut line).map(|n| n > 0).unwrap_or(false) {
            if line == "\r\n" || line == "\n" {
                break;
            }
            line.clear();
        }

        let response = format!(
            "HTTP/1.1 {status} {}\r\nContent-Type: application/yaml\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            reason(status),
            body.len(),
        );
        let _ = stream.write_all(response.as_bytes());
        let _ = stream.flush();
    });

    format!("http://{addr}/manifest.yaml")
}

/// A URL on localhost where nothing is listening.
pub fn unreachable_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/manifest.yaml")
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "Unknown",
    }
}
