#![allow(dead_code)]

use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::thread;

pub struct StubResponse {
    pub status: u16,
    pub content_type: String,
    pub body: Vec<u8>,
}

impl StubResponse {
    pub fn pdf(len: usize) -> Self {
        Self {
            status: 200,
            content_type: "application/pdf".into(),
            body: pdf_bytes(len),
        }
    }

    pub fn not_found() -> Self {
        Self {
            status: 404,
            content_type: "text/html".into(),
            body: b"<html>not found</html>".to_vec(),
        }
    }

    pub fn html(body: &str) -> Self {
        Self {
            status: 200,
            content_type: "text/html".into(),
            body: body.as_bytes().to_vec(),
        }
    }
}

pub fn pdf_bytes(len: usize) -> Vec<u8> {
    let mut body = b"%PDF-1.4\n".to_vec();
    if len > body.len() {
        body.resize(len, b'0');
    }
    body
}

pub struct StubServer {
    pub base_url: String,
}

/// Serves canned responses by request path on an ephemeral local port.
pub fn serve(routes: HashMap<String, StubResponse>) -> StubServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind stub server");
    let addr = listener.local_addr().expect("stub server addr");

    thread::spawn(move || {
        for stream in listener.incoming() {
            let Ok(mut stream) = stream else { continue };
            let Some(path) = read_request_path(&mut stream) else {
                continue;
            };

            let (status, content_type, body): (u16, &str, &[u8]) = match routes.get(&path) {
                Some(r) => (r.status, r.content_type.as_str(), r.body.as_slice()),
                None => (404, "text/plain", b"no route"),
            };

            let head = format!(
                "HTTP/1.1 {} {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                status,
                reason(status),
                content_type,
                body.len()
            );
            let _ = stream.write_all(head.as_bytes());
            let _ = stream.write_all(body);
        }
    });

    StubServer {
        base_url: format!("http://{}", addr),
    }
}

fn read_request_path(stream: &mut TcpStream) -> Option<String> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    loop {
        let n = stream.read(&mut chunk).ok()?;
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
        if buf.windows(4).any(|w| w == b"\r\n\r\n") || buf.len() > 16 * 1024 {
            break;
        }
    }

    let request = String::from_utf8_lossy(&buf);
    let mut parts = request.split_whitespace();
    let _method = parts.next()?;
    parts.next().map(|p| p.to_string())
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "Unknown",
    }
}
