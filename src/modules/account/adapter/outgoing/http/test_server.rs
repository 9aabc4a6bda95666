//! Minimal HTTP/1.1 server for exercising the endpoint adapters over a real socket.

use std::io::{BufRead, BufReader, Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub content_type: Option<String>,
    pub body: String,
}

pub struct CannedServer {
    pub base_url: String,
    requests: Receiver<RecordedRequest>,
}

impl CannedServer {
    /// Answers one request with `status` and `body`, then stops listening.
    pub fn respond_once(status: u16, body: &str) -> Self {
        Self::respond_in_order(vec![(status, body.to_string())])
    }

    /// Answers one request per canned response, in the given order.
    pub fn respond_in_order(responses: Vec<(u16, String)>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let base_url = format!("http://{}/api/", listener.local_addr().unwrap());
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            for (status, body) in responses {
                let Ok((mut stream, _)) = listener.accept() else {
                    return;
                };
                let Some(request) = read_request(&mut stream) else {
                    return;
                };
                write_response(&mut stream, status, &body);
                if tx.send(request).is_err() {
                    return;
                }
            }
        });

        Self {
            base_url,
            requests: rx,
        }
    }

    /// Accepts a connection and holds it open without answering.
    pub fn never_respond(hold: Duration) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let base_url = format!("http://{}/api/", listener.local_addr().unwrap());
        let (_tx, rx) = mpsc::channel();

        thread::spawn(move || {
            if let Ok((stream, _)) = listener.accept() {
                thread::sleep(hold);
                drop(stream);
            }
        });

        Self {
            base_url,
            requests: rx,
        }
    }

    /// A base URL whose port has nothing listening on it.
    pub fn unused_base_url() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        format!("http://{addr}/api/")
    }

    /// The next request the server answered.
    pub fn recorded(&self) -> RecordedRequest {
        self.requests
            .recv_timeout(Duration::from_secs(5))
            .expect("server did not record a request")
    }
}

fn read_request(stream: &mut TcpStream) -> Option<RecordedRequest> {
    let mut reader = BufReader::new(stream.try_clone().ok()?);

    let mut request_line = String::new();
    reader.read_line(&mut request_line).ok()?;
    let mut parts = request_line.split_whitespace();
    let method = parts.next()?.to_string();
    let path = parts.next()?.to_string();

    let mut content_length = 0usize;
    let mut content_type = None;
    loop {
        let mut line = String::new();
        reader.read_line(&mut line).ok()?;
        let line = line.trim_end();
        if line.is_empty() {
            break;
        }
        if let Some((name, value)) = line.split_once(':') {
            let value = value.trim();
            match name.trim().to_ascii_lowercase().as_str() {
                "content-length" => content_length = value.parse().ok()?,
                "content-type" => content_type = Some(value.to_string()),
                _ => {}
            }
        }
    }

    let mut body = vec![0u8; content_length];
    reader.read_exact(&mut body).ok()?;

    Some(RecordedRequest {
        method,
        path,
        content_type,
        body: String::from_utf8(body).ok()?,
    })
}

fn write_response(stream: &mut TcpStream, status: u16, body: &str) {
    let response = format!(
        "HTTP/1.1 {status} Canned\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.flush();
}
