//! One-shot HTTP server used to exercise the enrichment client.

use std::{
    io::{BufRead, BufReader, Read, Write},
    net::{TcpListener, TcpStream},
    sync::mpsc::{self, Receiver},
    thread,
    time::Duration,
};

/// Request observed by [`OneShotServer`].
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    /// First line of the request, e.g. `POST /v1/chat/completions HTTP/1.1`.
    pub request_line: String,
    /// Header pairs with lower-cased names.
    pub headers: Vec<(String, String)>,
    /// Raw request body.
    pub body: String,
}

impl CapturedRequest {
    /// Value of the named header, if present.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Server answering a single request with a canned response.
pub struct OneShotServer {
    /// Base URL to configure on the client, ending in `/v1`.
    pub base_url: String,
    captured: Receiver<CapturedRequest>,
}

impl OneShotServer {
    /// Start a server replying with `status` and `body` after `delay`.
    pub fn start(status: &'static str, body: String, delay: Duration) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .unwrap_or_else(|err| panic!("failed to bind test server: {err}"));
        let port = listener
            .local_addr()
            .unwrap_or_else(|err| panic!("failed to read server address: {err}"))
            .port();
        let (sender, captured) = mpsc::channel();
        thread::spawn(move || {
            let Ok((stream, _)) = listener.accept() else {
                return;
            };
            if let Some(request) = handle(stream, status, &body, delay) {
                let _ = sender.send(request);
            }
        });
        Self {
            base_url: format!("http://127.0.0.1:{port}/v1"),
            captured,
        }
    }

    /// Reply `200 OK` with a chat-completions body whose content is `content`.
    pub fn replying_with(content: &str) -> Self {
        let body = serde_json::json!({
            "choices": [{ "message": { "role": "assistant", "content": content } }]
        });
        Self::start("200 OK", body.to_string(), Duration::ZERO)
    }

    /// Request received by the server.
    pub fn captured(&self) -> CapturedRequest {
        self.captured
            .recv_timeout(Duration::from_secs(5))
            .unwrap_or_else(|err| panic!("server did not capture a request: {err}"))
    }
}

fn handle(
    stream: TcpStream,
    status: &str,
    body: &str,
    delay: Duration,
) -> Option<CapturedRequest> {
    let mut reader = BufReader::new(stream.try_clone().ok()?);
    let mut request_line = String::new();
    reader.read_line(&mut request_line).ok()?;

    let mut headers = Vec::new();
    loop {
        let mut line = String::new();
        reader.read_line(&mut line).ok()?;
        let trimmed = line.trim_end();
        if trimmed.is_empty() {
            break;
        }
        if let Some((name, value)) = trimmed.split_once(':') {
            headers.push((name.trim().to_ascii_lowercase(), value.trim().to_owned()));
        }
    }

    let length = headers
        .iter()
        .find(|(name, _)| name == "content-length")
        .and_then(|(_, value)| value.parse::<usize>().ok())
        .unwrap_or(0);
    let mut payload = vec![0_u8; length];
    reader.read_exact(&mut payload).ok()?;

    let captured = CapturedRequest {
        request_line: request_line.trim_end().to_owned(),
        headers,
        body: String::from_utf8_lossy(&payload).into_owned(),
    };

    thread::sleep(delay);
    let response = format!(
        "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );
    let mut writer = stream;
    let _ = writer.write_all(response.as_bytes());
    let _ = writer.flush();
    Some(captured)
}

/// Base URL for a local port with nothing listening on it.
pub fn refused_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .unwrap_or_else(|err| panic!("failed to bind probe listener: {err}"));
    let port = listener
        .local_addr()
        .unwrap_or_else(|err| panic!("failed to read probe address: {err}"))
        .port();
    drop(listener);
    format!("http://127.0.0.1:{port}/v1")
}
