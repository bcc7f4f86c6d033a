//! Test-only HTTP stub and generator doubles.

use crate::error::GenerationError;
use crate::generator::{GeneratedPayload, GenerationRequest, ImageGenerator};
use async_trait::async_trait;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::Notify;

/// Canned HTTP response served for every request.
#[derive(Debug, Clone)]
pub(crate) struct StubResponse {
    status: u16,
    content_type: Option<String>,
    body: Vec<u8>,
}

impl StubResponse {
    pub(crate) fn ok(body: Vec<u8>, content_type: &str) -> Self {
        Self {
            status: 200,
            content_type: Some(content_type.to_string()),
            body,
        }
    }

    pub(crate) fn ok_untyped(body: Vec<u8>) -> Self {
        Self {
            status: 200,
            content_type: None,
            body,
        }
    }

    pub(crate) fn status(status: u16, text: &str) -> Self {
        Self {
            status,
            content_type: Some("text/plain".to_string()),
            body: text.as_bytes().to_vec(),
        }
    }

    fn to_bytes(&self) -> Vec<u8> {
        let reason = match self.status {
            200 => "OK",
            401 => "Unauthorized",
            404 => "Not Found",
            500 => "Internal Server Error",
            _ => "Status",
        };
        let mut head = format!(
            "HTTP/1.1 {} {reason}\r\nContent-Length: {}\r\nConnection: close\r\n",
            self.status,
            self.body.len()
        );
        if let Some(ct) = &self.content_type {
            head.push_str(&format!("Content-Type: {ct}\r\n"));
        }
        head.push_str("\r\n");

        let mut out = head.into_bytes();
        out.extend_from_slice(&self.body);
        out
    }
}

/// Minimal HTTP/1.1 server on an ephemeral localhost port.
pub(crate) struct StubServer {
    addr: SocketAddr,
    requests: Arc<Mutex<Vec<String>>>,
}

impl StubServer {
    pub(crate) async fn start(response: StubResponse) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let requests = Arc::new(Mutex::new(Vec::new()));

        let log = Arc::clone(&requests);
        tokio::spawn(async move {
            while let Ok((stream, _)) = listener.accept().await {
                let response = response.clone();
                let log = Arc::clone(&log);
                tokio::spawn(async move {
                    if let Some(raw) = serve(stream, &response).await {
                        log.lock().unwrap().push(raw);
                    }
                });
            }
        });

        Self { addr, requests }
    }

    /// Accepts connections but never answers them.
    pub(crate) async fn stalled() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let mut held = Vec::new();
            while let Ok((stream, _)) = listener.accept().await {
                held.push(stream);
            }
        });

        Self {
            addr,
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// URL on a port nothing listens on.
    pub(crate) async fn closed_url() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        format!("http://{addr}/")
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }

    /// Raw text (head and body, lossy UTF-8) of the most recent request.
    pub(crate) async fn last_request(&self) -> Option<String> {
        // The handler records after writing the response; give it a moment.
        for _ in 0..50 {
            if let Some(last) = self.requests.lock().unwrap().last().cloned() {
                return Some(last);
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        None
    }
}

async fn serve(mut stream: TcpStream, response: &StubResponse) -> Option<String> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];

    let header_end = loop {
        let n = stream.read(&mut chunk).await.ok()?;
        if n == 0 {
            return None;
        }
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = find(&buf, b"\r\n\r\n") {
            break pos + 4;
        }
    };

    let head = String::from_utf8_lossy(&buf[..header_end]).to_string();
    let content_length = head
        .lines()
        .filter_map(|line| line.split_once(':'))
        .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
        .and_then(|(_, value)| value.trim().parse::<usize>().ok())
        .unwrap_or(0);

    while buf.len() < header_end + content_length {
        let n = stream.read(&mut chunk).await.ok()?;
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
    }

    stream.write_all(&response.to_bytes()).await.ok()?;
    let _ = stream.shutdown().await;

    Some(String::from_utf8_lossy(&buf).to_string())
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}

/// Generator double that returns a fixed result and counts calls.
///
/// With `gated`, each call parks until the gate's `notify_one()` so tests
/// can observe the in-flight state.
pub(crate) struct FakeGenerator {
    result: Box<dyn Fn() -> Result<GeneratedPayload, GenerationError> + Send + Sync>,
    needs_credential: bool,
    calls: AtomicUsize,
    requests: Mutex<Vec<GenerationRequest>>,
    gate: Option<Arc<Notify>>,
}

impl FakeGenerator {
    pub(crate) fn returning(
        result: impl Fn() -> Result<GeneratedPayload, GenerationError> + Send + Sync + 'static,
    ) -> Self {
        Self {
            result: Box::new(result),
            needs_credential: false,
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
            gate: None,
        }
    }

    pub(crate) fn remote(url: &'static str) -> Self {
        Self::returning(move || {
            Ok(GeneratedPayload::Remote {
                url: url.to_string(),
            })
        })
    }

    pub(crate) fn requiring_credential(mut self) -> Self {
        self.needs_credential = true;
        self
    }

    pub(crate) fn gated(mut self, gate: Arc<Notify>) -> Self {
        self.gate = Some(gate);
        self
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub(crate) fn last_request(&self) -> Option<GenerationRequest> {
        self.requests.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl ImageGenerator for FakeGenerator {
    fn name(&self) -> &str {
        "fake"
    }

    fn requires_credential(&self) -> bool {
        self.needs_credential
    }

    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GeneratedPayload, GenerationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(request.clone());
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        (self.result)()
    }

    fn timeout(&self) -> Duration {
        Duration::from_secs(1)
    }
}

/// Shares one `FakeGenerator` between a session and the test body.
#[async_trait]
impl ImageGenerator for Arc<FakeGenerator> {
    fn name(&self) -> &str {
        "fake"
    }

    fn requires_credential(&self) -> bool {
        self.as_ref().requires_credential()
    }

    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GeneratedPayload, GenerationError> {
        self.as_ref().generate(request).await
    }

    fn timeout(&self) -> Duration {
        self.as_ref().timeout()
    }
}
