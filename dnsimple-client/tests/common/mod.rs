//! Shared test helpers: fixture loading and an in-process HTTP responder.

#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use dnsimple_client::{Client, LegacyClient, LegacyCredentials};
use tokio::io::{AsyncBufReadExt, AsyncReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

pub const ACCESS_TOKEN: &str = "SomeMagicToken";
pub const ACCOUNT_ID: u64 = 1010;

/// Skip a live test when an environment variable is missing.
#[macro_export]
macro_rules! skip_if_no_credentials {
    ($($var:expr),+) => {
        $(
            if std::env::var($var).is_err() {
                eprintln!("Skipping test: missing environment variable {}", $var);
                return;
            }
        )+
    };
}

/// Assert an `Option` is `Some` and unwrap it (the test fails otherwise).
#[macro_export]
macro_rules! require_some {
    ($expr:expr $(,)?) => {{
        let opt = $expr;
        assert!(opt.is_some(), "expected Some(..), got None");
        let Some(val) = opt else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let opt = $expr;
        assert!(opt.is_some(), "{}", format_args!($($msg)+));
        let Some(val) = opt else {
            return;
        };
        val
    }};
}

/// Assert a `Result` is `Ok` and unwrap it (the test fails otherwise).
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let res = $expr;
        assert!(res.is_ok(), "{}: {res:?}", format_args!($($msg)+));
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

// ============ Fixtures ============

/// A canned HTTP response read from a `.http` file: status line, headers,
/// blank line, body.
#[derive(Debug, Clone)]
pub struct Fixture {
    pub status_line: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl Fixture {
    /// Load `tests/fixtures/<name>.http` (e.g. `v2/whoami/success`).
    pub fn load(name: &str) -> Self {
        let path: PathBuf = [env!("CARGO_MANIFEST_DIR"), "tests", "fixtures"]
            .iter()
            .collect::<PathBuf>()
            .join(format!("{name}.http"));
        let raw = std::fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("cannot read fixture {}: {e}", path.display()));
        Self::parse(&raw)
    }

    pub fn parse(raw: &str) -> Self {
        let normalized = raw.replace("\r\n", "\n");
        let (head, body) = normalized
            .split_once("\n\n")
            .unwrap_or((normalized.as_str(), ""));
        let mut lines = head.lines();
        let status_line = lines.next().unwrap_or("HTTP/1.1 200 OK").trim().to_string();
        let headers = lines
            .filter_map(|l| l.split_once(':'))
            .map(|(k, v)| (k.trim().to_string(), v.trim().to_string()))
            .collect();
        Self {
            status_line,
            headers,
            body: body.trim_end_matches('\n').to_string(),
        }
    }

    pub fn status(&self) -> u16 {
        self.status_line
            .split_whitespace()
            .nth(1)
            .and_then(|s| s.parse().ok())
            .unwrap_or(200)
    }

    fn to_wire(&self) -> Vec<u8> {
        let mut out = format!("{}\r\n", self.status_line);
        for (k, v) in &self.headers {
            let lower = k.to_ascii_lowercase();
            if matches!(
                lower.as_str(),
                "content-length" | "transfer-encoding" | "connection"
            ) {
                continue;
            }
            out.push_str(&format!("{k}: {v}\r\n"));
        }
        if self.status() != 204 {
            out.push_str(&format!("Content-Length: {}\r\n", self.body.len()));
        }
        out.push_str("Connection: close\r\n\r\n");
        if self.status() != 204 {
            out.push_str(&self.body);
        }
        out.into_bytes()
    }
}

// ============ Mock server ============

/// A request as received by [`MockServer`].
#[derive(Debug, Clone, Default)]
pub struct CapturedRequest {
    pub method: String,
    /// Path and query string, e.g. `/v2/1010/domains?page=2`.
    pub target: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl CapturedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn path(&self) -> &str {
        self.target.split('?').next().unwrap_or_default()
    }

    pub fn query(&self) -> Option<&str> {
        self.target.split_once('?').map(|(_, q)| q)
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).expect("request body is not JSON")
    }
}

/// Answers one connection per fixture, in order, then stops.
pub struct MockServer {
    url: String,
    captured: Arc<Mutex<Vec<CapturedRequest>>>,
    handle: JoinHandle<()>,
}

impl MockServer {
    pub async fn start(fixtures: Vec<Fixture>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock server");
        let url = format!("http://{}", listener.local_addr().expect("local addr"));
        let captured = Arc::new(Mutex::new(Vec::new()));

        let sink = Arc::clone(&captured);
        let handle = tokio::spawn(async move {
            for fixture in fixtures {
                let Ok((stream, _)) = listener.accept().await else {
                    return;
                };
                let (read_half, mut write_half) = stream.into_split();
                let mut reader = BufReader::new(read_half);
                let request = read_request(&mut reader).await;
                sink.lock().expect("capture lock").push(request);
                let _ = write_half.write_all(&fixture.to_wire()).await;
                let _ = write_half.shutdown().await;
            }
        });

        Self {
            url,
            captured,
            handle,
        }
    }

    /// Serve a single fixture file.
    pub async fn serve(name: &str) -> Self {
        Self::start(vec![Fixture::load(name)]).await
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Wait until every fixture was served and return the requests.
    pub async fn finish(self) -> Vec<CapturedRequest> {
        let _ = self.handle.await;
        self.captured.lock().expect("capture lock").clone()
    }

    /// Wait for the single request of a one-fixture server.
    pub async fn request(self) -> CapturedRequest {
        self.finish()
            .await
            .into_iter()
            .next()
            .expect("no request received")
    }
}

async fn read_request<R>(reader: &mut BufReader<R>) -> CapturedRequest
where
    R: tokio::io::AsyncRead + Unpin,
{
    let mut request = CapturedRequest::default();

    let mut line = String::new();
    if reader.read_line(&mut line).await.unwrap_or(0) == 0 {
        return request;
    }
    let mut parts = line.split_whitespace();
    request.method = parts.next().unwrap_or_default().to_string();
    request.target = parts.next().unwrap_or_default().to_string();

    loop {
        line.clear();
        if reader.read_line(&mut line).await.unwrap_or(0) == 0 {
            break;
        }
        let trimmed = line.trim_end();
        if trimmed.is_empty() {
            break;
        }
        if let Some((k, v)) = trimmed.split_once(':') {
            request
                .headers
                .push((k.trim().to_string(), v.trim().to_string()));
        }
    }

    let length: usize = request
        .header("content-length")
        .and_then(|v| v.parse().ok())
        .unwrap_or(0);
    if length > 0 {
        let mut body = vec![0u8; length];
        if reader.read_exact(&mut body).await.is_ok() {
            request.body = String::from_utf8_lossy(&body).into_owned();
        }
    }

    request
}

// ============ Clients ============

/// A v2 client authenticated with [`ACCESS_TOKEN`] pointing at `server`.
pub fn client_for(server: &MockServer) -> Client {
    Client::builder()
        .access_token(ACCESS_TOKEN)
        .base_url(server.url())
        .build()
        .expect("build client")
}

/// A v1 client pointing at `server`.
pub fn legacy_client_for(server: &MockServer, credentials: LegacyCredentials) -> LegacyClient {
    LegacyClient::with_endpoint(credentials, &format!("{}/v1", server.url()))
        .expect("build legacy client")
}
