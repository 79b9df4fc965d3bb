//! Test doubles shared across the crate's unit tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use scribe_common::{SessionId, Toasts};
use serde_json::Value;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::Notify;
use tokio::task::JoinHandle;

use crate::completion::{CompletionClient, CompletionRequest};
use crate::dispatcher::Dispatcher;
use crate::persistence::{ChatHistory, ChatRecord, ChatStore, PersistenceNotifier, StaticSession};
use crate::AiError;

/// One scripted response for [`ScriptedClient`].
#[derive(Default)]
pub struct Scripted {
    chunks: Vec<String>,
    failure: Option<AiError>,
    gate: Option<Arc<Notify>>,
}

impl Scripted {
    pub fn chunks(chunks: &[&str]) -> Self {
        Self {
            chunks: chunks.iter().map(|c| c.to_string()).collect(),
            ..Self::default()
        }
    }

    pub fn failure(error: AiError) -> Self {
        Self {
            failure: Some(error),
            ..Self::default()
        }
    }

    /// A response that holds until the returned handle is notified.
    pub fn gated(chunks: &[&str]) -> (Self, Arc<Notify>) {
        let gate = Arc::new(Notify::new());
        let scripted = Self {
            gate: Some(Arc::clone(&gate)),
            ..Self::chunks(chunks)
        };
        (scripted, gate)
    }
}

/// Completion client that replays scripted responses in order.
#[derive(Default)]
pub struct ScriptedClient {
    scripts: Mutex<VecDeque<Scripted>>,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl ScriptedClient {
    pub fn new(scripts: Vec<Scripted>) -> Self {
        Self {
            scripts: Mutex::new(scripts.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Every request received so far.
    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionClient for ScriptedClient {
    async fn stream_completion(
        &self,
        request: &CompletionRequest,
        on_chunk: Box<dyn Fn(String) + Send + Sync>,
    ) -> Result<String, AiError> {
        self.requests.lock().unwrap().push(request.clone());
        let script = self.scripts.lock().unwrap().pop_front().unwrap_or_default();

        if let Some(gate) = &script.gate {
            gate.notified().await;
        }
        for chunk in &script.chunks {
            on_chunk(chunk.clone());
        }
        match script.failure {
            Some(error) => Err(error),
            None => Ok(script.chunks.concat()),
        }
    }
}

/// Chat store that records every write and answers with a canned chat.
#[derive(Default)]
pub struct RecordingStore {
    fail: bool,
    records: Mutex<Vec<ChatRecord>>,
}

impl RecordingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn records(&self) -> Vec<ChatRecord> {
        self.records.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatStore for RecordingStore {
    async fn save_chat(&self, record: &ChatRecord) -> Result<Value, AiError> {
        self.records.lock().unwrap().push(record.clone());
        if self.fail {
            return Err(AiError::Persistence("HTTP 500".into()));
        }
        Ok(serde_json::json!({
            "option": record.option,
            "command": record.command,
            "collectedMsg": record.collected_msg,
        }))
    }
}

/// Dispatcher over a scripted client and an in-memory store.
pub fn scripted_dispatcher(scripts: Vec<Scripted>) -> (Dispatcher, Arc<ScriptedClient>) {
    let client = Arc::new(ScriptedClient::new(scripts));
    let toasts = Toasts::new(8);
    let notifier = PersistenceNotifier::new(
        Arc::new(RecordingStore::new()),
        Arc::new(StaticSession::anonymous()),
        ChatHistory::new(),
        toasts.clone(),
    );
    let dispatcher = Dispatcher::new(
        client.clone(),
        notifier,
        toasts,
        SessionId::from_string("session-1"),
    );
    (dispatcher, client)
}

/// reqwest client that ignores proxy environment variables.
pub fn test_http() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}

/// A response served by [`serve_once`].
pub struct CannedResponse {
    status: u16,
    content_type: &'static str,
    chunks: Vec<Vec<u8>>,
}

impl CannedResponse {
    /// 200 with a plain-text body written one chunk at a time.
    pub fn ok_chunks(chunks: Vec<Vec<u8>>) -> Self {
        Self {
            status: 200,
            content_type: "text/plain; charset=utf-8",
            chunks,
        }
    }

    pub fn status(status: u16, body: &str) -> Self {
        Self {
            status,
            content_type: "text/plain; charset=utf-8",
            chunks: vec![body.as_bytes().to_vec()],
        }
    }

    pub fn json(status: u16, value: Value) -> Self {
        Self {
            status,
            content_type: "application/json",
            chunks: vec![value.to_string().into_bytes()],
        }
    }
}

/// Serve `response` to a single connection on an ephemeral local port.
///
/// Returns the base URL and a handle resolving to the request body.
pub async fn serve_once(response: CannedResponse) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let body = read_request_body(&mut socket).await;

        let head = if response.status == 204 || response.status == 205 {
            format!(
                "HTTP/1.1 {} Canned\r\nconnection: close\r\n\r\n",
                response.status
            )
        } else {
            format!(
                "HTTP/1.1 {} Canned\r\ncontent-type: {}\r\nconnection: close\r\n\r\n",
                response.status, response.content_type
            )
        };
        let _ = socket.write_all(head.as_bytes()).await;
        let _ = socket.flush().await;

        if response.status != 204 && response.status != 205 {
            for chunk in &response.chunks {
                let _ = socket.write_all(chunk).await;
                let _ = socket.flush().await;
                tokio::time::sleep(Duration::from_millis(5)).await;
            }
        }
        let _ = socket.shutdown().await;
        body
    });

    (format!("http://{addr}/"), handle)
}

async fn read_request_body(socket: &mut tokio::net::TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];

    let header_end = loop {
        let n = socket.read(&mut chunk).await.unwrap_or(0);
        if n == 0 {
            return String::new();
        }
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
    };

    let headers = String::from_utf8_lossy(&buf[..header_end]).to_ascii_lowercase();
    let content_length = headers
        .lines()
        .find_map(|line| line.strip_prefix("content-length:"))
        .and_then(|v| v.trim().parse::<usize>().ok())
        .unwrap_or(0);

    while buf.len() < header_end + content_length {
        let n = socket.read(&mut chunk).await.unwrap_or(0);
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
    }

    String::from_utf8_lossy(&buf[header_end..]).into_owned()
}
