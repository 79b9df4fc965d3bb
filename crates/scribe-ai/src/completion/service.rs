//! Background execution of completion requests.

use std::sync::Arc;

use scribe_common::RequestId;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::AiError;

use super::{CompletionClient, CompletionRequest};

/// Progress of one request, delivered to the dispatcher.
#[derive(Debug, Clone, PartialEq)]
pub enum StreamMessage {
    /// Newly decoded text.
    Chunk(String),
    /// The stream ended; carries the complete text.
    Done(String),
    /// The request failed before the stream ended.
    Failed(AiError),
}

/// Spawns completion requests and funnels their messages into one channel.
#[derive(Clone)]
pub struct CompletionService {
    client: Arc<dyn CompletionClient>,
    tx: mpsc::UnboundedSender<(StreamMessage, RequestId)>,
}

impl CompletionService {
    pub fn new(
        client: Arc<dyn CompletionClient>,
    ) -> (Self, mpsc::UnboundedReceiver<(StreamMessage, RequestId)>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { client, tx }, rx)
    }

    /// Run `request` on the tokio runtime. Every message it produces is
    /// tagged with `id`; cancelling `cancel` abandons the request.
    pub fn spawn_stream(
        &self,
        request: CompletionRequest,
        id: RequestId,
        cancel: CancellationToken,
    ) -> JoinHandle<()> {
        let client = Arc::clone(&self.client);
        let tx = self.tx.clone();

        tokio::spawn(async move {
            let chunk_tx = tx.clone();
            let on_chunk: Box<dyn Fn(String) + Send + Sync> = Box::new(move |chunk| {
                let _ = chunk_tx.send((StreamMessage::Chunk(chunk), id));
            });

            let result = tokio::select! {
                biased;
                _ = cancel.cancelled() => Err(AiError::Cancelled),
                result = client.stream_completion(&request, on_chunk) => result,
            };

            let message = match result {
                Ok(output) => StreamMessage::Done(output),
                Err(e) => {
                    debug!(request = %id, error = %e, "completion request ended with error");
                    StreamMessage::Failed(e)
                }
            };
            let _ = tx.send((message, id));
        })
    }
}
