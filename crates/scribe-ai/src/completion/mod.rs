//! Streaming completion requests.
//!
//! [`CompletionClient`] is the seam to the remote completion endpoint;
//! [`HttpCompletionClient`] is the production implementation and
//! [`CompletionService`] runs requests in the background, tagging every
//! message with the id of the request it belongs to.

mod client;
mod service;

use async_trait::async_trait;
use scribe_common::SessionId;
use serde::{Deserialize, Serialize};

use crate::mode::Mode;
use crate::AiError;

pub(crate) use client::build_http_client;
pub use client::HttpCompletionClient;
pub use service::{CompletionService, StreamMessage};

/// JSON body POSTed to the completion endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionRequest {
    /// The user's instruction for this round.
    pub prompt: String,
    pub option: Mode,
    /// Instruction or source text the model works on.
    pub command: String,
    pub session_id: SessionId,
}

#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Send `request` and drain the streamed response, calling `on_chunk`
    /// with each decoded fragment. Returns the full text once the stream
    /// has ended.
    async fn stream_completion(
        &self,
        request: &CompletionRequest,
        on_chunk: Box<dyn Fn(String) + Send + Sync>,
    ) -> Result<String, AiError>;
}
