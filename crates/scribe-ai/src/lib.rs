//! AI command palette engine for scribe.
//!
//! Turns a palette action (mode + command text) into a streamed completion
//! request, decodes the response body, and routes the finished text into
//! the document:
//! - Streaming decode of the completion body (UTF-8 across chunk boundaries)
//! - Relaxed JSON parsing for chart payloads
//! - A request dispatcher that ignores superseded responses
//! - Fire-and-forget persistence of finished exchanges

pub mod completion;
pub mod dispatcher;
pub mod document;
pub mod mode;
pub mod persistence;
pub mod relaxed_json;
pub mod router;
pub mod selector;
pub mod streaming;

#[cfg(test)]
pub(crate) mod test_support;

pub use completion::{
    CompletionClient, CompletionRequest, CompletionService, HttpCompletionClient, StreamMessage,
};
pub use dispatcher::{DispatchEvent, DispatchState, Dispatcher};
pub use document::{Document, Node, Selection, TextDocument};
pub use mode::{palette_commands, Mode, PaletteCommand};
pub use persistence::{
    ChatHistory, ChatRecord, ChatStore, Exchange, HttpChatStore, PersistenceNotifier,
    SessionProvider, StaticSession,
};
pub use router::{route, RouteOutcome};
pub use selector::Selector;

/// Toast text for rate-limited requests.
pub const RATE_LIMITED_MESSAGE: &str = "You have reached your request limit for the day.";
/// Toast text for server-side and persistence failures.
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong. Please try again.";
/// Toast text when the response carries no body to read.
pub const NO_STREAM_MESSAGE: &str = "No readable stream found.";
/// Toast text when a chart payload cannot be parsed.
pub const CHART_FAILURE_MESSAGE: &str = "Failed to process the streamed response.";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AiError {
    #[error("Rate limited")]
    RateLimited,
    #[error("Server error: HTTP {status}")]
    ServerError { status: u16 },
    #[error("No readable stream in response")]
    StreamUnavailable,
    #[error("Network error: {0}")]
    NetworkError(String),
    #[error("Chart parse error: {0}")]
    ChartParse(String),
    #[error("Persistence error: {0}")]
    Persistence(String),
    #[error("Request cancelled")]
    Cancelled,
}

impl AiError {
    /// Text shown to the user in a toast for this failure.
    pub fn user_message(&self) -> String {
        match self {
            AiError::RateLimited => RATE_LIMITED_MESSAGE.to_string(),
            AiError::ServerError { .. } | AiError::Persistence(_) => {
                GENERIC_FAILURE_MESSAGE.to_string()
            }
            AiError::StreamUnavailable => NO_STREAM_MESSAGE.to_string(),
            AiError::ChartParse(_) => CHART_FAILURE_MESSAGE.to_string(),
            AiError::NetworkError(msg) => msg.clone(),
            AiError::Cancelled => "Request cancelled.".to_string(),
        }
    }
}
