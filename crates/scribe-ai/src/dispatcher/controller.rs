//! Dispatcher struct and read-only accessors.

use std::sync::Arc;

use scribe_common::{RequestId, SessionId, Toasts};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::completion::{CompletionClient, CompletionRequest, CompletionService, StreamMessage};
use crate::mode::Mode;
use crate::persistence::{ChatHistory, PersistenceNotifier};
use crate::AiError;

use super::DispatchState;

/// Drives one palette's requests from dispatch to routing.
pub struct Dispatcher {
    pub(super) service: CompletionService,
    pub(super) rx: mpsc::UnboundedReceiver<(StreamMessage, RequestId)>,
    pub(super) notifier: PersistenceNotifier,
    pub(super) toasts: Toasts,
    pub(super) session_id: SessionId,
    pub(super) state: DispatchState,
    /// Id of the most recently dispatched request.
    pub(super) latest: RequestId,
    /// Body of the most recently dispatched request.
    pub(super) last_request: Option<CompletionRequest>,
    /// Live completion buffer.
    pub(super) completion: String,
    pub(super) cancel: Option<CancellationToken>,
    pub(super) last_error: Option<AiError>,
    /// Persistence writes that may still be running.
    pub(super) persisting: Vec<JoinHandle<()>>,
}

impl Dispatcher {
    pub fn new(
        client: Arc<dyn CompletionClient>,
        notifier: PersistenceNotifier,
        toasts: Toasts,
        session_id: SessionId,
    ) -> Self {
        let (service, rx) = CompletionService::new(client);
        Self {
            service,
            rx,
            notifier,
            toasts,
            session_id,
            state: DispatchState::Idle,
            latest: RequestId::default(),
            last_request: None,
            completion: String::new(),
            cancel: None,
            last_error: None,
            persisting: Vec::new(),
        }
    }

    pub fn state(&self) -> DispatchState {
        self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, DispatchState::Pending(_))
    }

    /// The completion buffer: live text while pending, frozen once completed.
    pub fn completion(&self) -> &str {
        &self.completion
    }

    /// Mode of the most recent request.
    pub fn mode(&self) -> Option<Mode> {
        self.last_request.as_ref().map(|r| r.option)
    }

    pub fn last_request(&self) -> Option<&CompletionRequest> {
        self.last_request.as_ref()
    }

    pub fn latest(&self) -> RequestId {
        self.latest
    }

    /// Failure of the most recent request, if it failed.
    pub fn last_error(&self) -> Option<&AiError> {
        self.last_error.as_ref()
    }

    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }

    pub fn toasts(&self) -> &Toasts {
        &self.toasts
    }

    /// Chats saved so far in this session.
    pub fn history(&self) -> &ChatHistory {
        self.notifier.history()
    }
}
