//! Request lifecycle: dispatch, message application, and discard.

use scribe_common::RequestId;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::completion::{CompletionRequest, StreamMessage};
use crate::document::{Document, Selection};
use crate::mode::Mode;
use crate::persistence::Exchange;
use crate::router;
use crate::AiError;

use super::{DispatchEvent, DispatchState, Dispatcher};

impl Dispatcher {
    /// Start a new request, superseding any in flight.
    ///
    /// The completion buffer is reset and the previous request, if still
    /// running, is cancelled; its remaining messages will be ignored.
    pub fn dispatch(
        &mut self,
        mode: Mode,
        command: impl Into<String>,
        prompt: impl Into<String>,
    ) -> RequestId {
        if let Some(previous) = self.cancel.take() {
            previous.cancel();
        }

        let request = CompletionRequest {
            prompt: prompt.into(),
            option: mode,
            command: command.into(),
            session_id: self.session_id.clone(),
        };

        self.latest = self.latest.next();
        let id = self.latest;
        let cancel = CancellationToken::new();

        info!(request = %id, option = %mode, "dispatching completion");
        self.service.spawn_stream(request.clone(), id, cancel.clone());

        self.cancel = Some(cancel);
        self.last_request = Some(request);
        self.completion.clear();
        self.last_error = None;
        self.state = DispatchState::Pending(id);
        id
    }

    /// Refine the displayed completion with a follow-up instruction.
    ///
    /// The completion becomes the new command and the original mode is
    /// kept. Returns `None` unless a completion is on display.
    pub fn follow_up(&mut self, instruction: impl Into<String>) -> Option<RequestId> {
        if self.state != DispatchState::Completed {
            debug!(state = ?self.state, "follow-up ignored: no completion displayed");
            return None;
        }
        let mode = self.mode()?;
        let command = std::mem::take(&mut self.completion);
        Some(self.dispatch(mode, command, instruction))
    }

    /// Apply one message from the completion service.
    pub fn apply(
        &mut self,
        message: StreamMessage,
        id: RequestId,
        doc: &mut dyn Document,
    ) -> DispatchEvent {
        if self.state != DispatchState::Pending(id) {
            debug!(request = %id, latest = %self.latest, "dropping stale message");
            return DispatchEvent::Ignored(id);
        }

        match message {
            StreamMessage::Chunk(text) => {
                self.completion.push_str(&text);
                DispatchEvent::Progress
            }
            StreamMessage::Done(output) => {
                self.cancel = None;
                self.completion = output;
                self.state = DispatchState::Completed;
                info!(request = %id, chars = self.completion.chars().count(), "completion finished");

                match router::route(self.mode(), &self.completion, doc) {
                    Ok(outcome) => {
                        self.persist();
                        DispatchEvent::Completed(outcome)
                    }
                    Err(e) => {
                        self.toasts.error(e.user_message());
                        self.last_error = Some(e.clone());
                        DispatchEvent::RouteFailed(e)
                    }
                }
            }
            StreamMessage::Failed(e) => {
                self.cancel = None;
                self.completion.clear();
                self.state = DispatchState::Idle;
                warn!(request = %id, error = %e, "completion failed");

                if e != AiError::Cancelled {
                    self.toasts.error(e.user_message());
                }
                self.last_error = Some(e.clone());
                DispatchEvent::Failed(e)
            }
        }
    }

    /// Wait for the next message from any request.
    pub async fn next_message(&mut self) -> Option<(StreamMessage, RequestId)> {
        self.rx.recv().await
    }

    /// Apply messages until the current request settles.
    ///
    /// Returns the terminal event, or `None` if nothing was pending.
    pub async fn run_until_settled(&mut self, doc: &mut dyn Document) -> Option<DispatchEvent> {
        while self.is_loading() {
            let (message, id) = self.next_message().await?;
            let event = self.apply(message, id, doc);
            if event.is_terminal() {
                return Some(event);
            }
        }
        None
    }

    /// Throw away the current completion and return to idle.
    ///
    /// A request still in flight is cancelled. The AI highlight is removed
    /// and the selection collapses to its end.
    pub fn discard(&mut self, doc: &mut dyn Document) {
        if let Some(cancel) = self.cancel.take() {
            cancel.cancel();
        }
        doc.set_highlight(false);
        let selection = doc.selection();
        doc.set_selection(Selection::caret(selection.to));

        self.completion.clear();
        self.state = DispatchState::Idle;
        info!("completion discarded");
    }

    /// Wait for every persistence write started so far.
    pub async fn flush_persistence(&mut self) {
        for handle in self.persisting.drain(..) {
            if let Err(e) = handle.await {
                warn!(error = %e, "persistence task panicked");
            }
        }
    }

    /// Record the finished exchange when command, session, and output are
    /// all present. Runs in the background.
    fn persist(&mut self) {
        let Some(request) = &self.last_request else {
            return;
        };
        if request.prompt.trim().is_empty()
            || self.session_id.is_empty()
            || self.completion.is_empty()
        {
            debug!("skipping persistence: exchange incomplete");
            return;
        }

        let exchange = Exchange {
            mode: request.option,
            command: request.prompt.clone(),
            session_id: self.session_id.clone(),
            output: self.completion.clone(),
        };
        self.persisting.retain(|handle| !handle.is_finished());
        self.persisting.push(self.notifier.notify(exchange));
    }
}
