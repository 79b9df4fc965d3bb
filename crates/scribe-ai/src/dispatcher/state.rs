use scribe_common::RequestId;

use crate::router::RouteOutcome;
use crate::AiError;

/// Where the dispatcher is in its request lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DispatchState {
    #[default]
    Idle,
    /// Waiting on the request with this id.
    Pending(RequestId),
    /// A finished completion is on display.
    Completed,
}

/// Result of applying one stream message.
#[derive(Debug, Clone, PartialEq)]
pub enum DispatchEvent {
    /// The message belonged to a superseded request.
    Ignored(RequestId),
    /// More text arrived for the live request.
    Progress,
    /// The stream finished and its text was routed into the document.
    Completed(RouteOutcome),
    /// The stream finished but routing failed; the document is untouched.
    RouteFailed(AiError),
    /// The request failed; the dispatcher is back to idle.
    Failed(AiError),
}

impl DispatchEvent {
    /// Whether this event ends the request it belongs to.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            DispatchEvent::Completed(_) | DispatchEvent::RouteFailed(_) | DispatchEvent::Failed(_)
        )
    }
}
