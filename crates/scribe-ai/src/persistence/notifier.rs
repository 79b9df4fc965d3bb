//! Fire-and-forget recording of finished exchanges.

use std::sync::Arc;

use scribe_common::{SessionId, Toasts};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::mode::Mode;

use super::{ChatHistory, ChatRecord, ChatStore, SessionProvider};

/// A completed exchange, ready to be persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exchange {
    pub mode: Mode,
    pub command: String,
    pub session_id: SessionId,
    pub output: String,
}

#[derive(Clone)]
pub struct PersistenceNotifier {
    store: Arc<dyn ChatStore>,
    session: Arc<dyn SessionProvider>,
    history: ChatHistory,
    toasts: Toasts,
}

impl PersistenceNotifier {
    pub fn new(
        store: Arc<dyn ChatStore>,
        session: Arc<dyn SessionProvider>,
        history: ChatHistory,
        toasts: Toasts,
    ) -> Self {
        Self {
            store,
            session,
            history,
            toasts,
        }
    }

    pub fn history(&self) -> &ChatHistory {
        &self.history
    }

    /// Spawn the write for `exchange` and return immediately.
    ///
    /// A failed write is logged and surfaced as a toast; it never reaches
    /// the caller and is never retried.
    pub fn notify(&self, exchange: Exchange) -> JoinHandle<()> {
        let store = Arc::clone(&self.store);
        let session = Arc::clone(&self.session);
        let history = self.history.clone();
        let toasts = self.toasts.clone();

        tokio::spawn(async move {
            let record = ChatRecord {
                option: exchange.mode,
                prompt: exchange.command.clone(),
                command: exchange.command,
                session_id: exchange.session_id,
                collected_msg: exchange.output,
                user_id: session.user_id().await,
            };

            match store.save_chat(&record).await {
                Ok(chat) => {
                    debug!(option = %record.option, "chat saved");
                    history.push(chat);
                }
                Err(e) => {
                    warn!(error = %e, "failed to save chat");
                    toasts.error(e.user_message());
                }
            }
        })
    }
}
