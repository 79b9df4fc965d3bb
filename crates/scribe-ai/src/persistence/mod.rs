//! Best-effort persistence of finished exchanges.
//!
//! Nothing here can fail the editing flow: writes run in the background and
//! their failures surface as toasts.

mod history;
mod notifier;
mod session;
mod store;

pub use history::ChatHistory;
pub use notifier::{Exchange, PersistenceNotifier};
pub use session::{SessionProvider, StaticSession};
pub use store::{ChatRecord, ChatStore, HttpChatStore};
