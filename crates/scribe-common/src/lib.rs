pub mod errors;
pub mod id;
pub mod notifications;

pub use errors::{ConfigError, ScribeError};
pub use id::{new_id, RequestId, SessionId};
pub use notifications::{Notification, NotificationLevel, NotificationQueue, Toasts};

pub type Result<T> = std::result::Result<T, ScribeError>;
