use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::{Duration, Instant};

/// Severity level for toast notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Warning,
    Error,
}

/// A transient, non-blocking notification shown to the user.
#[derive(Debug, Clone)]
pub struct Notification {
    pub level: NotificationLevel,
    pub title: String,
    pub body: String,
    pub created_at: Instant,
    pub ttl: Duration,
}

impl Notification {
    /// Creates an info notification with a 5-second TTL.
    pub fn info(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self::with_level(NotificationLevel::Info, title, body, Duration::from_secs(5))
    }

    /// Creates a warning notification with an 8-second TTL.
    pub fn warning(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self::with_level(
            NotificationLevel::Warning,
            title,
            body,
            Duration::from_secs(8),
        )
    }

    /// Creates an error notification with a 10-second TTL.
    pub fn error(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self::with_level(
            NotificationLevel::Error,
            title,
            body,
            Duration::from_secs(10),
        )
    }

    fn with_level(
        level: NotificationLevel,
        title: impl Into<String>,
        body: impl Into<String>,
        ttl: Duration,
    ) -> Self {
        Self {
            level,
            title: title.into(),
            body: body.into(),
            created_at: Instant::now(),
            ttl,
        }
    }

    /// Returns `true` if this notification has exceeded its TTL.
    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= self.ttl
    }
}

/// A bounded queue of notifications that auto-evicts expired entries.
#[derive(Debug)]
pub struct NotificationQueue {
    items: VecDeque<Notification>,
    capacity: usize,
}

impl NotificationQueue {
    /// Creates a new queue with the given maximum capacity.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            items: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Pushes a notification, evicting expired entries first.
    /// If still at capacity after eviction, the oldest entry is removed.
    pub fn push(&mut self, notification: Notification) {
        self.evict_expired();
        if self.items.len() >= self.capacity {
            self.items.pop_front();
        }
        self.items.push_back(notification);
    }

    /// Returns all currently visible (non-expired) notifications.
    pub fn visible(&mut self) -> Vec<&Notification> {
        self.evict_expired();
        self.items.iter().collect()
    }

    /// Returns the number of notifications currently in the queue (including expired).
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn evict_expired(&mut self) {
        self.items.retain(|n| !n.is_expired());
    }
}

impl Default for NotificationQueue {
    fn default() -> Self {
        Self::new(16)
    }
}

/// Shared handle to a [`NotificationQueue`].
///
/// Background tasks (persistence writes) hold a clone and surface their
/// failures here instead of returning them to the editing flow.
#[derive(Debug, Clone, Default)]
pub struct Toasts {
    queue: Arc<Mutex<NotificationQueue>>,
}

impl Toasts {
    pub fn new(capacity: usize) -> Self {
        Self {
            queue: Arc::new(Mutex::new(NotificationQueue::new(capacity))),
        }
    }

    pub fn push(&self, notification: Notification) {
        self.lock().push(notification);
    }

    /// Push an error toast with the given user-facing body.
    pub fn error(&self, body: impl Into<String>) {
        self.push(Notification::error("Error", body));
    }

    /// Snapshot of every visible notification, oldest first.
    pub fn visible(&self) -> Vec<Notification> {
        self.lock().visible().into_iter().cloned().collect()
    }

    /// Bodies of the visible notifications, oldest first.
    pub fn messages(&self) -> Vec<String> {
        self.visible().into_iter().map(|n| n.body).collect()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, NotificationQueue> {
        self.queue.lock().unwrap_or_else(|poisoned| {
            tracing::warn!("notification queue lock poisoned, recovering");
            poisoned.into_inner()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_set_level_and_ttl() {
        let n = Notification::info("t", "b");
        assert_eq!(n.level, NotificationLevel::Info);
        assert_eq!(n.ttl, Duration::from_secs(5));

        let n = Notification::warning("t", "b");
        assert_eq!(n.level, NotificationLevel::Warning);
        assert_eq!(n.ttl, Duration::from_secs(8));

        let n = Notification::error("t", "b");
        assert_eq!(n.level, NotificationLevel::Error);
        assert_eq!(n.ttl, Duration::from_secs(10));
    }

    #[test]
    fn queue_evicts_oldest_at_capacity() {
        let mut q = NotificationQueue::new(2);
        q.push(Notification::info("a", "1"));
        q.push(Notification::info("b", "2"));
        q.push(Notification::info("c", "3"));

        let bodies: Vec<_> = q.visible().iter().map(|n| n.body.clone()).collect();
        assert_eq!(bodies, vec!["2", "3"]);
    }

    #[test]
    fn queue_drops_expired_entries() {
        let mut q = NotificationQueue::new(4);
        let mut stale = Notification::info("old", "gone");
        stale.ttl = Duration::ZERO;
        q.push(stale);
        q.push(Notification::info("new", "kept"));

        let visible = q.visible();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].body, "kept");
    }

    #[test]
    fn zero_capacity_is_clamped() {
        let mut q = NotificationQueue::new(0);
        q.push(Notification::info("a", "1"));
        assert_eq!(q.len(), 1);
    }

    #[test]
    fn toasts_are_shared_between_clones() {
        let toasts = Toasts::new(8);
        let background = toasts.clone();
        background.error("Something went wrong. Please try again.");

        assert_eq!(toasts.len(), 1);
        let visible = toasts.visible();
        assert_eq!(visible[0].level, NotificationLevel::Error);
        assert_eq!(
            toasts.messages(),
            vec!["Something went wrong. Please try again.".to_string()]
        );
    }

    #[test]
    fn empty_toasts() {
        let toasts = Toasts::default();
        assert!(toasts.is_empty());
        assert!(toasts.messages().is_empty());
    }
}
