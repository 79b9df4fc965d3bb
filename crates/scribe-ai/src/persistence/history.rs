//! In-memory list of chats the store has confirmed.

use std::sync::{Arc, Mutex, MutexGuard};

use serde_json::Value;

/// Chat records saved during this session, as returned by the store.
#[derive(Debug, Clone, Default)]
pub struct ChatHistory {
    chats: Arc<Mutex<Vec<Value>>>,
}

impl ChatHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, chat: Value) {
        self.lock().push(chat);
    }

    pub fn chats(&self) -> Vec<Value> {
        self.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Value>> {
        self.chats.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
