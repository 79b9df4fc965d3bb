use serde::{Deserialize, Serialize};

/// Session scoping for requests and persisted records.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SessionConfig {
    /// Fixed session id. A fresh UUID is generated per run when unset.
    pub session_id: Option<String>,
    /// User id attached to persisted chats.
    pub user_id: Option<String>,
}

/// Command palette behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteConfig {
    /// Characters preceding the cursor sent as context for `continue`
    /// (valid range: 1-100000).
    pub continue_context_chars: usize,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            continue_context_chars: 5000,
        }
    }
}
