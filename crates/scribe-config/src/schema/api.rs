use serde::{Deserialize, Serialize};

/// Remote endpoints the palette talks to.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL shared by every endpoint, without trailing slash.
    pub base_url: String,
    /// Streaming completion endpoint path.
    pub completion_path: String,
    /// Chat persistence endpoint path.
    pub save_chat_path: String,
    /// TCP connect timeout in seconds (valid range: 1-300).
    pub connect_timeout_secs: u64,
    /// Whole-request timeout in seconds. Unset means a stalled stream is
    /// waited on until a newer request supersedes it.
    pub request_timeout_secs: Option<u64>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".into(),
            completion_path: "/api/create_chat_stream".into(),
            save_chat_path: "/api/save_chat".into(),
            connect_timeout_secs: 10,
            request_timeout_secs: None,
        }
    }
}

impl ApiConfig {
    pub fn completion_url(&self) -> String {
        join_url(&self.base_url, &self.completion_path)
    }

    pub fn save_chat_url(&self) -> String {
        join_url(&self.base_url, &self.save_chat_path)
    }
}

fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
