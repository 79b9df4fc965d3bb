//! Remote chat store.

use async_trait::async_trait;
use scribe_common::SessionId;
use scribe_config::schema::ApiConfig;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::completion::build_http_client;
use crate::mode::Mode;
use crate::AiError;

/// JSON body POSTed to the save-chat endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRecord {
    pub option: Mode,
    pub command: String,
    pub session_id: SessionId,
    /// The finished completion text.
    #[serde(rename = "collectedMsg")]
    pub collected_msg: String,
    pub prompt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

#[async_trait]
pub trait ChatStore: Send + Sync {
    /// Write one exchange. Returns the saved chat as reported by the store.
    async fn save_chat(&self, record: &ChatRecord) -> Result<Value, AiError>;
}

pub struct HttpChatStore {
    url: String,
    http: reqwest::Client,
}

impl HttpChatStore {
    pub fn new(url: impl Into<String>, http: reqwest::Client) -> Self {
        Self {
            url: url.into(),
            http,
        }
    }

    pub fn from_config(api: &ApiConfig) -> Result<Self, AiError> {
        Ok(Self::new(api.save_chat_url(), build_http_client(api)?))
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl ChatStore for HttpChatStore {
    async fn save_chat(&self, record: &ChatRecord) -> Result<Value, AiError> {
        debug!(url = %self.url, option = %record.option, "saving chat");

        let response = self
            .http
            .post(&self.url)
            .json(record)
            .send()
            .await
            .map_err(|e| AiError::Persistence(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let text = text.chars().take(200).collect::<String>();
            return Err(AiError::Persistence(format!("HTTP {status}: {text}")));
        }

        let mut body: Value = response
            .json()
            .await
            .map_err(|e| AiError::Persistence(format!("invalid response body: {e}")))?;

        match body.get_mut("user").map(Value::take) {
            Some(chat) if !chat.is_null() => Ok(chat),
            _ => Err(AiError::Persistence(
                "response is missing the saved chat".into(),
            )),
        }
    }
}
