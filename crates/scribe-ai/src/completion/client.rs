//! reqwest-backed completion client.

use async_trait::async_trait;
use reqwest::StatusCode;
use scribe_config::schema::ApiConfig;
use tracing::debug;

use crate::streaming::decode_text_stream;
use crate::AiError;

use super::{CompletionClient, CompletionRequest};

/// Completion client for the streaming HTTP endpoint.
pub struct HttpCompletionClient {
    url: String,
    http: reqwest::Client,
}

impl HttpCompletionClient {
    pub fn new(url: impl Into<String>, http: reqwest::Client) -> Self {
        Self {
            url: url.into(),
            http,
        }
    }

    /// Build a client for the configured completion endpoint.
    pub fn from_config(api: &ApiConfig) -> Result<Self, AiError> {
        Ok(Self::new(api.completion_url(), build_http_client(api)?))
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

/// HTTP client honoring the configured timeouts. No whole-request timeout
/// is applied unless one is configured.
pub(crate) fn build_http_client(api: &ApiConfig) -> Result<reqwest::Client, AiError> {
    let mut builder = reqwest::Client::builder()
        .connect_timeout(std::time::Duration::from_secs(api.connect_timeout_secs));
    if let Some(secs) = api.request_timeout_secs {
        builder = builder.timeout(std::time::Duration::from_secs(secs));
    }
    builder
        .build()
        .map_err(|e| AiError::NetworkError(format!("failed to build HTTP client: {e}")))
}

/// Map a completion response status to the failure it represents.
///
/// 204 and 205 responses never carry a body, so there is no stream to read.
pub(crate) fn check_status(status: StatusCode) -> Result<(), AiError> {
    if status == StatusCode::TOO_MANY_REQUESTS {
        return Err(AiError::RateLimited);
    }
    if status == StatusCode::NO_CONTENT || status == StatusCode::RESET_CONTENT {
        return Err(AiError::StreamUnavailable);
    }
    if !status.is_success() {
        return Err(AiError::ServerError {
            status: status.as_u16(),
        });
    }
    Ok(())
}

#[async_trait]
impl CompletionClient for HttpCompletionClient {
    async fn stream_completion(
        &self,
        request: &CompletionRequest,
        on_chunk: Box<dyn Fn(String) + Send + Sync>,
    ) -> Result<String, AiError> {
        debug!(url = %self.url, option = %request.option, "completion request");

        let response = self
            .http
            .post(&self.url)
            .json(request)
            .send()
            .await
            .map_err(|e| AiError::NetworkError(e.to_string()))?;

        check_status(response.status())?;

        let output =
            decode_text_stream(response.bytes_stream(), |fresh| on_chunk(fresh.to_string()))
                .await?;

        debug!(chars = output.chars().count(), "completion stream drained");
        Ok(output)
    }
}
