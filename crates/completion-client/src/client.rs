use planner_core::Config;

use crate::error::CompletionError;
use crate::types::{ChatRequest, ChatResponse, Completion};
use crate::Result;

/// Sends prompts to the configured chat-completion endpoint.
///
/// One POST per call: no retry, no caching. The underlying `reqwest::Client`
/// is cheap to clone and applies the configured request timeout.
#[derive(Clone)]
pub struct CompletionClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl CompletionClient {
    pub fn new(config: &Config) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;
        Ok(Self {
            http,
            endpoint: config.api_url.clone(),
            api_key: config.api_key.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Send `prompt` as a single system message to `model`.
    ///
    /// Network failures, timeouts, non-2xx statuses and non-JSON bodies are
    /// errors. A well-formed body without `choices[0].message.content` is a
    /// successful [`Completion::Missing`].
    pub async fn complete(&self, prompt: &str, model: &str) -> Result<Completion> {
        let body = ChatRequest::system(model, prompt);

        let resp = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?
            .error_for_status()?;

        let bytes = resp.bytes().await?;
        let parsed: ChatResponse =
            serde_json::from_slice(&bytes).map_err(CompletionError::Decode)?;

        let completion = Completion::from(parsed);
        if completion.is_missing() {
            tracing::warn!(model = %model, "completion response has no choices[0].message.content");
        }
        Ok(completion)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
