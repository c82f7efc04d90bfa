//! Module for the single round trip against the chat-completion endpoint.

use tracing::debug;

use crate::config::Config;
use crate::error::{Error, upstream_error};
use crate::protocol::{ChatRequest, ChatResponse};

/// Client for one completion request against an OpenAI-compatible endpoint.
///
/// No timeout is configured; an unresponsive endpoint blocks the run. Callers
/// needing bounded latency wrap the process externally.
pub(crate) struct CompletionClient {
    http: reqwest::Client,
    url: String,
    api_key: String,
}

impl CompletionClient {
    pub(crate) fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            url: config.completions_url(),
            api_key: config.api_key().to_string(),
        }
    }

    /// Submits the request and returns the first completion's message content.
    ///
    /// A non-success status is reported together with a truncated copy of the
    /// error body; a success reply without message content is an error too.
    pub(crate) async fn complete(&self, request: &ChatRequest) -> Result<String, Error> {
        debug!(url = %self.url, "submitting completion request");

        let response = self
            .http
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(upstream_error(status.as_u16(), body));
        }

        let completion = response.json::<ChatResponse>().await?;
        completion.into_content().ok_or(Error::EmptyCompletion)
    }
}
