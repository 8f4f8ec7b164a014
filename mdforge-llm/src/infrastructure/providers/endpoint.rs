//! HTTP plumbing shared by the inference providers

use reqwest::{Client, StatusCode};
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, error, warn};

use crate::domain::LlmError;

const DEFAULT_TIMEOUT_SECONDS: u64 = 120;

/// One authenticated inference URL
pub(crate) struct InferenceEndpoint {
    client: Client,
    pub(crate) name: String,
    pub(crate) url: String,
    api_token: String,
    timeout: Duration,
    connect_timeout: Option<Duration>,
}

impl InferenceEndpoint {
    pub(crate) fn new(
        name: impl Into<String>,
        url: impl Into<String>,
        api_token: impl Into<String>,
    ) -> Self {
        let timeout = Duration::from_secs(DEFAULT_TIMEOUT_SECONDS);
        Self {
            client: build_client(timeout, None),
            name: name.into(),
            url: url.into(),
            api_token: api_token.into(),
            timeout,
            connect_timeout: None,
        }
    }

    pub(crate) fn set_timeout(&mut self, timeout: Duration) {
        self.timeout = timeout;
        self.client = build_client(self.timeout, self.connect_timeout);
    }

    pub(crate) fn set_connect_timeout(&mut self, connect_timeout: Duration) {
        self.connect_timeout = Some(connect_timeout);
        self.client = build_client(self.timeout, self.connect_timeout);
    }

    /// POST a JSON body and return the raw response text of a 2xx answer.
    pub(crate) async fn post_json<T: Serialize + ?Sized>(&self, body: &T) -> Result<String, LlmError> {
        debug!(provider = %self.name, url = %self.url, "Sending inference request");

        let response = self
            .client
            .post(&self.url)
            .header("Content-Type", "application/json")
            .header("Authorization", format!("Bearer {}", self.api_token))
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let retry_after = response
                .headers()
                .get(reqwest::header::RETRY_AFTER)
                .and_then(|value| value.to_str().ok())
                .and_then(|value| value.trim().parse::<u64>().ok());
            let text = response.text().await.unwrap_or_default();
            return Err(self.status_error(status, text, retry_after));
        }

        Ok(response.text().await?)
    }

    fn status_error(&self, status: StatusCode, text: String, retry_after: Option<u64>) -> LlmError {
        match status.as_u16() {
            429 => {
                warn!(provider = %self.name, ?retry_after, "Inference API rate limited");
                LlmError::rate_limited(text, retry_after)
            }
            401 | 403 => LlmError::auth(text),
            404 => LlmError::ModelNotFound(self.name.clone()),
            code if code >= 500 => LlmError::ServiceUnavailable(format!("{} {}", status, text)),
            _ => {
                error!(provider = %self.name, status = %status, "Inference API error: {}", text);
                LlmError::InvalidRequest(format!("API error {}: {}", status, text))
            }
        }
    }
}

fn build_client(timeout: Duration, connect_timeout: Option<Duration>) -> Client {
    let mut builder = Client::builder().timeout(timeout);
    if let Some(connect_timeout) = connect_timeout {
        builder = builder.connect_timeout(connect_timeout);
    }
    builder.build().unwrap_or_else(|e| {
        error!(error = %e, "Failed to build HTTP client with custom timeout, using default client");
        Client::new()
    })
}
