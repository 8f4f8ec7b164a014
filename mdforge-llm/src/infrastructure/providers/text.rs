//! Plain-text inference provider
//!
//! Sends `inputs` as one string: the system instruction, a blank line, then
//! the prompt. Used for models without a chat template (Mistral by default).

use async_trait::async_trait;
use std::time::Duration;

use crate::domain::{GenerationParameters, InferenceProvider, InferenceRequest, LlmError, ProviderInfo};
use crate::infrastructure::prompts::PromptBuilder;
use crate::infrastructure::providers::endpoint::InferenceEndpoint;
use crate::infrastructure::response_parser::ResponseParser;

pub struct TextInferenceProvider {
    endpoint: InferenceEndpoint,
    parameters: GenerationParameters,
}

impl TextInferenceProvider {
    pub fn new(
        name: impl Into<String>,
        url: impl Into<String>,
        api_token: impl Into<String>,
    ) -> Self {
        Self {
            endpoint: InferenceEndpoint::new(name, url, api_token),
            parameters: GenerationParameters::default(),
        }
    }

    pub fn with_parameters(mut self, parameters: GenerationParameters) -> Self {
        self.parameters = parameters;
        self
    }

    /// Set request timeout in seconds
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.endpoint.set_timeout(Duration::from_secs(seconds));
        self
    }

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.endpoint.set_connect_timeout(timeout);
        self
    }
}

#[async_trait]
impl InferenceProvider for TextInferenceProvider {
    fn info(&self) -> ProviderInfo {
        ProviderInfo {
            name: self.endpoint.name.clone(),
            endpoint: self.endpoint.url.clone(),
        }
    }

    async fn invoke(&self, prompt: &str) -> Result<String, LlmError> {
        let request = InferenceRequest {
            inputs: PromptBuilder::build_text_input(prompt),
            parameters: self.parameters.clone(),
        };
        let body = self.endpoint.post_json(&request).await?;
        ResponseParser::extract_generated_text(&self.endpoint.name, &body)
    }
}
