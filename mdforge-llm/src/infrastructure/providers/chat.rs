//! Chat-format inference provider
//!
//! Sends `inputs` as a system + user message array, each message carrying
//! a single text content block. Used for instruction-tuned chat models
//! (Gemma by default).

use async_trait::async_trait;
use std::time::Duration;

use crate::domain::{
    ChatMessage, GenerationParameters, InferenceProvider, InferenceRequest, LlmError, ProviderInfo,
};
use crate::infrastructure::prompts::README_SYSTEM_PROMPT;
use crate::infrastructure::providers::endpoint::InferenceEndpoint;
use crate::infrastructure::response_parser::ResponseParser;

pub struct ChatInferenceProvider {
    endpoint: InferenceEndpoint,
    system_prompt: String,
    parameters: GenerationParameters,
}

impl ChatInferenceProvider {
    pub fn new(
        name: impl Into<String>,
        url: impl Into<String>,
        api_token: impl Into<String>,
    ) -> Self {
        Self {
            endpoint: InferenceEndpoint::new(name, url, api_token),
            system_prompt: README_SYSTEM_PROMPT.to_string(),
            parameters: GenerationParameters::default(),
        }
    }

    pub fn with_parameters(mut self, parameters: GenerationParameters) -> Self {
        self.parameters = parameters;
        self
    }

    pub fn with_system_prompt(mut self, system_prompt: impl Into<String>) -> Self {
        self.system_prompt = system_prompt.into();
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

    fn build_request(&self, prompt: &str) -> InferenceRequest<Vec<ChatMessage>> {
        InferenceRequest {
            inputs: vec![
                ChatMessage::system(self.system_prompt.as_str()),
                ChatMessage::user(prompt),
            ],
            parameters: self.parameters.clone(),
        }
    }
}

#[async_trait]
impl InferenceProvider for ChatInferenceProvider {
    fn info(&self) -> ProviderInfo {
        ProviderInfo {
            name: self.endpoint.name.clone(),
            endpoint: self.endpoint.url.clone(),
        }
    }

    async fn invoke(&self, prompt: &str) -> Result<String, LlmError> {
        let body = self.endpoint.post_json(&self.build_request(prompt)).await?;
        ResponseParser::extract_generated_text(&self.endpoint.name, &body)
    }
}
