//! Provider Registry
//!
//! Builds the primary and fallback providers from configuration.

use std::sync::Arc;

use mdforge_core::config::{LlmConfig, ProviderEndpointConfig, ProviderFormat};
use tracing::info;

use crate::domain::{GenerationParameters, InferenceProvider, LlmError};
use crate::infrastructure::providers::{ChatInferenceProvider, TextInferenceProvider};

/// The two providers a generation run may use, in order
#[derive(Clone)]
pub struct ProviderRegistry {
    pub primary: Arc<dyn InferenceProvider>,
    pub fallback: Arc<dyn InferenceProvider>,
}

impl ProviderRegistry {
    pub fn new(primary: Arc<dyn InferenceProvider>, fallback: Arc<dyn InferenceProvider>) -> Self {
        Self { primary, fallback }
    }

    /// Build both providers. Fails when no API token is configured.
    pub fn from_llm_config(config: &LlmConfig) -> Result<Self, LlmError> {
        let token = config.resolve_api_token().ok_or_else(|| {
            LlmError::Configuration(
                "No inference API token configured (set MDFORGE__LLM__API_TOKEN or HF_API_TOKEN)"
                    .to_string(),
            )
        })?;

        let parameters = GenerationParameters::from(&config.generation);
        let primary = build_provider(&config.primary, &token, &parameters, config);
        let fallback = build_provider(&config.fallback, &token, &parameters, config);

        info!(
            primary = %primary.info().name,
            fallback = %fallback.info().name,
            "Inference providers configured"
        );

        Ok(Self { primary, fallback })
    }
}

fn build_provider(
    endpoint: &ProviderEndpointConfig,
    token: &str,
    parameters: &GenerationParameters,
    config: &LlmConfig,
) -> Arc<dyn InferenceProvider> {
    // The per-attempt deadline is enforced by the use case; the client timeout
    // only guards against a socket that never closes.
    let client_timeout = config.attempt_timeout_seconds.saturating_mul(2);

    match endpoint.format {
        ProviderFormat::ChatMessages => Arc::new(
            ChatInferenceProvider::new(&endpoint.name, &endpoint.url, token)
                .with_parameters(parameters.clone())
                .with_timeout(client_timeout)
                .with_connect_timeout(config.connect_timeout()),
        ),
        ProviderFormat::TextPrompt => Arc::new(
            TextInferenceProvider::new(&endpoint.name, &endpoint.url, token)
                .with_parameters(parameters.clone())
                .with_timeout(client_timeout)
                .with_connect_timeout(config.connect_timeout()),
        ),
    }
}
