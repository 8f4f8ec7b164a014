use std::sync::Arc;
use std::time::Duration;

use mdforge_core::domain::GenerationRequest;
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, instrument, warn};

use crate::domain::{InferenceProvider, LlmError, ProviderResult};
use crate::infrastructure::prompts::PromptBuilder;
use crate::infrastructure::registry::ProviderRegistry;
use crate::infrastructure::sanitizer::MarkdownSanitizer;
use crate::infrastructure::validator::ResponseValidator;

/// Why a generation run produced no document
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// The last provider attempt failed at transport or format level
    #[error("Error generating README: {0}")]
    Provider(String),

    /// The last provider answered, but the answer did not pass validation
    #[error("Error: Generated content appears to be invalid. Please try again.")]
    InvalidContent,

    #[error("Generation cancelled")]
    Cancelled,
}

enum Attempt {
    Finished(ProviderResult),
    Cancelled,
}

/// Primary-then-fallback README generation
pub struct GenerateReadmeUseCase {
    primary: Arc<dyn InferenceProvider>,
    fallback: Arc<dyn InferenceProvider>,
    validator: ResponseValidator,
    attempt_timeout: Duration,
}

impl GenerateReadmeUseCase {
    pub fn new(
        primary: Arc<dyn InferenceProvider>,
        fallback: Arc<dyn InferenceProvider>,
        validator: ResponseValidator,
        attempt_timeout: Duration,
    ) -> Self {
        Self {
            primary,
            fallback,
            validator,
            attempt_timeout,
        }
    }

    pub fn from_registry(
        registry: ProviderRegistry,
        validator: ResponseValidator,
        attempt_timeout: Duration,
    ) -> Self {
        Self::new(registry.primary, registry.fallback, validator, attempt_timeout)
    }

    /// Run the pipeline: prompt, primary attempt, at most one fallback
    /// attempt, then clean-up of the accepted answer.
    #[instrument(skip_all, fields(project = %request.project_info.name))]
    pub async fn execute(
        &self,
        request: &GenerationRequest,
        cancel: &CancellationToken,
    ) -> Result<String, GenerationError> {
        let info = &request.project_info;
        debug!(
            template_len = request.template_content.len(),
            mode = ?info.mode(),
            "Building README prompt"
        );
        let prompt = PromptBuilder::build_prompt(info);

        let mut result = match self.attempt(self.primary.as_ref(), &prompt, cancel).await {
            Attempt::Finished(result) => result,
            Attempt::Cancelled => return Err(GenerationError::Cancelled),
        };

        if !self.validator.is_usable(&result) {
            warn!(
                provider = %self.primary.info().name,
                error = result.error.as_deref().unwrap_or("unusable content"),
                "Primary provider failed, trying fallback"
            );
            result = match self.attempt(self.fallback.as_ref(), &prompt, cancel).await {
                Attempt::Finished(result) => result,
                Attempt::Cancelled => return Err(GenerationError::Cancelled),
            };
        }

        if let Some(error) = result.error {
            return Err(GenerationError::Provider(error));
        }
        if !self.validator.is_usable(&result) {
            return Err(GenerationError::InvalidContent);
        }

        let markdown = MarkdownSanitizer::clean(&result.content, &info.name);
        info!(length = markdown.len(), "README generated");
        Ok(markdown)
    }

    /// Same pipeline with failures folded into the returned text.
    pub async fn execute_to_string(
        &self,
        request: &GenerationRequest,
        cancel: &CancellationToken,
    ) -> String {
        match self.execute(request, cancel).await {
            Ok(markdown) => markdown,
            Err(err) => err.to_string(),
        }
    }

    async fn attempt(
        &self,
        provider: &dyn InferenceProvider,
        prompt: &str,
        cancel: &CancellationToken,
    ) -> Attempt {
        let name = provider.info().name;
        debug!(provider = %name, "Invoking inference provider");

        let outcome = tokio::select! {
            biased;
            _ = cancel.cancelled() => return Attempt::Cancelled,
            outcome = tokio::time::timeout(self.attempt_timeout, provider.invoke(prompt)) => outcome,
        };

        let result = outcome.unwrap_or_else(|_| Err(LlmError::timeout(self.attempt_timeout.as_secs())));
        if let Err(err) = &result {
            warn!(
                provider = %name,
                error = %err,
                retryable = err.is_retryable(),
                retry_after = ?err.retry_after(),
                "Inference attempt failed"
            );
        }
        Attempt::Finished(result.into())
    }
}
