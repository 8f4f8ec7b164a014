//! Inference provider trait and related types
//!
//! Every hosted text-generation endpoint implements [`InferenceProvider`].
//! A provider owns its own request and response mapping; callers only see a
//! prompt going in and generated text (or an [`LlmError`]) coming out.

use async_trait::async_trait;

use crate::domain::error::LlmError;

/// Metadata about a provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderInfo {
    /// Short name used in logs and error messages (e.g. "Gemma")
    pub name: String,
    /// Endpoint the provider talks to
    pub endpoint: String,
}

/// Core trait for inference providers
///
/// The trait is object-safe and used through `Arc<dyn InferenceProvider>`.
///
/// # Example
///
/// ```rust,ignore
/// use mdforge_llm::{InferenceProvider, ProviderResult};
///
/// async fn ask(provider: &dyn InferenceProvider, prompt: &str) -> ProviderResult {
///     provider.invoke(prompt).await.into()
/// }
/// ```
#[async_trait]
pub trait InferenceProvider: Send + Sync {
    /// Get provider metadata
    fn info(&self) -> ProviderInfo;

    /// Send one prompt and return the generated text.
    ///
    /// Exactly one network call, no retries.
    async fn invoke(&self, prompt: &str) -> Result<String, LlmError>;
}

/// Outcome of one provider attempt
///
/// Exactly one of `content` (non-empty) or `error` is meaningful. Empty content
/// without an error is still a failed attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProviderResult {
    pub content: String,
    pub error: Option<String>,
}

impl ProviderResult {
    pub fn success(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            content: String::new(),
            error: Some(error.into()),
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

impl From<Result<String, LlmError>> for ProviderResult {
    fn from(result: Result<String, LlmError>) -> Self {
        match result {
            Ok(content) => Self::success(content),
            Err(err) => Self::failure(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_from_ok() {
        let result = ProviderResult::from(Ok("# Title".to_string()));
        assert_eq!(result.content, "# Title");
        assert!(!result.is_error());
    }

    #[test]
    fn test_result_from_err() {
        let result = ProviderResult::from(Err(LlmError::network("connection reset")));
        assert!(result.content.is_empty());
        assert_eq!(result.error.as_deref(), Some("Network error: connection reset"));
    }
}
