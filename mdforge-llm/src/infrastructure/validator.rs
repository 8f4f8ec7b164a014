//! Usability heuristic for provider answers

use mdforge_core::config::ResponseQualityConfig;

use crate::domain::ProviderResult;

/// Decides whether a provider answer is usable without looking at its meaning.
///
/// An answer is rejected when it carries an error, is shorter than the
/// minimum length, or contains a run of `-` long enough to look like
/// separator filler.
#[derive(Debug, Clone)]
pub struct ResponseValidator {
    min_content_length: usize,
    separator_run: String,
}

impl Default for ResponseValidator {
    fn default() -> Self {
        Self::from(&ResponseQualityConfig::default())
    }
}

impl From<&ResponseQualityConfig> for ResponseValidator {
    fn from(config: &ResponseQualityConfig) -> Self {
        Self::new(config.min_content_length, config.separator_run_length)
    }
}

impl ResponseValidator {
    pub fn new(min_content_length: usize, separator_run_length: usize) -> Self {
        Self {
            min_content_length,
            separator_run: "-".repeat(separator_run_length.max(1)),
        }
    }

    pub fn is_usable(&self, result: &ProviderResult) -> bool {
        if result.error.is_some() || result.content.is_empty() {
            return false;
        }
        if result.content.chars().count() < self.min_content_length {
            return false;
        }
        !result.content.contains(&self.separator_run)
    }
}
