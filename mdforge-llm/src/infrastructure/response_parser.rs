//! Shared response parsing for inference endpoints
//!
//! The hosted inference API answers with a bare string, a single
//! `{generated_text}` object or an array of them, depending on the model
//! and task. All providers go through [`ResponseParser`].

use crate::domain::{InferenceResponse, LlmError};

pub struct ResponseParser;

impl ResponseParser {
    /// Extract the generated text from a raw response body.
    ///
    /// Strategy order:
    /// 1) Bare JSON string root.
    /// 2) Object with a non-empty `generated_text`.
    /// 3) Array whose first element has a non-empty `generated_text`.
    ///
    /// Malformed JSON is an [`LlmError::InvalidResponse`]; well-formed JSON
    /// matching none of the shapes is an [`LlmError::UnexpectedFormat`].
    pub fn extract_generated_text(provider: &str, body: &str) -> Result<String, LlmError> {
        let value: serde_json::Value = serde_json::from_str(body)?;

        let parsed = match serde_json::from_value::<InferenceResponse>(value) {
            Ok(parsed) => parsed,
            Err(_) => return Err(LlmError::unexpected_format(provider)),
        };

        match parsed {
            InferenceResponse::Text(text) => Ok(text),
            InferenceResponse::Single(single) if !single.generated_text.is_empty() => {
                Ok(single.generated_text)
            }
            InferenceResponse::Batch(batch) => batch
                .into_iter()
                .next()
                .map(|first| first.generated_text)
                .filter(|text| !text.is_empty())
                .ok_or_else(|| LlmError::unexpected_format(provider)),
            InferenceResponse::Single(_) => Err(LlmError::unexpected_format(provider)),
        }
    }
}
