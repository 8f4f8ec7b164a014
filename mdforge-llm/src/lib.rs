//! mdforge LLM - README generation pipeline
//!
//! Builds a constrained prompt from [`ProjectInfo`](mdforge_core::domain::ProjectInfo),
//! asks a primary inference provider, falls back to a secondary one when the
//! answer is unusable, and cleans the accepted text into insertable Markdown.

pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::use_cases::{GenerateReadmeUseCase, GenerationError};
pub use domain::*;
pub use infrastructure::prompts;
pub use infrastructure::providers::{ChatInferenceProvider, TextInferenceProvider};
pub use infrastructure::registry::ProviderRegistry;
pub use infrastructure::sanitizer::MarkdownSanitizer;
pub use infrastructure::validator::ResponseValidator;
