//! Common test utilities and mock implementations

#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tokio::sync::Mutex;

use mdforge_core::domain::{GenerationRequest, ProjectInfo};
use mdforge_llm::domain::{InferenceProvider, LlmError, ProviderInfo};

/// Mock inference provider returning a fixed answer
pub struct MockProvider {
    pub name: String,
    /// Answer returned from every invoke()
    pub answer: Result<String, LlmError>,
    /// Artificial latency before answering
    pub delay: Option<Duration>,
    pub calls: Arc<AtomicUsize>,
    /// Captured prompts for verification
    pub captured_prompts: Arc<Mutex<Vec<String>>>,
}

impl MockProvider {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            answer: Err(LlmError::Other("No response configured".to_string())),
            delay: None,
            calls: Arc::new(AtomicUsize::new(0)),
            captured_prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.answer = Ok(content.into());
        self
    }

    pub fn with_error(mut self, error: LlmError) -> Self {
        self.answer = Err(error);
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl InferenceProvider for MockProvider {
    fn info(&self) -> ProviderInfo {
        ProviderInfo {
            name: self.name.clone(),
            endpoint: format!("mock://{}", self.name.to_lowercase()),
        }
    }

    async fn invoke(&self, prompt: &str) -> Result<String, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.captured_prompts.lock().await.push(prompt.to_string());

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        self.answer.clone()
    }
}

/// A well-formed README comfortably above the usability threshold
pub fn valid_readme(name: &str) -> String {
    format!(
        "# {name}\n\nA command line tool that turns project metadata into a tidy README.\n\n## Features\n- Fast\n- Offline\n\n## Tech Stack\n- Rust\n"
    )
}

pub fn create_project_request() -> GenerationRequest {
    GenerationRequest::new(
        "# {{name}}\n\n{{description}}",
        ProjectInfo::project("Foo", "A tool")
            .with_features(["Fast"])
            .with_tech_stack(["Rust"]),
    )
}
