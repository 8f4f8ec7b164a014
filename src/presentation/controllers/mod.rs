//! API controllers

pub mod documents;
pub mod generation;
pub mod health;
pub mod templates;

use std::sync::Arc;
use std::time::Instant;

use mdforge_llm::GenerateReadmeUseCase;
use mdforge_store::{DocumentRepository, TemplateCatalog};
use tokio_util::sync::CancellationToken;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub generate_readme_use_case: Arc<GenerateReadmeUseCase>,
    pub documents: Arc<dyn DocumentRepository>,
    pub templates: Arc<TemplateCatalog>,
    /// Cancelled on server shutdown; generation runs use child tokens
    pub shutdown_token: CancellationToken,
    pub started_at: Instant,
}
