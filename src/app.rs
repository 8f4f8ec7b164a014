//! Application setup and wiring

use std::sync::Arc;
use std::time::Instant;

use axum::Router;
use mdforge_core::Config;
use mdforge_core::config::{DocumentBackend, DocumentsConfig, LlmConfig};
use mdforge_llm::{GenerateReadmeUseCase, LlmError, ProviderRegistry, ResponseValidator};
use mdforge_store::{
    DocumentRepository, InMemoryDocumentRepository, JsonFileDocumentRepository, StoreError,
    TemplateCatalog,
};
use tokio_util::sync::CancellationToken;

use crate::presentation::{AppState, create_router};

/// Handle returned from create_app for graceful shutdown coordination
pub struct AppHandle {
    pub router: Router,
    pub shutdown_token: CancellationToken,
}

/// Build the README pipeline from the LLM configuration
pub fn build_generation_use_case(config: &LlmConfig) -> Result<GenerateReadmeUseCase, LlmError> {
    let registry = ProviderRegistry::from_llm_config(config)?;
    Ok(GenerateReadmeUseCase::from_registry(
        registry,
        ResponseValidator::from(&config.quality),
        config.attempt_timeout(),
    ))
}

/// Open the configured document store
pub async fn open_document_repository(
    config: &DocumentsConfig,
) -> Result<Arc<dyn DocumentRepository>, StoreError> {
    let repository: Arc<dyn DocumentRepository> = match config.backend {
        DocumentBackend::Memory => {
            tracing::info!("Using in-memory document store");
            Arc::new(InMemoryDocumentRepository::new())
        }
        DocumentBackend::File => {
            tracing::info!(path = %config.path.display(), "Using JSON file document store");
            Arc::new(JsonFileDocumentRepository::open(&config.path).await?)
        }
    };
    Ok(repository)
}

/// Create the application router and return an AppHandle for shutdown coordination
pub async fn create_app(
    config: Config,
) -> Result<AppHandle, Box<dyn std::error::Error + Send + Sync>> {
    let started_at = Instant::now();
    let shutdown_token = CancellationToken::new();

    let generate_readme_use_case = Arc::new(build_generation_use_case(&config.llm)?);
    let documents = open_document_repository(&config.documents).await?;
    let templates = Arc::new(TemplateCatalog::load(&config.templates.directory)?);

    let app_state = AppState {
        generate_readme_use_case,
        documents,
        templates,
        shutdown_token: shutdown_token.clone(),
        started_at,
    };

    let router = create_router(app_state, &config);
    tracing::info!(
        startup_ms = started_at.elapsed().as_millis(),
        "Application initialized"
    );

    Ok(AppHandle {
        router,
        shutdown_token,
    })
}
