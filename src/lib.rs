//! mdforge - Markdown document service with AI-assisted README generation
//!
//! Wires the README pipeline, the document store and the template catalog
//! into an HTTP API and a small command-line front end.

mod app;
pub mod cli;
pub mod presentation;

pub use app::{AppHandle, build_generation_use_case, create_app, open_document_repository};
pub use mdforge_core::{Config, init_tracing};

// Re-export for convenience
pub use mdforge_core;
pub use mdforge_llm;
pub use mdforge_store;
