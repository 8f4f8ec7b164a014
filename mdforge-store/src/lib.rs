//! mdforge store - documents and templates
//!
//! The editor's document list lives behind [`DocumentRepository`]; two
//! adapters are provided (in-memory and a JSON file). [`TemplateCatalog`]
//! loads the README templates shipped on disk.

pub mod domain;
pub mod infrastructure;

pub use domain::{DocumentRepository, StoreError};
pub use infrastructure::{InMemoryDocumentRepository, JsonFileDocumentRepository, TemplateCatalog};
