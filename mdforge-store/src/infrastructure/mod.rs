pub mod json_file;
pub mod memory;
pub mod templates;

pub use json_file::JsonFileDocumentRepository;
pub use memory::InMemoryDocumentRepository;
pub use templates::TemplateCatalog;
