pub mod errors;
pub mod repository;

pub use errors::StoreError;
pub use repository::DocumentRepository;
