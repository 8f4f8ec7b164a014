//! Document repository trait

use async_trait::async_trait;
use mdforge_core::domain::Document;
use uuid::Uuid;

use super::errors::StoreError;

/// Ordered collection of the editor's documents
#[async_trait]
pub trait DocumentRepository: Send + Sync {
    /// All documents in display order
    async fn list(&self) -> Result<Vec<Document>, StoreError>;

    async fn get(&self, id: Uuid) -> Result<Document, StoreError>;

    /// Append a new document; a blank title becomes "Untitled Document"
    async fn create(&self, title: &str, content: &str) -> Result<Document, StoreError>;

    /// Replace the content, and the title when a non-blank one is given
    async fn update(
        &self,
        id: Uuid,
        content: &str,
        title: Option<&str>,
    ) -> Result<Document, StoreError>;

    async fn rename(&self, id: Uuid, title: &str) -> Result<Document, StoreError>;

    async fn delete(&self, id: Uuid) -> Result<(), StoreError>;

    /// Reorder documents; `ids` must be a permutation of the current ids
    async fn reorder(&self, ids: &[Uuid]) -> Result<Vec<Document>, StoreError>;
}
