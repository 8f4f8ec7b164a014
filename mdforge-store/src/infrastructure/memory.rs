//! In-memory document repository

use std::collections::HashSet;

use async_trait::async_trait;
use mdforge_core::domain::Document;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::domain::{DocumentRepository, StoreError};

/// Documents held in a vector, in display order
#[derive(Debug, Default)]
pub struct InMemoryDocumentRepository {
    documents: RwLock<Vec<Document>>,
}

impl InMemoryDocumentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_documents(documents: Vec<Document>) -> Self {
        Self {
            documents: RwLock::new(documents),
        }
    }

    /// Copy of the current list
    pub async fn snapshot(&self) -> Vec<Document> {
        self.documents.read().await.clone()
    }

    /// Replace the whole list, e.g. with an earlier snapshot
    pub async fn restore(&self, documents: Vec<Document>) {
        *self.documents.write().await = documents;
    }
}

fn find_mut(documents: &mut [Document], id: Uuid) -> Result<&mut Document, StoreError> {
    documents
        .iter_mut()
        .find(|doc| doc.id == id)
        .ok_or(StoreError::NotFound(id))
}

fn check_permutation(current: &[Document], ids: &[Uuid]) -> Result<(), StoreError> {
    if ids.len() != current.len() {
        return Err(StoreError::InvalidOrder(format!(
            "expected {} ids, got {}",
            current.len(),
            ids.len()
        )));
    }
    let wanted: HashSet<Uuid> = ids.iter().copied().collect();
    if wanted.len() != ids.len() {
        return Err(StoreError::InvalidOrder("duplicate ids".to_string()));
    }
    if let Some(missing) = current.iter().find(|doc| !wanted.contains(&doc.id)) {
        return Err(StoreError::InvalidOrder(format!("missing id {}", missing.id)));
    }
    Ok(())
}

#[async_trait]
impl DocumentRepository for InMemoryDocumentRepository {
    async fn list(&self) -> Result<Vec<Document>, StoreError> {
        Ok(self.snapshot().await)
    }

    async fn get(&self, id: Uuid) -> Result<Document, StoreError> {
        self.documents
            .read()
            .await
            .iter()
            .find(|doc| doc.id == id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    async fn create(&self, title: &str, content: &str) -> Result<Document, StoreError> {
        let document = Document::new(title, content);
        debug!(id = %document.id, title = %document.title, "Creating document");
        self.documents.write().await.push(document.clone());
        Ok(document)
    }

    async fn update(
        &self,
        id: Uuid,
        content: &str,
        title: Option<&str>,
    ) -> Result<Document, StoreError> {
        let mut documents = self.documents.write().await;
        let document = find_mut(&mut documents, id)?;
        document.apply_update(content, title);
        Ok(document.clone())
    }

    async fn rename(&self, id: Uuid, title: &str) -> Result<Document, StoreError> {
        let mut documents = self.documents.write().await;
        let document = find_mut(&mut documents, id)?;
        document.rename(title);
        Ok(document.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        let mut documents = self.documents.write().await;
        let before = documents.len();
        documents.retain(|doc| doc.id != id);
        if documents.len() == before {
            return Err(StoreError::NotFound(id));
        }
        debug!(id = %id, "Deleted document");
        Ok(())
    }

    async fn reorder(&self, ids: &[Uuid]) -> Result<Vec<Document>, StoreError> {
        let mut documents = self.documents.write().await;
        check_permutation(&documents, ids)?;

        let mut remaining = std::mem::take(&mut *documents);
        for id in ids {
            if let Some(pos) = remaining.iter().position(|doc| doc.id == *id) {
                documents.push(remaining.swap_remove(pos));
            }
        }
        Ok(documents.clone())
    }
}
