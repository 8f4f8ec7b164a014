//! JSON-file backed document repository
//!
//! Keeps the list in memory and rewrites the whole file after every
//! mutation. Writes go to a sibling temp file that is then renamed over the
//! target, so a crash never leaves a half-written list behind. A failed
//! write rolls the in-memory list back, so memory never runs ahead of disk.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use mdforge_core::domain::Document;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::domain::{DocumentRepository, StoreError};
use crate::infrastructure::memory::InMemoryDocumentRepository;

pub struct JsonFileDocumentRepository {
    path: PathBuf,
    documents: InMemoryDocumentRepository,
    /// Held across mutate-and-write so a rollback never undoes another caller's change
    write_lock: Mutex<()>,
}

impl JsonFileDocumentRepository {
    /// Open the store at `path`, loading existing documents if the file exists.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();

        let documents = match tokio::fs::read_to_string(&path).await {
            Ok(raw) if raw.trim().is_empty() => Vec::new(),
            Ok(raw) => serde_json::from_str::<Vec<Document>>(&raw)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "Document file does not exist, starting empty");
                Vec::new()
            }
            Err(e) => return Err(e.into()),
        };

        info!(
            path = %path.display(),
            document_count = documents.len(),
            "Loaded documents from file"
        );

        Ok(Self {
            path,
            documents: InMemoryDocumentRepository::with_documents(documents),
            write_lock: Mutex::new(()),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write `snapshot` to disk; on failure put `previous` back in memory.
    ///
    /// Callers hold `write_lock` from before the mutation until this returns.
    async fn commit(&self, previous: Vec<Document>) -> Result<(), StoreError> {
        let snapshot = self.documents.snapshot().await;
        if let Err(e) = self.write_file(&snapshot).await {
            warn!(path = %self.path.display(), error = %e, "Failed to persist documents, rolling back");
            self.documents.restore(previous).await;
            return Err(e);
        }
        debug!(path = %self.path.display(), document_count = snapshot.len(), "Persisted documents");
        Ok(())
    }

    async fn write_file(&self, documents: &[Document]) -> Result<(), StoreError> {
        let json = serde_json::to_vec_pretty(documents)?;

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent).await?;
        }

        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        tokio::fs::write(&tmp, &json).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}

#[async_trait]
impl DocumentRepository for JsonFileDocumentRepository {
    async fn list(&self) -> Result<Vec<Document>, StoreError> {
        self.documents.list().await
    }

    async fn get(&self, id: Uuid) -> Result<Document, StoreError> {
        self.documents.get(id).await
    }

    async fn create(&self, title: &str, content: &str) -> Result<Document, StoreError> {
        let _guard = self.write_lock.lock().await;
        let previous = self.documents.snapshot().await;
        let document = self.documents.create(title, content).await?;
        self.commit(previous).await?;
        Ok(document)
    }

    async fn update(
        &self,
        id: Uuid,
        content: &str,
        title: Option<&str>,
    ) -> Result<Document, StoreError> {
        let _guard = self.write_lock.lock().await;
        let previous = self.documents.snapshot().await;
        let document = self.documents.update(id, content, title).await?;
        self.commit(previous).await?;
        Ok(document)
    }

    async fn rename(&self, id: Uuid, title: &str) -> Result<Document, StoreError> {
        let _guard = self.write_lock.lock().await;
        let previous = self.documents.snapshot().await;
        let document = self.documents.rename(id, title).await?;
        self.commit(previous).await?;
        Ok(document)
    }

    async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;
        let previous = self.documents.snapshot().await;
        self.documents.delete(id).await?;
        self.commit(previous).await
    }

    async fn reorder(&self, ids: &[Uuid]) -> Result<Vec<Document>, StoreError> {
        let _guard = self.write_lock.lock().await;
        let previous = self.documents.snapshot().await;
        let documents = self.documents.reorder(ids).await?;
        self.commit(previous).await?;
        Ok(documents)
    }
}
