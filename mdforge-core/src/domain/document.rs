//! Markdown documents owned by the document store

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

pub const UNTITLED_DOCUMENT: &str = "Untitled Document";

/// A Markdown document in the editor's document list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: Uuid,
    pub title: String,
    /// Markdown source
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Document {
    /// Create a document; a blank title becomes "Untitled Document"
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        let title = title.into();
        let title = if title.trim().is_empty() {
            UNTITLED_DOCUMENT.to_string()
        } else {
            title
        };
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title,
            content: content.into(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace the content, and the title when a non-blank one is given
    pub fn apply_update(&mut self, content: impl Into<String>, title: Option<&str>) {
        self.content = content.into();
        if let Some(title) = title.filter(|t| !t.trim().is_empty()) {
            self.title = title.to_string();
        }
        self.touch();
    }

    pub fn rename(&mut self, title: impl Into<String>) {
        self.title = title.into();
        self.touch();
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
