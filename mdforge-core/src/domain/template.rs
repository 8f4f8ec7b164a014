//! README templates offered by the template catalog

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Template {
    /// Taken from the first line of the file
    pub name: String,
    /// Full Markdown source
    pub content: String,
    /// Name of the directory the template lives in, e.g. `project` or `profile`
    pub category: String,
    pub description: String,
}

impl Template {
    /// Build a template from a Markdown file's contents.
    ///
    /// The name is the first line without its `#` marker; the description is
    /// the second paragraph, likewise stripped.
    pub fn from_markdown(category: impl Into<String>, content: impl Into<String>) -> Self {
        let content = content.into();
        let name = content
            .lines()
            .next()
            .unwrap_or_default()
            .replacen('#', "", 1)
            .trim()
            .to_string();
        let description = content
            .split("\n\n")
            .nth(1)
            .map(|paragraph| paragraph.replacen('#', "", 1).trim().to_string())
            .unwrap_or_default();

        Self {
            name,
            content,
            category: category.into(),
            description,
        }
    }
}
