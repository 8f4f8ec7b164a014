//! README template catalog loaded from disk
//!
//! Layout: `{directory}/{category}/{template}.md`. Files deeper than one
//! category level and files without an `.md` extension are ignored.

use std::path::Path;

use mdforge_core::domain::Template;
use tracing::{info, warn};
use walkdir::WalkDir;

use crate::domain::StoreError;

#[derive(Debug, Clone, Default)]
pub struct TemplateCatalog {
    templates: Vec<Template>,
}

impl TemplateCatalog {
    pub fn new(templates: Vec<Template>) -> Self {
        let mut catalog = Self { templates };
        catalog.sort();
        catalog
    }

    /// Load every template under `directory`. A missing directory is an error.
    pub fn load(directory: impl AsRef<Path>) -> Result<Self, StoreError> {
        let directory = directory.as_ref();
        if !directory.is_dir() {
            return Err(StoreError::MissingDirectory(directory.to_path_buf()));
        }

        let mut templates = Vec::new();
        for entry in WalkDir::new(directory)
            .min_depth(2)
            .max_depth(2)
            .follow_links(true)
        {
            let entry = entry.map_err(std::io::Error::from)?;
            let path = entry.path();
            if !entry.file_type().is_file() || !is_markdown(path) {
                continue;
            }

            let Some(category) = category_of(path) else {
                warn!(path = %path.display(), "Skipping template without a category directory");
                continue;
            };

            let content = std::fs::read_to_string(path)?;
            templates.push(Template::from_markdown(category, content));
        }

        info!(
            directory = %directory.display(),
            template_count = templates.len(),
            "Loaded README templates"
        );

        Ok(Self::new(templates))
    }

    /// Templates sorted by category then name, optionally for one category
    pub fn list(&self, category: Option<&str>) -> Vec<Template> {
        self.templates
            .iter()
            .filter(|t| category.is_none_or(|c| t.category.eq_ignore_ascii_case(c)))
            .cloned()
            .collect()
    }

    pub fn categories(&self) -> Vec<String> {
        let mut categories: Vec<String> =
            self.templates.iter().map(|t| t.category.clone()).collect();
        categories.dedup();
        categories
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    fn sort(&mut self) {
        self.templates
            .sort_by(|a, b| a.category.cmp(&b.category).then_with(|| a.name.cmp(&b.name)));
    }
}

fn is_markdown(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("md"))
}

fn category_of(path: &Path) -> Option<String> {
    path.parent()
        .and_then(Path::file_name)
        .and_then(|name| name.to_str())
        .map(str::to_string)
}
