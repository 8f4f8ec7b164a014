//! API request and response models

use mdforge_core::domain::ProjectInfo;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

/// Body of a generation request
///
/// Fields are optional at the wire level so a missing one can be reported
/// with a precise message instead of a generic deserialization failure.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AiServiceRequest {
    /// Markdown of the selected template
    pub template_content: Option<String>,

    /// Project or profile metadata
    #[schema(value_type = Option<ProjectInfo>)]
    pub project_info: Option<serde_json::Value>,
}

/// Successful generation
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AiServiceResponse {
    /// Cleaned Markdown document
    pub content: String,
    #[schema(example = "success")]
    pub status: String,
    #[schema(example = "text/markdown")]
    pub content_type: String,
}

impl AiServiceResponse {
    pub fn markdown(content: String) -> Self {
        Self {
            content,
            status: "success".to_string(),
            content_type: "text/markdown".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct CreateDocumentRequest {
    /// Defaults to "Untitled Document"
    pub title: Option<String>,
    pub content: Option<String>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateDocumentRequest {
    pub content: String,
    /// Kept unchanged when absent or blank
    pub title: Option<String>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct RenameDocumentRequest {
    pub title: String,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ReorderDocumentsRequest {
    /// Every current document id, in the new order
    pub ids: Vec<Uuid>,
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ExportQuery {
    /// Download file name (default `README.md`)
    pub filename: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TemplateQuery {
    /// Restrict the listing to one category, e.g. `project` or `profile`
    pub category: Option<String>,
}

/// Error body
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "Failed to generate content")]
    pub error: String,

    /// Detail, when there is more to say than the summary
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "healthy")]
    pub status: String,
    #[schema(example = "0.3.0")]
    pub version: String,
    pub uptime_seconds: u64,
}
