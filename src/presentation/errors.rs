//! Mapping of application errors to HTTP responses

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use mdforge_core::domain::ProjectInfoError;
use mdforge_llm::GenerationError;
use mdforge_store::StoreError;

use crate::presentation::models::ErrorResponse;

pub const MISSING_FIELDS: &str = "Missing required fields: templateContent or projectInfo";
pub const INVALID_PROJECT_INFO: &str = "Invalid project information";
pub const GENERATION_FAILED: &str = "Failed to generate content";

#[derive(Debug)]
pub enum ApiError {
    MissingFields,
    InvalidProjectInfo(String),
    Generation(GenerationError),
    Store(StoreError),
    BadRequest(String),
    Internal(String),
}

impl From<ProjectInfoError> for ApiError {
    fn from(err: ProjectInfoError) -> Self {
        ApiError::InvalidProjectInfo(err.to_string())
    }
}

impl From<GenerationError> for ApiError {
    fn from(err: GenerationError) -> Self {
        ApiError::Generation(err)
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        ApiError::Store(err)
    }
}

fn body(error: &str, message: Option<String>) -> ErrorResponse {
    ErrorResponse {
        error: error.to_string(),
        message,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, response) = match self {
            ApiError::MissingFields => (StatusCode::BAD_REQUEST, body(MISSING_FIELDS, None)),
            ApiError::InvalidProjectInfo(message) => (
                StatusCode::BAD_REQUEST,
                body(INVALID_PROJECT_INFO, Some(message)),
            ),
            ApiError::Generation(GenerationError::Cancelled) => (
                StatusCode::SERVICE_UNAVAILABLE,
                body(GENERATION_FAILED, Some(GenerationError::Cancelled.to_string())),
            ),
            ApiError::Generation(err) => (
                StatusCode::BAD_GATEWAY,
                body(GENERATION_FAILED, Some(err.to_string())),
            ),
            ApiError::Store(StoreError::NotFound(id)) => (
                StatusCode::NOT_FOUND,
                body("Document not found", Some(id.to_string())),
            ),
            ApiError::Store(StoreError::InvalidOrder(message)) => (
                StatusCode::BAD_REQUEST,
                body("Invalid document order", Some(message)),
            ),
            ApiError::Store(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                body("Document store error", Some(err.to_string())),
            ),
            ApiError::BadRequest(message) => (
                StatusCode::BAD_REQUEST,
                body("Invalid request body", Some(message)),
            ),
            ApiError::Internal(message) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                body(GENERATION_FAILED, Some(message)),
            ),
        };

        if status.is_server_error() {
            tracing::error!(
                http_status = %status,
                error = %response.error,
                message = response.message.as_deref().unwrap_or_default(),
                "Request failed"
            );
        } else {
            tracing::debug!(http_status = %status, error = %response.error, "Request rejected");
        }

        (status, Json(response)).into_response()
    }
}
