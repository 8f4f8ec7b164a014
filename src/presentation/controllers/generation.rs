//! README generation controllers

use axum::{
    extract::{Path, State, rejection::JsonRejection},
    response::Json,
};
use mdforge_core::domain::{Document, GenerationRequest, ProjectInfo};
use uuid::Uuid;

use crate::presentation::controllers::AppState;
use crate::presentation::errors::ApiError;
use crate::presentation::models::{AiServiceRequest, AiServiceResponse, ErrorResponse};

/// Turn the loose wire body into a validated generation request.
pub fn parse_generation_request(body: AiServiceRequest) -> Result<GenerationRequest, ApiError> {
    let template_content = body
        .template_content
        .filter(|content| !content.trim().is_empty())
        .ok_or(ApiError::MissingFields)?;
    let raw_info = body
        .project_info
        .filter(|value| !value.is_null())
        .ok_or(ApiError::MissingFields)?;

    let project_info: ProjectInfo = serde_json::from_value(raw_info)
        .map_err(|e| ApiError::InvalidProjectInfo(e.to_string()))?;
    project_info.validate()?;

    Ok(GenerationRequest::new(template_content, project_info))
}

/// Run the pipeline on its own task so a panicking provider surfaces as a 500.
async fn run_generation(state: &AppState, request: GenerationRequest) -> Result<String, ApiError> {
    let use_case = state.generate_readme_use_case.clone();
    let cancel = state.shutdown_token.child_token();

    let markdown = tokio::spawn(async move { use_case.execute(&request, &cancel).await })
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))??;
    Ok(markdown)
}

/// POST /api/ai-service - Generate a README
#[utoipa::path(
    post,
    path = "/api/ai-service",
    request_body = AiServiceRequest,
    responses(
        (status = 200, description = "README generated", body = AiServiceResponse),
        (status = 400, description = "Missing fields or invalid project information", body = ErrorResponse),
        (status = 502, description = "Both inference providers failed", body = ErrorResponse),
        (status = 503, description = "Server is shutting down", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "generation"
)]
pub async fn generate_readme(
    State(state): State<AppState>,
    body: Result<Json<AiServiceRequest>, JsonRejection>,
) -> Result<Json<AiServiceResponse>, ApiError> {
    let Json(body) = body.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let request = parse_generation_request(body)?;

    tracing::info!(
        project = %request.project_info.name,
        mode = ?request.project_info.mode(),
        "Generating README"
    );

    let markdown = run_generation(&state, request).await?;
    Ok(Json(AiServiceResponse::markdown(markdown)))
}

/// POST /api/documents/{id}/generate - Generate a README into a document
///
/// The document's content is replaced; its title is kept.
#[utoipa::path(
    post,
    path = "/api/documents/{id}/generate",
    params(
        ("id" = Uuid, Path, description = "Document to fill")
    ),
    request_body = AiServiceRequest,
    responses(
        (status = 200, description = "Document updated with generated content", body = Document),
        (status = 400, description = "Missing fields or invalid project information", body = ErrorResponse),
        (status = 404, description = "Document not found", body = ErrorResponse),
        (status = 502, description = "Both inference providers failed", body = ErrorResponse),
        (status = 503, description = "Server is shutting down", body = ErrorResponse)
    ),
    tag = "generation"
)]
pub async fn generate_into_document(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    body: Result<Json<AiServiceRequest>, JsonRejection>,
) -> Result<Json<Document>, ApiError> {
    let Json(body) = body.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let request = parse_generation_request(body)?;

    // fail fast before spending an inference call on a missing document
    state.documents.get(id).await?;

    let markdown = run_generation(&state, request).await?;
    let document = state.documents.update(id, &markdown, None).await?;
    Ok(Json(document))
}
