//! Document CRUD controllers

use axum::{
    extract::{Path, Query, State},
    http::{StatusCode, header},
    response::{IntoResponse, Json, Response},
};
use mdforge_core::domain::Document;
use uuid::Uuid;

use crate::presentation::controllers::AppState;
use crate::presentation::errors::ApiError;
use crate::presentation::models::{
    CreateDocumentRequest, ErrorResponse, ExportQuery, RenameDocumentRequest,
    ReorderDocumentsRequest, UpdateDocumentRequest,
};

pub const DEFAULT_EXPORT_FILENAME: &str = "README.md";

/// GET /api/documents - List documents in display order
#[utoipa::path(
    get,
    path = "/api/documents",
    responses(
        (status = 200, description = "Documents in display order", body = Vec<Document>)
    ),
    tag = "documents"
)]
pub async fn list_documents(State(state): State<AppState>) -> Result<Json<Vec<Document>>, ApiError> {
    Ok(Json(state.documents.list().await?))
}

/// POST /api/documents - Create a document
#[utoipa::path(
    post,
    path = "/api/documents",
    request_body = CreateDocumentRequest,
    responses(
        (status = 201, description = "Document created", body = Document)
    ),
    tag = "documents"
)]
pub async fn create_document(
    State(state): State<AppState>,
    Json(request): Json<CreateDocumentRequest>,
) -> Result<(StatusCode, Json<Document>), ApiError> {
    let document = state
        .documents
        .create(
            request.title.as_deref().unwrap_or_default(),
            request.content.as_deref().unwrap_or_default(),
        )
        .await?;
    Ok((StatusCode::CREATED, Json(document)))
}

/// GET /api/documents/{id} - Fetch one document
#[utoipa::path(
    get,
    path = "/api/documents/{id}",
    params(("id" = Uuid, Path, description = "Document id")),
    responses(
        (status = 200, description = "Document", body = Document),
        (status = 404, description = "Document not found", body = ErrorResponse)
    ),
    tag = "documents"
)]
pub async fn get_document(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Document>, ApiError> {
    Ok(Json(state.documents.get(id).await?))
}

/// PUT /api/documents/{id} - Replace content (and optionally the title)
#[utoipa::path(
    put,
    path = "/api/documents/{id}",
    params(("id" = Uuid, Path, description = "Document id")),
    request_body = UpdateDocumentRequest,
    responses(
        (status = 200, description = "Document updated", body = Document),
        (status = 404, description = "Document not found", body = ErrorResponse)
    ),
    tag = "documents"
)]
pub async fn update_document(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateDocumentRequest>,
) -> Result<Json<Document>, ApiError> {
    let document = state
        .documents
        .update(id, &request.content, request.title.as_deref())
        .await?;
    Ok(Json(document))
}

/// PATCH /api/documents/{id}/title - Rename a document
#[utoipa::path(
    patch,
    path = "/api/documents/{id}/title",
    params(("id" = Uuid, Path, description = "Document id")),
    request_body = RenameDocumentRequest,
    responses(
        (status = 200, description = "Document renamed", body = Document),
        (status = 400, description = "Blank title", body = ErrorResponse),
        (status = 404, description = "Document not found", body = ErrorResponse)
    ),
    tag = "documents"
)]
pub async fn rename_document(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<RenameDocumentRequest>,
) -> Result<Json<Document>, ApiError> {
    let title = request.title.trim();
    if title.is_empty() {
        return Err(ApiError::BadRequest("title must not be blank".to_string()));
    }
    Ok(Json(state.documents.rename(id, title).await?))
}

/// DELETE /api/documents/{id} - Delete a document
#[utoipa::path(
    delete,
    path = "/api/documents/{id}",
    params(("id" = Uuid, Path, description = "Document id")),
    responses(
        (status = 204, description = "Document deleted"),
        (status = 404, description = "Document not found", body = ErrorResponse)
    ),
    tag = "documents"
)]
pub async fn delete_document(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.documents.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// PUT /api/documents/order - Reorder documents
#[utoipa::path(
    put,
    path = "/api/documents/order",
    request_body = ReorderDocumentsRequest,
    responses(
        (status = 200, description = "Documents in their new order", body = Vec<Document>),
        (status = 400, description = "Ids are not a permutation of the current documents", body = ErrorResponse)
    ),
    tag = "documents"
)]
pub async fn reorder_documents(
    State(state): State<AppState>,
    Json(request): Json<ReorderDocumentsRequest>,
) -> Result<Json<Vec<Document>>, ApiError> {
    Ok(Json(state.documents.reorder(&request.ids).await?))
}

/// GET /api/documents/{id}/export - Download a document as Markdown
#[utoipa::path(
    get,
    path = "/api/documents/{id}/export",
    params(
        ("id" = Uuid, Path, description = "Document id"),
        ExportQuery
    ),
    responses(
        (status = 200, description = "Markdown attachment", body = String, content_type = "text/markdown"),
        (status = 404, description = "Document not found", body = ErrorResponse)
    ),
    tag = "documents"
)]
pub async fn export_document(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<ExportQuery>,
) -> Result<Response, ApiError> {
    let document = state.documents.get(id).await?;
    let filename = export_filename(query.filename.as_deref());

    Ok((
        [
            (header::CONTENT_TYPE, "text/markdown; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", filename),
            ),
        ],
        document.content,
    )
        .into_response())
}

/// File name for a download: the last path component reduced to printable
/// ASCII without quotes, `README.md` when nothing is left.
pub fn export_filename(requested: Option<&str>) -> String {
    let name = requested
        .unwrap_or_default()
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or_default();
    let cleaned: String = name
        .chars()
        .filter(|c| c.is_ascii() && !c.is_ascii_control() && *c != '"')
        .collect();
    let cleaned = cleaned.trim();

    if cleaned.is_empty() || cleaned == "." || cleaned == ".." {
        DEFAULT_EXPORT_FILENAME.to_string()
    } else {
        cleaned.to_string()
    }
}
