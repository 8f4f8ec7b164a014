//! Template catalog controller

use axum::{
    extract::{Query, State},
    response::Json,
};
use mdforge_core::domain::Template;

use crate::presentation::controllers::AppState;
use crate::presentation::models::TemplateQuery;

/// GET /api/templates - List README templates
#[utoipa::path(
    get,
    path = "/api/templates",
    params(TemplateQuery),
    responses(
        (status = 200, description = "Templates sorted by category then name", body = Vec<Template>)
    ),
    tag = "templates"
)]
pub async fn list_templates(
    State(state): State<AppState>,
    Query(query): Query<TemplateQuery>,
) -> Json<Vec<Template>> {
    let category = query.category.as_deref().map(str::trim).filter(|c| !c.is_empty());
    Json(state.templates.list(category))
}
