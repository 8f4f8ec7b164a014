//! Route definitions and server setup

use axum::{
    Router,
    http::{HeaderValue, Method, StatusCode, header},
    middleware,
    response::Json,
    routing::{get, patch, post, put},
};
use mdforge_core::Config;
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use utoipa::OpenApi;

use crate::presentation::{
    controllers::{
        AppState,
        documents::{
            create_document, delete_document, export_document, get_document, list_documents,
            rename_document, reorder_documents, update_document,
        },
        generation::{generate_into_document, generate_readme},
        health::health_check,
        templates::list_templates,
    },
    middleware::logging_middleware,
    models::*,
};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::controllers::generation::generate_readme,
        crate::presentation::controllers::generation::generate_into_document,
        crate::presentation::controllers::documents::list_documents,
        crate::presentation::controllers::documents::create_document,
        crate::presentation::controllers::documents::get_document,
        crate::presentation::controllers::documents::update_document,
        crate::presentation::controllers::documents::rename_document,
        crate::presentation::controllers::documents::delete_document,
        crate::presentation::controllers::documents::reorder_documents,
        crate::presentation::controllers::documents::export_document,
        crate::presentation::controllers::templates::list_templates,
        crate::presentation::controllers::health::health_check
    ),
    components(
        schemas(
            AiServiceRequest,
            AiServiceResponse,
            CreateDocumentRequest,
            UpdateDocumentRequest,
            RenameDocumentRequest,
            ReorderDocumentsRequest,
            ErrorResponse,
            HealthResponse,
            mdforge_core::domain::Document,
            mdforge_core::domain::Template,
            mdforge_core::domain::ProjectInfo,
            mdforge_core::domain::SocialLink
        )
    ),
    tags(
        (name = "generation", description = "AI-assisted README generation"),
        (name = "documents", description = "Markdown document management"),
        (name = "templates", description = "README template catalog"),
        (name = "health", description = "Service health")
    ),
    info(
        title = "mdforge API",
        description = "Markdown document service with AI-assisted README generation."
    )
)]
pub struct ApiDoc;

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let layer = if allowed_origins.len() == 1 && allowed_origins[0] == "*" {
        CorsLayer::new().allow_origin(AllowOrigin::mirror_request())
    } else {
        let origins: Vec<HeaderValue> = allowed_origins
            .iter()
            .filter_map(|origin| match HeaderValue::from_str(origin) {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!(origin, "Invalid CORS origin in config; skipping");
                    None
                }
            })
            .collect();
        CorsLayer::new().allow_origin(origins)
    };

    layer
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::ORIGIN])
        .expose_headers([header::CONTENT_DISPOSITION])
        .allow_credentials(false)
        .max_age(Duration::from_secs(3600))
}

/// Create the application router with its middleware stack
pub fn create_router(app_state: AppState, config: &Config) -> Router {
    let document_routes = Router::new()
        .route("/documents", get(list_documents).post(create_document))
        .route("/documents/order", put(reorder_documents))
        .route(
            "/documents/{id}",
            get(get_document)
                .put(update_document)
                .delete(delete_document),
        )
        .route("/documents/{id}/title", patch(rename_document))
        .route("/documents/{id}/export", get(export_document))
        .route("/documents/{id}/generate", post(generate_into_document));

    let api_routes = Router::new()
        .route("/ai-service", post(generate_readme))
        .route("/templates", get(list_templates))
        .merge(document_routes);

    let mut router = Router::new()
        .nest("/api", api_routes)
        .route("/health", get(health_check));

    if config.server.enable_docs {
        router = router.route("/api-docs/openapi.json", get(openapi_json));
    }

    let service_builder = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config.server.allowed_origins))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(config.server.request_timeout_seconds),
        ))
        .layer(middleware::from_fn(logging_middleware));

    router.layer(service_builder).with_state(app_state)
}
