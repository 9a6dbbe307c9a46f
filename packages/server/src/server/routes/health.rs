use axum::{extract::Extension, http::StatusCode, Json};
use serde::Serialize;

use crate::server::app::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    environment: String,
    catalog: CatalogHealth,
    content: ContentHealth,
}

#[derive(Serialize)]
pub struct CatalogHealth {
    properties: usize,
}

#[derive(Serialize)]
pub struct ContentHealth {
    faqs: usize,
}

/// Health check endpoint
///
/// The catalog and site content are immutable in-memory snapshots, so the
/// service is healthy whenever it can answer at all. The counts confirm that
/// the seed data loaded.
pub async fn health_handler(
    Extension(state): Extension<AppState>,
) -> (StatusCode, Json<HealthResponse>) {
    let deps = &state.deps;

    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            environment: deps.environment.to_string(),
            catalog: CatalogHealth {
                properties: deps.catalog.len(),
            },
            content: ContentHealth {
                faqs: deps.site_content.faqs().len(),
            },
        }),
    )
}
