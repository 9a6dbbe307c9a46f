use axum::{
    extract::{Extension, Query},
    Json,
};
use serde::Deserialize;

use crate::domains::dashboard::{LandlordSummary, TenantDashboard};
use crate::server::app::AppState;

/// Query parameters for the landlord dashboard route
#[derive(Debug, Default, Deserialize)]
pub struct LandlordParams {
    /// Comma-separated property ids owned by the landlord; absent means the
    /// whole catalog
    pub ids: Option<String>,
}

/// GET /api/dashboard/landlord
pub async fn landlord_dashboard_handler(
    Extension(state): Extension<AppState>,
    Query(params): Query<LandlordParams>,
) -> Json<LandlordSummary> {
    let catalog = &state.deps.catalog;

    let summary = match params.ids {
        Some(list) => {
            let ids: Vec<&str> = list
                .split(',')
                .map(str::trim)
                .filter(|id| !id.is_empty())
                .collect();
            let owned: Vec<_> = catalog
                .properties()
                .iter()
                .filter(|property| ids.contains(&property.id.as_str()))
                .cloned()
                .collect();
            LandlordSummary::for_properties(&owned)
        }
        None => LandlordSummary::for_properties(catalog.properties()),
    };

    Json(summary)
}

/// GET /api/dashboard/tenant
pub async fn tenant_dashboard_handler(
    Extension(state): Extension<AppState>,
) -> Json<TenantDashboard> {
    Json(TenantDashboard::for_catalog(&state.deps.catalog))
}
