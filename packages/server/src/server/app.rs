//! Application setup and server configuration.

use std::sync::Arc;

use axum::{
    extract::Extension,
    http::{
        header::{HeaderName, AUTHORIZATION, CONTENT_TYPE},
        Method,
    },
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::kernel::ServerDeps;
use crate::server::middleware::{extract_admin_key, extract_client_host};
use crate::server::routes::{
    blog_posts_handler, confirm_user_handler, create_user_handler, describe_handler,
    ensure_profile_handler, faq_handler, faqs_handler, featured_properties_handler,
    filter_options_handler, health_handler, landlord_dashboard_handler, list_properties_handler,
    list_reviews_handler, lookup_user_handler, property_detail_handler, quote_handler,
    submit_review_handler, tenant_dashboard_handler, testimonials_handler, why_choose_us_handler,
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub deps: Arc<ServerDeps>,
}

/// Build the Axum application router
///
/// Handlers pull `AppState` out of request extensions; per-request caller
/// details (admin key, client host) are populated by middleware. Tests build
/// the same router around mock dependencies and drive it with `oneshot`.
pub fn build_app(deps: ServerDeps) -> Router {
    let state = AppState {
        deps: Arc::new(deps),
    };

    // Admin identity surface. The middleware only extracts the presented key;
    // each handler checks the capability it needs.
    let admin_routes = Router::new()
        .route("/users", post(create_user_handler))
        .route("/users/confirm", post(confirm_user_handler))
        .route("/users/lookup", post(lookup_user_handler))
        .layer(middleware::from_fn(extract_admin_key));

    let api_routes = Router::new()
        // Catalog
        .route("/properties", get(list_properties_handler))
        .route("/properties/featured", get(featured_properties_handler))
        .route("/properties/:id", get(property_detail_handler))
        .route(
            "/properties/:id/reviews",
            get(list_reviews_handler).post(submit_review_handler),
        )
        .route("/properties/:id/quote", get(quote_handler))
        // AI assistant
        .route("/assistant/faq", post(faq_handler))
        .route("/assistant/describe", post(describe_handler))
        // Site content
        .route("/content/faqs", get(faqs_handler))
        .route("/content/testimonials", get(testimonials_handler))
        .route("/content/why-choose-us", get(why_choose_us_handler))
        .route("/content/blog-posts", get(blog_posts_handler))
        .route("/content/filter-options", get(filter_options_handler))
        // Dashboards
        .route("/dashboard/landlord", get(landlord_dashboard_handler))
        .route("/dashboard/tenant", get(tenant_dashboard_handler))
        // Profiles (not admin-gated; the hosted backend enforces row security)
        .route("/profiles", post(ensure_profile_handler))
        .nest("/admin", admin_routes);

    // CORS configuration - allow any origin for development
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([
            AUTHORIZATION,
            CONTENT_TYPE,
            HeaderName::from_static("x-admin-key"),
        ]);

    Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api_routes)
        // Middleware layers (applied in reverse order - last added runs first)
        .layer(middleware::from_fn(extract_client_host))
        .layer(Extension(state)) // Add shared state (must be after middlewares that need it)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
