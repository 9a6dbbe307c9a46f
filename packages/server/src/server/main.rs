// Main entry point for API server

use std::sync::Arc;

use anyhow::{Context, Result};
use gemini_client::GeminiClient;
use roomverse_core::domains::catalog::Catalog;
use roomverse_core::domains::content::SiteContent;
use roomverse_core::kernel::{GeminiAi, ServerDeps, SupabaseIdentityProvider};
use roomverse_core::server::build_app;
use roomverse_core::Config;
use supabase_admin::{SupabaseAdminOptions, SupabaseAdminService};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,roomverse_core=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting RoomVerse API");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!(environment = %config.environment, "Configuration loaded");

    // Wire up external services
    let ai = GeminiAi::new(
        GeminiClient::new(config.gemini_api_key.clone()),
        config.gemini_model.clone(),
    );
    let identity = SupabaseIdentityProvider::new(SupabaseAdminService::new(SupabaseAdminOptions {
        project_url: config.supabase_url.clone(),
        service_role_key: config.supabase_service_role_key.clone(),
    }));

    // Seed the in-memory catalog and site content
    let catalog = Catalog::seed();
    let content = SiteContent::seed();
    tracing::info!(properties = catalog.len(), "Catalog seeded");

    let deps = ServerDeps::new(
        Arc::new(catalog),
        Arc::new(content),
        Arc::new(ai),
        Arc::new(identity),
        config.environment,
        config.admin_api_key.clone(),
    );

    // Build application
    let app = build_app(deps);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Starting server on {}", addr);
    tracing::info!("Health check: http://localhost:{}/health", config.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<std::net::SocketAddr>(),
    )
    .await
    .context("Server error")?;

    Ok(())
}
