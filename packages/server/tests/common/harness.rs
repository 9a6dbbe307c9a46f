//! Test harness wiring the full router around mock external services.
//!
//! The catalog and site content are the real seeded snapshots; only the
//! generative AI and the hosted auth provider are mocked. Each test builds
//! its own router, so tests stay independent and run in parallel.

use std::sync::Arc;

use roomverse_core::config::Environment;
use roomverse_core::domains::catalog::Catalog;
use roomverse_core::domains::content::SiteContent;
use roomverse_core::kernel::{MockGenerativeAi, MockIdentityProvider, ServerDeps};
use roomverse_core::server::build_app;

use super::ApiClient;

pub struct TestHarness {
    /// Mock generative AI; inspect it to assert on prompts after a request
    pub ai: Arc<MockGenerativeAi>,
    /// Mock auth provider; inspect it to assert on recorded operations
    pub identity: Arc<MockIdentityProvider>,
    environment: Environment,
    admin_api_key: Option<String>,
}

impl TestHarness {
    pub fn new() -> Self {
        // Initialize tracing subscriber to respect RUST_LOG environment variable.
        // Run tests with: RUST_LOG=debug cargo test -- --nocapture
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();

        Self {
            ai: Arc::new(MockGenerativeAi::new()),
            identity: Arc::new(MockIdentityProvider::new()),
            environment: Environment::Development,
            admin_api_key: None,
        }
    }

    /// Replace the mock AI (for queued responses or failures)
    pub fn with_ai(mut self, ai: MockGenerativeAi) -> Self {
        self.ai = Arc::new(ai);
        self
    }

    /// Replace the mock auth provider (for seeded users or outages)
    pub fn with_identity(mut self, identity: MockIdentityProvider) -> Self {
        self.identity = Arc::new(identity);
        self
    }

    /// Run as a production deployment (admin key becomes mandatory)
    pub fn production(mut self) -> Self {
        self.environment = Environment::Production;
        self
    }

    /// Configure the expected admin key
    pub fn with_admin_key(mut self, key: &str) -> Self {
        self.admin_api_key = Some(key.to_string());
        self
    }

    /// Build an API client around the configured dependencies.
    pub fn api(&self) -> ApiClient {
        let deps = ServerDeps::new(
            Arc::new(Catalog::seed()),
            Arc::new(SiteContent::seed()),
            self.ai.clone(),
            self.identity.clone(),
            self.environment,
            self.admin_api_key.clone(),
        );

        ApiClient::new(build_app(deps))
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}
