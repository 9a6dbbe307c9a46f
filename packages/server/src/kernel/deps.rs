//! Server dependencies for route handlers (using traits for testability)
//!
//! This module provides the central dependency container used by all domain
//! operations. External services use trait abstractions to enable testing.

use std::sync::Arc;

use crate::common::auth::HasAuthContext;
use crate::config::Environment;
use crate::domains::catalog::Catalog;
use crate::domains::content::SiteContent;
use crate::kernel::{BaseGenerativeAi, BaseIdentityProvider};

/// Server dependencies accessible to handlers (using traits for testability)
#[derive(Clone)]
pub struct ServerDeps {
    /// In-memory property catalog snapshot, seeded at startup
    pub catalog: Arc<Catalog>,
    /// Marketing and help-center content served by the content routes
    pub site_content: Arc<SiteContent>,
    /// Generative AI for assistant flows (FAQ answers, listing copy)
    pub ai: Arc<dyn BaseGenerativeAi>,
    /// Hosted auth provider for identity administration
    pub identity: Arc<dyn BaseIdentityProvider>,
    pub environment: Environment,
    pub admin_api_key: Option<String>,
}

impl ServerDeps {
    /// Create new ServerDeps with the given dependencies
    pub fn new(
        catalog: Arc<Catalog>,
        site_content: Arc<SiteContent>,
        ai: Arc<dyn BaseGenerativeAi>,
        identity: Arc<dyn BaseIdentityProvider>,
        environment: Environment,
        admin_api_key: Option<String>,
    ) -> Self {
        Self {
            catalog,
            site_content,
            ai,
            identity,
            environment,
            admin_api_key,
        }
    }
}

/// Implement HasAuthContext for ServerDeps to enable authorization checks
impl HasAuthContext for ServerDeps {
    fn admin_api_key(&self) -> Option<&str> {
        self.admin_api_key.as_deref()
    }

    fn require_admin_key(&self) -> bool {
        self.environment.is_production()
    }
}
