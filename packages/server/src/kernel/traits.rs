// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// Business logic (like "answer an FAQ question") should be domain functions
// that use these traits.
//
// Naming convention: Base* for trait names (e.g., BaseGenerativeAi)

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// =============================================================================
// Generative AI Trait (Infrastructure - structured LLM output)
// =============================================================================

#[async_trait]
pub trait BaseGenerativeAi: Send + Sync {
    /// Generate structured output with a JSON schema
    /// Returns a JSON string conforming to the provided schema.
    /// Parse with serde_json::from_str in calling code.
    async fn generate_structured(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        schema: serde_json::Value,
    ) -> Result<String>;
}

// =============================================================================
// Identity Provider Trait (Infrastructure - hosted auth accounts)
// =============================================================================

/// Errors surfaced by identity operations.
///
/// `Upstream` carries the provider's status and body so the HTTP layer can
/// report the failure without guessing at its cause.
#[derive(Debug, Error)]
pub enum IdentityError {
    #[error("{0}")]
    Invalid(String),

    #[error("User not found via admin API")]
    UserNotFound,

    #[error("{operation} failed: {status} {body}")]
    Upstream {
        operation: String,
        status: u16,
        body: String,
    },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// A user account as reported by the hosted auth provider.
///
/// Field names follow the provider's wire format so route responses can
/// hand the record through unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderUser {
    pub id: String,
    pub email: Option<String>,
    pub email_confirmed_at: Option<String>,
    pub confirmed_at: Option<String>,
    pub created_at: Option<String>,
    pub last_sign_in_at: Option<String>,
    pub user_metadata: Option<serde_json::Value>,
}

impl ProviderUser {
    /// Whether the provider considers this account email-confirmed.
    pub fn is_confirmed(&self) -> bool {
        self.email_confirmed_at.is_some() || self.confirmed_at.is_some()
    }
}

/// Account details for provisioning a new provider user.
#[derive(Debug, Clone)]
pub struct NewProviderUser {
    pub email: String,
    pub password: String,
    pub display_name: Option<String>,
    pub phone: Option<String>,
    pub role: Option<String>,
}

#[async_trait]
pub trait BaseIdentityProvider: Send + Sync {
    /// Create a pre-confirmed account on the auth provider
    async fn create_user(&self, new_user: NewProviderUser) -> Result<ProviderUser, IdentityError>;

    /// Look up an account by email address
    async fn find_user_by_email(&self, email: &str)
        -> Result<Option<ProviderUser>, IdentityError>;

    /// Mark an existing account as email-confirmed
    async fn confirm_user(&self, user_id: &str) -> Result<ProviderUser, IdentityError>;

    /// Create the application profile row for an account if it is missing
    async fn ensure_profile(
        &self,
        user_id: &str,
        email: Option<&str>,
        display_name: &str,
    ) -> Result<(), IdentityError>;
}
