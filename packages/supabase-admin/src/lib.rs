//! Supabase admin REST client
//!
//! Talks to the GoTrue admin API (`/auth/v1/admin`) with a service role key,
//! plus the one PostgREST RPC the server needs for profile provisioning. No
//! session handling, no anon-key flows.
//!
//! # Example
//!
//! ```rust,ignore
//! use supabase_admin::{SupabaseAdminOptions, SupabaseAdminService, NewAdminUser};
//!
//! let service = SupabaseAdminService::new(SupabaseAdminOptions {
//!     project_url: "https://abc.supabase.co".into(),
//!     service_role_key: std::env::var("SUPABASE_SERVICE_ROLE_KEY")?,
//! });
//!
//! let user = service.create_user(NewAdminUser {
//!     email: "tenant@example.com".into(),
//!     password: "hunter2!".into(),
//!     display_name: Some("Tenant".into()),
//!     phone: None,
//!     role: Some("tenant".into()),
//! }).await?;
//! ```

pub mod error;
pub mod models;

pub use error::{Result, SupabaseError};
pub use models::{AdminUser, NewAdminUser, UserMetadata};

use chrono::Utc;
use reqwest::Client;
use tracing::{debug, warn};

use crate::models::{
    ConfirmUserPayload, CreateProfilePayload, CreateUserPayload, UserListResponse,
};

/// Connection settings for a Supabase project.
#[derive(Debug, Clone)]
pub struct SupabaseAdminOptions {
    /// Project URL, e.g. `https://abc.supabase.co`
    pub project_url: String,
    /// Service role key. Grants full admin access; never expose it to clients.
    pub service_role_key: String,
}

/// Supabase admin API client.
#[derive(Clone)]
pub struct SupabaseAdminService {
    options: SupabaseAdminOptions,
    http_client: Client,
}

impl SupabaseAdminService {
    pub fn new(mut options: SupabaseAdminOptions) -> Self {
        // Tolerate trailing slashes in configured URLs
        options.project_url = options.project_url.trim_end_matches('/').to_string();
        Self {
            options,
            http_client: Client::new(),
        }
    }

    /// Create from `SUPABASE_URL` and `SUPABASE_SERVICE_ROLE_KEY`.
    pub fn from_env() -> Result<Self> {
        let project_url = std::env::var("SUPABASE_URL")
            .map_err(|_| SupabaseError::Config("SUPABASE_URL not set".into()))?;
        let service_role_key = std::env::var("SUPABASE_SERVICE_ROLE_KEY")
            .map_err(|_| SupabaseError::Config("SUPABASE_SERVICE_ROLE_KEY not set".into()))?;
        Ok(Self::new(SupabaseAdminOptions {
            project_url,
            service_role_key,
        }))
    }

    fn admin_base(&self) -> String {
        format!("{}/auth/v1/admin", self.options.project_url)
    }

    fn rest_base(&self) -> String {
        format!("{}/rest/v1", self.options.project_url)
    }

    /// Both headers are required: GoTrue checks `apikey`, the gateway checks
    /// the bearer token.
    fn authed(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        request
            .header(
                "Authorization",
                format!("Bearer {}", self.options.service_role_key),
            )
            .header("apikey", &self.options.service_role_key)
            .header("Content-Type", "application/json")
    }

    /// Create a user with a confirmed email.
    pub async fn create_user(&self, new_user: NewAdminUser) -> Result<AdminUser> {
        let now = Utc::now().to_rfc3339();
        let payload = CreateUserPayload {
            user_metadata: UserMetadata {
                display_name: new_user.display_name,
                email: new_user.email.clone(),
                phone: new_user.phone,
                role: new_user.role,
            },
            email: new_user.email,
            password: new_user.password,
            email_confirm: true,
            email_confirmed_at: now,
        };

        let response = self
            .authed(
                self.http_client
                    .post(format!("{}/users", self.admin_base())),
            )
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Supabase create user request failed");
                SupabaseError::Network(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, error = %body, "Supabase create user error");
            return Err(SupabaseError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let user: AdminUser = response
            .json()
            .await
            .map_err(|e| SupabaseError::Parse(e.to_string()))?;

        debug!(user_id = %user.id, "Created auth user");
        Ok(user)
    }

    /// Look up a user by email through the admin list endpoint.
    ///
    /// Returns `None` when no user matches.
    pub async fn get_user_by_email(&self, email: &str) -> Result<Option<AdminUser>> {
        let response = self
            .authed(self.http_client.get(format!(
                "{}/users?email={}",
                self.admin_base(),
                urlencode(email)
            )))
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Supabase list users request failed");
                SupabaseError::Network(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, error = %body, "Supabase list users error");
            return Err(SupabaseError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let list: UserListResponse = response
            .json()
            .await
            .map_err(|e| SupabaseError::Parse(e.to_string()))?;

        // Filtered lookups still return every user on some GoTrue versions,
        // so match the email ourselves rather than trusting the first entry
        Ok(list.into_users().into_iter().find(|user| {
            user.email
                .as_deref()
                .is_some_and(|e| e.eq_ignore_ascii_case(email))
        }))
    }

    /// Mark a user's email as confirmed.
    pub async fn confirm_user(&self, user_id: &str) -> Result<AdminUser> {
        let now = Utc::now().to_rfc3339();
        let payload = ConfirmUserPayload {
            email_confirm: true,
            email_confirmed_at: now.clone(),
            confirmed_at: now,
        };

        let response = self
            .authed(
                self.http_client
                    .patch(format!("{}/users/{}", self.admin_base(), user_id)),
            )
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Supabase confirm user request failed");
                SupabaseError::Network(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, error = %body, "Supabase confirm user error");
            return Err(SupabaseError::Api {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json()
            .await
            .map_err(|e| SupabaseError::Parse(e.to_string()))
    }

    /// Provision an application profile row for an auth user.
    ///
    /// Calls the `create_profile_if_not_exists` database function, which is a
    /// no-op when the profile already exists.
    pub async fn create_profile_if_not_exists(
        &self,
        user_id: &str,
        email: Option<&str>,
        display_name: &str,
    ) -> Result<()> {
        let payload = CreateProfilePayload {
            p_id: user_id.to_string(),
            p_email: email.map(str::to_string),
            p_display_name: display_name.to_string(),
        };

        let response = self
            .authed(self.http_client.post(format!(
                "{}/rpc/create_profile_if_not_exists",
                self.rest_base()
            )))
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Supabase profile RPC request failed");
                SupabaseError::Network(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, error = %body, "Supabase profile RPC error");
            return Err(SupabaseError::Api {
                status: status.as_u16(),
                body,
            });
        }

        debug!(user_id = %user_id, "Ensured profile row");
        Ok(())
    }
}

/// Percent-encode the characters that matter in an email query parameter.
fn urlencode(value: &str) -> String {
    value
        .chars()
        .map(|c| match c {
            'A'..='Z' | 'a'..='z' | '0'..='9' | '-' | '_' | '.' | '~' => c.to_string(),
            _ => {
                let mut encoded = String::new();
                let mut buf = [0u8; 4];
                for byte in c.encode_utf8(&mut buf).bytes() {
                    encoded.push_str(&format!("%{:02X}", byte));
                }
                encoded
            }
        })
        .collect()
}
