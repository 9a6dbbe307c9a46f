//! Supabase GoTrue admin API models.

use serde::{Deserialize, Serialize};

/// A user record as returned by the GoTrue admin API.
///
/// Timestamps stay as RFC 3339 strings, matching the wire format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminUser {
    pub id: String,

    #[serde(default)]
    pub email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_confirmed_at: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirmed_at: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_sign_in_at: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_metadata: Option<serde_json::Value>,
}

impl AdminUser {
    /// Whether the user's email has been confirmed.
    pub fn is_confirmed(&self) -> bool {
        self.email_confirmed_at.is_some() || self.confirmed_at.is_some()
    }
}

/// Input for creating a user through the admin API.
#[derive(Debug, Clone, Deserialize)]
pub struct NewAdminUser {
    pub email: String,
    pub password: String,

    #[serde(default)]
    pub display_name: Option<String>,

    #[serde(default)]
    pub phone: Option<String>,

    #[serde(default)]
    pub role: Option<String>,
}

/// Wire payload for `POST /auth/v1/admin/users`.
///
/// Users are created pre-confirmed; there is no email verification loop
/// on the admin path.
#[derive(Debug, Serialize)]
pub(crate) struct CreateUserPayload {
    pub email: String,
    pub password: String,
    pub user_metadata: UserMetadata,
    pub email_confirm: bool,
    pub email_confirmed_at: String,
}

/// Metadata stored alongside the auth user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    pub email: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

/// Wire payload for `PATCH /auth/v1/admin/users/{id}`.
#[derive(Debug, Serialize)]
pub(crate) struct ConfirmUserPayload {
    pub email_confirm: bool,
    pub email_confirmed_at: String,
    pub confirmed_at: String,
}

/// Wire payload for the `create_profile_if_not_exists` RPC.
#[derive(Debug, Serialize)]
pub(crate) struct CreateProfilePayload {
    pub p_id: String,
    pub p_email: Option<String>,
    pub p_display_name: String,
}

/// GoTrue list responses vary by version: some return `{"users": [...]}`,
/// some a bare array, and filtered lookups may return a single object.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum UserListResponse {
    Wrapped { users: Vec<AdminUser> },
    Bare(Vec<AdminUser>),
    Single(AdminUser),
}

impl UserListResponse {
    pub(crate) fn into_users(self) -> Vec<AdminUser> {
        match self {
            UserListResponse::Wrapped { users } => users,
            UserListResponse::Bare(users) => users,
            UserListResponse::Single(user) => vec![user],
        }
    }
}
