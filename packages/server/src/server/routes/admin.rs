use axum::{
    extract::{rejection::JsonRejection, Extension},
    http::StatusCode,
    Json,
};
use serde::Serialize;

use crate::common::{AdminCapability, Caller};
use crate::domains::identity::{
    confirm_user, create_user, ensure_profile, lookup_user, ConfirmUserRequest, CreateUserRequest,
    EnsureProfileRequest, LookupUserRequest,
};
use crate::kernel::ProviderUser;
use crate::server::app::AppState;
use crate::server::middleware::{AdminKey, ClientHost};
use crate::server::routes::error::ApiError;

/// Response wrapper for admin user operations
#[derive(Serialize)]
pub struct UserResponse {
    user: ProviderUser,
}

/// Response for profile provisioning
#[derive(Serialize)]
pub struct ProfileResponse {
    ok: bool,
}

fn host_of(host: Option<Extension<ClientHost>>) -> Option<String> {
    host.map(|Extension(ClientHost(host))| host)
}

fn parse_body<T>(body: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    body.map(|Json(request)| request)
        .map_err(|_| ApiError::BadRequest("Invalid JSON".to_string()))
}

/// POST /api/admin/users
pub async fn create_user_handler(
    Extension(state): Extension<AppState>,
    Extension(AdminKey(admin_key)): Extension<AdminKey>,
    host: Option<Extension<ClientHost>>,
    body: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    Caller::new(admin_key, host_of(host))
        .can(AdminCapability::ManageUsers)
        .check(&*state.deps)
        .await?;

    let request = parse_body(body)?;
    let user = create_user(request, state.deps.identity.as_ref()).await?;

    Ok((StatusCode::CREATED, Json(UserResponse { user })))
}

/// POST /api/admin/users/confirm
pub async fn confirm_user_handler(
    Extension(state): Extension<AppState>,
    Extension(AdminKey(admin_key)): Extension<AdminKey>,
    host: Option<Extension<ClientHost>>,
    body: Result<Json<ConfirmUserRequest>, JsonRejection>,
) -> Result<Json<UserResponse>, ApiError> {
    Caller::new(admin_key, host_of(host))
        .can(AdminCapability::ConfirmUsers)
        .check(&*state.deps)
        .await?;

    let request = parse_body(body)?;
    let user = confirm_user(request, state.deps.identity.as_ref()).await?;

    Ok(Json(UserResponse { user }))
}

/// POST /api/admin/users/lookup
pub async fn lookup_user_handler(
    Extension(state): Extension<AppState>,
    Extension(AdminKey(admin_key)): Extension<AdminKey>,
    host: Option<Extension<ClientHost>>,
    body: Result<Json<LookupUserRequest>, JsonRejection>,
) -> Result<Json<UserResponse>, ApiError> {
    Caller::new(admin_key, host_of(host))
        .can(AdminCapability::InspectUsers)
        .check(&*state.deps)
        .await?;

    let request = parse_body(body)?;
    let user = lookup_user(request, state.deps.identity.as_ref()).await?;

    Ok(Json(UserResponse { user }))
}

/// POST /api/profiles
///
/// Not admin-gated: the provisioning RPC is an idempotent upsert and the
/// hosted backend enforces its own row security.
pub async fn ensure_profile_handler(
    Extension(state): Extension<AppState>,
    body: Result<Json<EnsureProfileRequest>, JsonRejection>,
) -> Result<Json<ProfileResponse>, ApiError> {
    let request = parse_body(body)?;
    ensure_profile(request, state.deps.identity.as_ref()).await?;

    Ok(Json(ProfileResponse { ok: true }))
}
