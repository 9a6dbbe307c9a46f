// Identity provider implementation using Supabase
//
// This is the infrastructure implementation of BaseIdentityProvider.
// Business logic (validation, display-name defaults) lives in the
// identity domain.

use async_trait::async_trait;
use supabase_admin::{AdminUser, NewAdminUser, SupabaseAdminService, SupabaseError};

use super::{BaseIdentityProvider, IdentityError, NewProviderUser, ProviderUser};

/// Supabase implementation of the identity provider
#[derive(Clone)]
pub struct SupabaseIdentityProvider {
    service: SupabaseAdminService,
}

impl SupabaseIdentityProvider {
    pub fn new(service: SupabaseAdminService) -> Self {
        Self { service }
    }
}

impl From<AdminUser> for ProviderUser {
    fn from(user: AdminUser) -> Self {
        Self {
            id: user.id,
            email: user.email,
            email_confirmed_at: user.email_confirmed_at,
            confirmed_at: user.confirmed_at,
            created_at: user.created_at,
            last_sign_in_at: user.last_sign_in_at,
            user_metadata: user.user_metadata,
        }
    }
}

/// Translate a client error, labelling it with the admin operation that failed.
fn map_supabase_error(operation: &str, err: SupabaseError) -> IdentityError {
    match err {
        SupabaseError::Api { status, body } => IdentityError::Upstream {
            operation: operation.to_string(),
            status,
            body,
        },
        other => IdentityError::Other(anyhow::Error::new(other)),
    }
}

#[async_trait]
impl BaseIdentityProvider for SupabaseIdentityProvider {
    async fn create_user(&self, new_user: NewProviderUser) -> Result<ProviderUser, IdentityError> {
        let user = self
            .service
            .create_user(NewAdminUser {
                email: new_user.email,
                password: new_user.password,
                display_name: new_user.display_name,
                phone: new_user.phone,
                role: new_user.role,
            })
            .await
            .map_err(|e| map_supabase_error("admin create user", e))?;

        Ok(user.into())
    }

    async fn find_user_by_email(
        &self,
        email: &str,
    ) -> Result<Option<ProviderUser>, IdentityError> {
        let user = self
            .service
            .get_user_by_email(email)
            .await
            .map_err(|e| map_supabase_error("admin list users", e))?;

        Ok(user.map(ProviderUser::from))
    }

    async fn confirm_user(&self, user_id: &str) -> Result<ProviderUser, IdentityError> {
        let user = self
            .service
            .confirm_user(user_id)
            .await
            .map_err(|e| map_supabase_error("admin patch user", e))?;

        Ok(user.into())
    }

    async fn ensure_profile(
        &self,
        user_id: &str,
        email: Option<&str>,
        display_name: &str,
    ) -> Result<(), IdentityError> {
        self.service
            .create_profile_if_not_exists(user_id, email, display_name)
            .await
            .map_err(|e| map_supabase_error("create profile", e))
    }
}
