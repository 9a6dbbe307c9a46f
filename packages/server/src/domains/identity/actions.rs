//! Identity actions - validation and orchestration over the auth provider.

use tracing::info;

use super::models::{
    ConfirmUserRequest, CreateUserRequest, EnsureProfileRequest, LookupUserRequest,
};
use crate::kernel::{BaseIdentityProvider, IdentityError, NewProviderUser, ProviderUser};

/// Create a pre-confirmed account on the auth provider.
pub async fn create_user(
    request: CreateUserRequest,
    identity: &dyn BaseIdentityProvider,
) -> Result<ProviderUser, IdentityError> {
    let email = request.email.filter(|e| !e.is_empty());
    let password = request.password.filter(|p| !p.is_empty());
    let (email, password) = match (email, password) {
        (Some(email), Some(password)) => (email, password),
        _ => {
            return Err(IdentityError::Invalid(
                "email and password required".to_string(),
            ))
        }
    };

    info!(email = %email, "Creating provider user");

    identity
        .create_user(NewProviderUser {
            email,
            password,
            display_name: request.display_name,
            phone: request.phone,
            role: request.role.map(|r| r.to_string()),
        })
        .await
}

/// Mark the account with the given email as confirmed.
///
/// The provider is keyed by user ID, so this resolves the email first and
/// then patches the account. Already-confirmed accounts are patched again;
/// the operation is idempotent on the provider side.
pub async fn confirm_user(
    request: ConfirmUserRequest,
    identity: &dyn BaseIdentityProvider,
) -> Result<ProviderUser, IdentityError> {
    let email = required_email(request.email)?;

    let user = identity
        .find_user_by_email(&email)
        .await?
        .ok_or(IdentityError::UserNotFound)?;

    info!(email = %email, user_id = %user.id, "Confirming provider user");

    identity.confirm_user(&user.id).await
}

/// Look up the provider account for an email address.
pub async fn lookup_user(
    request: LookupUserRequest,
    identity: &dyn BaseIdentityProvider,
) -> Result<ProviderUser, IdentityError> {
    let email = required_email(request.email)?;

    identity
        .find_user_by_email(&email)
        .await?
        .ok_or(IdentityError::UserNotFound)
}

/// Provision the application profile row for an account.
pub async fn ensure_profile(
    request: EnsureProfileRequest,
    identity: &dyn BaseIdentityProvider,
) -> Result<(), IdentityError> {
    let user_id = request
        .id
        .filter(|id| !id.is_empty())
        .ok_or_else(|| IdentityError::Invalid("Missing user id".to_string()))?;

    let display_name = display_name_or_default(request.display_name, request.email.as_deref());

    identity
        .ensure_profile(&user_id, request.email.as_deref(), &display_name)
        .await
}

fn required_email(email: Option<String>) -> Result<String, IdentityError> {
    email
        .filter(|e| !e.is_empty())
        .ok_or_else(|| IdentityError::Invalid("email required in request body".to_string()))
}

/// Display name fallback chain: explicit name, then the email's local part,
/// then a generic placeholder. An explicitly empty name is kept.
fn display_name_or_default(display_name: Option<String>, email: Option<&str>) -> String {
    match display_name {
        Some(name) => name,
        None => match email.filter(|e| !e.is_empty()) {
            Some(email) => email.split('@').next().unwrap_or(email).to_string(),
            None => "New User".to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::MockIdentityProvider;

    fn create_request(email: Option<&str>, password: Option<&str>) -> CreateUserRequest {
        CreateUserRequest {
            email: email.map(String::from),
            password: password.map(String::from),
            display_name: None,
            phone: None,
            role: None,
        }
    }

    #[tokio::test]
    async fn create_requires_email_and_password() {
        let identity = MockIdentityProvider::new();

        for request in [
            create_request(None, Some("secret123")),
            create_request(Some("a@b.com"), None),
            create_request(Some(""), Some("secret123")),
        ] {
            let result = create_user(request, &identity).await;
            assert!(matches!(
                result,
                Err(IdentityError::Invalid(ref msg)) if msg == "email and password required"
            ));
        }

        assert_eq!(identity.calls().len(), 0);
    }

    #[tokio::test]
    async fn create_passes_role_as_string() {
        let identity = MockIdentityProvider::new();
        let request = CreateUserRequest {
            role: Some(super::super::models::UserRole::Landlord),
            ..create_request(Some("host@roomverse.in"), Some("secret123"))
        };

        let user = create_user(request, &identity).await.unwrap();
        assert_eq!(user.email.as_deref(), Some("host@roomverse.in"));
        assert_eq!(user.user_metadata.unwrap()["role"], "landlord");
    }

    #[tokio::test]
    async fn confirm_unknown_email_is_not_found() {
        let identity = MockIdentityProvider::new();
        let request = ConfirmUserRequest {
            email: Some("ghost@roomverse.in".to_string()),
        };

        let result = confirm_user(request, &identity).await;
        assert!(matches!(result, Err(IdentityError::UserNotFound)));
    }

    #[tokio::test]
    async fn confirm_resolves_email_then_patches() {
        let identity = MockIdentityProvider::new()
            .with_user(MockIdentityProvider::user("u1", "tenant@roomverse.in"));
        let request = ConfirmUserRequest {
            email: Some("tenant@roomverse.in".to_string()),
        };

        let user = confirm_user(request, &identity).await.unwrap();
        assert!(user.is_confirmed());
        assert_eq!(
            identity.calls(),
            vec![
                "find_user_by_email tenant@roomverse.in",
                "confirm_user u1"
            ]
        );
    }

    #[tokio::test]
    async fn lookup_requires_email() {
        let identity = MockIdentityProvider::new();
        let result = lookup_user(LookupUserRequest { email: None }, &identity).await;
        assert!(matches!(
            result,
            Err(IdentityError::Invalid(ref msg)) if msg == "email required in request body"
        ));
    }

    #[tokio::test]
    async fn ensure_profile_requires_user_id() {
        let identity = MockIdentityProvider::new();
        let request = EnsureProfileRequest {
            id: None,
            email: Some("x@y.com".to_string()),
            display_name: None,
        };

        let result = ensure_profile(request, &identity).await;
        assert!(matches!(
            result,
            Err(IdentityError::Invalid(ref msg)) if msg == "Missing user id"
        ));
    }

    #[tokio::test]
    async fn ensure_profile_defaults_name_to_email_local_part() {
        let identity = MockIdentityProvider::new();
        let request = EnsureProfileRequest {
            id: Some("u1".to_string()),
            email: Some("asha@roomverse.in".to_string()),
            display_name: None,
        };

        ensure_profile(request, &identity).await.unwrap();

        let calls = identity.profile_calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].display_name, "asha");
        assert_eq!(calls[0].email.as_deref(), Some("asha@roomverse.in"));
    }

    #[tokio::test]
    async fn ensure_profile_falls_back_to_placeholder_name() {
        let identity = MockIdentityProvider::new();
        let request = EnsureProfileRequest {
            id: Some("u1".to_string()),
            email: None,
            display_name: None,
        };

        ensure_profile(request, &identity).await.unwrap();
        assert_eq!(identity.profile_calls()[0].display_name, "New User");
    }

    #[tokio::test]
    async fn ensure_profile_keeps_explicit_empty_name() {
        let identity = MockIdentityProvider::new();
        let request = EnsureProfileRequest {
            id: Some("u1".to_string()),
            email: Some("asha@roomverse.in".to_string()),
            display_name: Some(String::new()),
        };

        ensure_profile(request, &identity).await.unwrap();
        assert_eq!(identity.profile_calls()[0].display_name, "");
    }
}
