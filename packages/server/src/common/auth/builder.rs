use super::{AdminCapability, AuthError};

/// Entry point for authorization checks
///
/// Usage:
/// ```rust,ignore
/// Caller::new(admin_key, host)
///     .can(AdminCapability::ManageUsers)
///     .check(deps)
///     .await?;
/// ```
pub struct Caller {
    admin_key: Option<String>,
    host: Option<String>,
}

impl Caller {
    /// Create a new caller for authorization checks
    ///
    /// # Arguments
    /// * `admin_key` - The admin key presented by the request, if any
    /// * `host` - The host the request was addressed to, if known
    pub fn new(admin_key: Option<String>, host: Option<String>) -> Self {
        Self { admin_key, host }
    }

    /// Specify what capability the caller needs
    pub fn can(self, capability: AdminCapability) -> CapabilityBuilder {
        CapabilityBuilder {
            admin_key: self.admin_key,
            host: self.host,
            capability,
        }
    }
}

/// Builder after specifying capability
pub struct CapabilityBuilder {
    admin_key: Option<String>,
    host: Option<String>,
    capability: AdminCapability,
}

impl CapabilityBuilder {
    /// Perform the authorization check
    pub async fn check<D>(self, deps: &D) -> Result<(), AuthError>
    where
        D: HasAuthContext,
    {
        check_admin_permission(self.admin_key, self.host, self.capability, deps).await
    }
}

/// Trait for dependencies that can perform auth checks
pub trait HasAuthContext: Send + Sync {
    /// The configured admin key, if one is set
    fn admin_api_key(&self) -> Option<&str>;

    /// Whether the deployment demands a matching admin key for every admin call
    fn require_admin_key(&self) -> bool;
}

/// Returns `true` when the request was addressed to a local host.
fn is_local_host(host: Option<&str>) -> bool {
    host.is_some_and(|h| h.contains("localhost") || h.contains("127.0.0.1"))
}

/// Core permission check function
///
/// In production every admin capability requires the configured admin key,
/// and a deployment without one refuses all admin calls. In development,
/// local requests pass without a key so the routes stay usable during
/// frontend work; remote requests must still present the configured key
/// when one exists.
async fn check_admin_permission<D>(
    admin_key: Option<String>,
    host: Option<String>,
    _capability: AdminCapability,
    deps: &D,
) -> Result<(), AuthError>
where
    D: HasAuthContext,
{
    let configured = deps.admin_api_key();

    if deps.require_admin_key() {
        return match configured {
            Some(expected) if admin_key.as_deref() == Some(expected) => Ok(()),
            _ => Err(AuthError::AdminKeyRequired),
        };
    }

    if !is_local_host(host.as_deref()) {
        if let Some(expected) = configured {
            if admin_key.as_deref() != Some(expected) {
                return Err(AuthError::NonLocalKeyRequired);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestDeps {
        admin_api_key: Option<String>,
        production: bool,
    }

    impl HasAuthContext for TestDeps {
        fn admin_api_key(&self) -> Option<&str> {
            self.admin_api_key.as_deref()
        }

        fn require_admin_key(&self) -> bool {
            self.production
        }
    }

    fn production(key: Option<&str>) -> TestDeps {
        TestDeps {
            admin_api_key: key.map(String::from),
            production: true,
        }
    }

    fn development(key: Option<&str>) -> TestDeps {
        TestDeps {
            admin_api_key: key.map(String::from),
            production: false,
        }
    }

    #[tokio::test]
    async fn test_production_accepts_matching_key() {
        let deps = production(Some("secret"));

        let result = Caller::new(Some("secret".to_string()), None)
            .can(AdminCapability::ManageUsers)
            .check(&deps)
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_production_rejects_wrong_key() {
        let deps = production(Some("secret"));

        let result = Caller::new(Some("nope".to_string()), None)
            .can(AdminCapability::ManageUsers)
            .check(&deps)
            .await;

        assert!(matches!(result, Err(AuthError::AdminKeyRequired)));
    }

    #[tokio::test]
    async fn test_production_without_configured_key_rejects_everyone() {
        let deps = production(None);

        let result = Caller::new(Some("anything".to_string()), None)
            .can(AdminCapability::ConfirmUsers)
            .check(&deps)
            .await;

        assert!(matches!(result, Err(AuthError::AdminKeyRequired)));
    }

    #[tokio::test]
    async fn test_development_allows_localhost_without_key() {
        let deps = development(Some("secret"));

        let result = Caller::new(None, Some("localhost:8080".to_string()))
            .can(AdminCapability::ManageUsers)
            .check(&deps)
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_development_rejects_remote_caller_with_wrong_key() {
        let deps = development(Some("secret"));

        let result = Caller::new(None, Some("api.roomverse.in".to_string()))
            .can(AdminCapability::InspectUsers)
            .check(&deps)
            .await;

        assert!(matches!(result, Err(AuthError::NonLocalKeyRequired)));
    }

    #[tokio::test]
    async fn test_development_accepts_remote_caller_with_matching_key() {
        let deps = development(Some("secret"));

        let result = Caller::new(
            Some("secret".to_string()),
            Some("api.roomverse.in".to_string()),
        )
        .can(AdminCapability::ManageUsers)
        .check(&deps)
        .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_development_without_configured_key_is_open() {
        let deps = development(None);

        let result = Caller::new(None, Some("api.roomverse.in".to_string()))
            .can(AdminCapability::ManageUsers)
            .check(&deps)
            .await;

        assert!(result.is_ok());
    }
}
