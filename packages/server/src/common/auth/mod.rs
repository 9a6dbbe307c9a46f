/// Authorization module for RoomVerse
///
/// Provides a fluent API for authorization checks in route handlers:
///
/// ```rust,ignore
/// use crate::common::auth::{AdminCapability, Caller};
///
/// // In a handler:
/// Caller::new(admin_key, host)
///     .can(AdminCapability::ManageUsers)
///     .check(deps)
///     .await?;
/// ```
///
/// This pattern keeps authorization logic in the handler layer next to the
/// operations it guards, not buried in routing glue.
mod builder;
mod capability;
mod errors;

pub use builder::{Caller, CapabilityBuilder, HasAuthContext};
pub use capability::AdminCapability;
pub use errors::AuthError;
