//! Identity domain models.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Role a signup claims on the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Tenant,
    Landlord,
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserRole::Tenant => write!(f, "tenant"),
            UserRole::Landlord => write!(f, "landlord"),
        }
    }
}

impl FromStr for UserRole {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tenant" => Ok(UserRole::Tenant),
            "landlord" => Ok(UserRole::Landlord),
            _ => Err(anyhow::anyhow!("Unknown user role: {}", s)),
        }
    }
}

/// Body of an admin create-user call.
///
/// Email and password are required; the rest is optional signup metadata.
/// Required fields stay `Option` here so the action can report what is
/// missing instead of failing JSON deserialization.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUserRequest {
    pub email: Option<String>,
    pub password: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub role: Option<UserRole>,
}

/// Body of an admin confirm-user call.
#[derive(Debug, Clone, Deserialize)]
pub struct ConfirmUserRequest {
    pub email: Option<String>,
}

/// Body of an admin lookup call.
#[derive(Debug, Clone, Deserialize)]
pub struct LookupUserRequest {
    pub email: Option<String>,
}

/// Body of a profile-provisioning call.
#[derive(Debug, Clone, Deserialize)]
pub struct EnsureProfileRequest {
    pub id: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
}
