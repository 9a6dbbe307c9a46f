//! Identity domain - admin operations against the hosted auth provider.

pub mod actions;
pub mod models;

pub use actions::{confirm_user, create_user, ensure_profile, lookup_user};
pub use models::{
    ConfirmUserRequest, CreateUserRequest, EnsureProfileRequest, LookupUserRequest, UserRole,
};
