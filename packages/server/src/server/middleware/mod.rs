// HTTP middleware
pub mod admin_auth;
pub mod host;

pub use admin_auth::*;
pub use host::*;
