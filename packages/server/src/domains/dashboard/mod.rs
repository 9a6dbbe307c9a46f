//! Dashboard domain - landlord portfolio summaries and tenant views.

pub mod landlord;
pub mod tenant;

pub use landlord::{LandlordSummary, PropertyRow};
pub use tenant::TenantDashboard;
