// HTTP routes
pub mod admin;
pub mod assistant;
pub mod content;
pub mod dashboard;
pub mod error;
pub mod health;
pub mod properties;

pub use admin::*;
pub use assistant::*;
pub use content::*;
pub use dashboard::*;
pub use error::*;
pub use health::*;
pub use properties::*;
