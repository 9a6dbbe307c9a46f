//! Kernel module - server infrastructure and dependencies.

pub mod ai;
pub mod deps;
pub mod identity;
pub mod test_dependencies;
pub mod traits;

// Re-export AI client types
pub use gemini_client::StructuredOutput;

/// Default Gemini model for assistant flows.
pub const GEMINI_FLASH: &str = "gemini-2.5-flash";

// Other exports
pub use ai::GeminiAi;
pub use deps::ServerDeps;
pub use identity::SupabaseIdentityProvider;
pub use test_dependencies::{MockGenerativeAi, MockIdentityProvider};
pub use traits::*;
