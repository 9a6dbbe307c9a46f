//! Error types for the Supabase admin client.

use thiserror::Error;

/// Result type for Supabase admin operations.
pub type Result<T> = std::result::Result<T, SupabaseError>;

/// Supabase admin client errors.
#[derive(Debug, Error)]
pub enum SupabaseError {
    /// Configuration error (missing URL or service role key)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Network error (connection failed, timeout)
    #[error("Network error: {0}")]
    Network(String),

    /// Upstream returned a non-2xx response.
    ///
    /// The status and body are kept so callers can surface what the
    /// auth service actually said.
    #[error("Supabase API error ({status}): {body}")]
    Api { status: u16, body: String },

    /// Parse error (unexpected response shape)
    #[error("Parse error: {0}")]
    Parse(String),
}
