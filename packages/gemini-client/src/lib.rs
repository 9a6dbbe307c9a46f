//! Pure Google Gemini REST API client
//!
//! A clean, minimal client for the Gemini `generateContent` API with no
//! domain-specific logic. Supports plain text generation and schema-constrained
//! structured output.
//!
//! # Example
//!
//! ```rust,ignore
//! use gemini_client::{GeminiClient, GenerateRequest};
//!
//! let client = GeminiClient::from_env()?;
//!
//! // Plain text generation
//! let response = client
//!     .generate_content("gemini-2.5-flash", GenerateRequest::new(
//!         "You are a helpful assistant.",
//!         "Say hello!",
//!     ))
//!     .await?;
//! ```
//!
//! # Type-Safe Structured Output
//!
//! ```rust,ignore
//! use schemars::JsonSchema;
//! use serde::Deserialize;
//!
//! #[derive(Deserialize, JsonSchema)]
//! struct FaqAnswer {
//!     answer: String,
//! }
//!
//! // Schema generated automatically from type!
//! let answer: FaqAnswer = client
//!     .extract::<FaqAnswer>("gemini-2.5-flash", system_prompt, user_prompt)
//!     .await?;
//! ```

pub mod error;
pub mod schema;
pub mod types;

pub use error::{GeminiError, Result};
pub use schema::StructuredOutput;
pub use types::*;

use reqwest::Client;
use tracing::{debug, warn};

/// Pure Gemini API client.
#[derive(Clone)]
pub struct GeminiClient {
    http_client: Client,
    api_key: String,
    base_url: String,
}

impl GeminiClient {
    /// Create a new Gemini client with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http_client: Client::new(),
            api_key: api_key.into(),
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
        }
    }

    /// Create from environment variable `GEMINI_API_KEY`.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .map_err(|_| GeminiError::Config("GEMINI_API_KEY not set".into()))?;
        Ok(Self::new(api_key))
    }

    /// Set a custom base URL (for proxies, regional endpoints, etc.).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Get the API key.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Type-safe structured output extraction.
    ///
    /// Automatically generates a response schema from the type `T` using
    /// `schemars`, sends it to Gemini, and deserializes the response.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use schemars::JsonSchema;
    /// use serde::Deserialize;
    ///
    /// #[derive(Deserialize, JsonSchema)]
    /// struct GeneratedDescription {
    ///     description: String,
    /// }
    ///
    /// let result: GeneratedDescription = client
    ///     .extract::<GeneratedDescription>("gemini-2.5-flash", system_prompt, user_prompt)
    ///     .await?;
    /// ```
    pub async fn extract<T: StructuredOutput>(
        &self,
        model: &str,
        system_prompt: impl Into<String>,
        user_prompt: impl Into<String>,
    ) -> Result<T> {
        let schema = T::response_schema();

        debug!(
            type_name = T::type_name(),
            schema = %serde_json::to_string_pretty(&schema).unwrap_or_default(),
            "Generated Gemini response schema for extraction"
        );

        let request = GenerateRequest::new(system_prompt, user_prompt).response_schema(schema);
        let json_str = self.structured_output(model, request).await?;

        serde_json::from_str(&json_str)
            .map_err(|e| GeminiError::Parse(format!("Failed to deserialize response: {}", e)))
    }

    /// Structured output with a response schema.
    ///
    /// The request must carry a `responseSchema`; the returned string is the
    /// raw JSON text of the first candidate.
    pub async fn structured_output(&self, model: &str, request: GenerateRequest) -> Result<String> {
        let response = self.generate_content(model, request).await?;
        Ok(response.text)
    }

    /// Generate content.
    ///
    /// Send a request to the `generateContent` endpoint and get the first
    /// candidate's text back.
    pub async fn generate_content(
        &self,
        model: &str,
        request: GenerateRequest,
    ) -> Result<GenerateResponse> {
        let start = std::time::Instant::now();

        let response = self
            .http_client
            .post(format!(
                "{}/models/{}:generateContent",
                self.base_url, model
            ))
            .header("x-goog-api-key", &self.api_key)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Gemini request failed");
                GeminiError::Network(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            warn!(status = %status, error = %error_text, "Gemini API error");
            return Err(GeminiError::Api(format!("Gemini API error: {}", error_text)));
        }

        let raw: types::GenerateResponseRaw = response
            .json()
            .await
            .map_err(|e| GeminiError::Parse(e.to_string()))?;

        let text = raw
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .map(|p| p.text)
                    .collect::<Vec<_>>()
                    .join("")
            })
            .filter(|text| !text.is_empty())
            .ok_or_else(|| GeminiError::Api("No response from Gemini".into()))?;

        debug!(
            model = %model,
            duration_ms = start.elapsed().as_millis(),
            "Gemini generate content"
        );

        Ok(GenerateResponse {
            text,
            usage: raw.usage_metadata,
        })
    }
}
