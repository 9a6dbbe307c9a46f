// AI implementation using Gemini
//
// This is the infrastructure implementation of BaseGenerativeAi.
// Business logic (what to prompt for) lives in domain layers.

use anyhow::{Context, Result};
use async_trait::async_trait;
use gemini_client::{GeminiClient, GenerateRequest};

use super::BaseGenerativeAi;

/// Gemini implementation of generative AI capabilities
#[derive(Clone)]
pub struct GeminiAi {
    client: GeminiClient,
    model: String,
}

impl GeminiAi {
    pub fn new(client: GeminiClient, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl BaseGenerativeAi for GeminiAi {
    async fn generate_structured(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        schema: serde_json::Value,
    ) -> Result<String> {
        tracing::debug!(
            model = %self.model,
            prompt_length = user_prompt.len(),
            "Calling Gemini for structured output"
        );

        let request = GenerateRequest::new(system_prompt, user_prompt).response_schema(schema);

        let response = self
            .client
            .structured_output(&self.model, request)
            .await
            .map_err(|e| {
                tracing::error!(
                    error = %e,
                    model = %self.model,
                    "Gemini structured output call failed"
                );
                e
            })
            .context("Failed to call Gemini API")?;

        tracing::debug!(
            response_length = response.len(),
            model = %self.model,
            "Gemini response received"
        );

        Ok(response)
    }
}
