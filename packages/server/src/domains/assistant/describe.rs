//! Listing copy assistant - drafts marketing descriptions for new listings.

use anyhow::{Context, Result};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::kernel::{BaseGenerativeAi, StructuredOutput};

const DESCRIBE_SYSTEM_PROMPT: &str = "\
You are a real estate marketing expert writing listings for RoomVerse, a co-living and rental platform.

Write a compelling and attractive property description based on the details provided. Highlight the lifestyle, comfort, and convenience the property offers. Keep the tone warm and inviting, and keep it to a single paragraph.";

/// Input for the listing copy assistant.
///
/// Free-form strings straight from the landlord's new-listing form;
/// amenities arrive as one comma-separated field.
#[derive(Debug, Clone)]
pub struct DescriptionInput {
    pub property_type: String,
    pub location: String,
    pub amenities: String,
}

/// Structured output contract for the listing copy assistant.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct GeneratedDescription {
    /// A compelling and attractive description for the property listing.
    pub description: String,
}

/// Draft a marketing description from the landlord's listing details.
pub async fn generate_property_description(
    input: &DescriptionInput,
    ai: &dyn BaseGenerativeAi,
) -> Result<GeneratedDescription> {
    debug!(
        property_type = %input.property_type,
        location = %input.location,
        "Generating property description"
    );

    let user_prompt = format!(
        "Property Type: {}\nLocation: {}\nAmenities: {}",
        input.property_type, input.location, input.amenities
    );

    let raw = ai
        .generate_structured(
            DESCRIBE_SYSTEM_PROMPT,
            &user_prompt,
            GeneratedDescription::response_schema(),
        )
        .await?;

    serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse generated description: {raw}"))
}
