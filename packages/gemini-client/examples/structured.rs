//! Structured output example with a typed response schema

use gemini_client::GeminiClient;
use schemars::JsonSchema;
use serde::Deserialize;

#[derive(Debug, Deserialize, JsonSchema)]
struct GeneratedDescription {
    description: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = GeminiClient::from_env()?;

    let system = "You are a real estate copywriter. Write a single flowing paragraph.";
    let user = "Property: Sunrise PG, Chennai. Amenities: Wi-Fi, Food, Housekeeping. \
                Room types: Single Sharing, Double Sharing.";

    let result: GeneratedDescription = client
        .extract::<GeneratedDescription>("gemini-2.5-flash", system, user)
        .await?;

    println!("Description:\n{}", result.description);

    Ok(())
}
