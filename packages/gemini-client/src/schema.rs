//! Type-safe schema generation for Gemini structured outputs.
//!
//! Uses the `schemars` crate to automatically generate JSON schemas from Rust types.
//!
//! # Example
//!
//! ```rust,ignore
//! use schemars::JsonSchema;
//! use serde::Deserialize;
//! use gemini_client::StructuredOutput;
//!
//! #[derive(Deserialize, JsonSchema)]
//! struct FaqAnswer {
//!     answer: String,
//! }
//!
//! // Get a Gemini-compatible response schema
//! let schema = FaqAnswer::response_schema();
//! ```

use schemars::{schema_for, JsonSchema};
use serde::de::DeserializeOwned;

/// Formats the Gemini schema dialect understands.
///
/// Anything else (schemars emits `uint32`, `uint64`, ...) is rejected by the
/// API and has to be dropped.
const SUPPORTED_FORMATS: &[&str] = &["float", "double", "int32", "int64", "enum", "date-time"];

/// Trait for types that can be used as a Gemini response schema.
///
/// Automatically implemented for any type that implements `JsonSchema + DeserializeOwned`.
pub trait StructuredOutput: JsonSchema + DeserializeOwned {
    /// Generate a Gemini-compatible response schema for this type.
    ///
    /// Gemini accepts an OpenAPI 3.0 schema subset, not full JSON Schema:
    /// 1. No `$ref` references, `definitions`, or `$schema` marker
    /// 2. No `additionalProperties` keyword
    /// 3. Optional fields use `nullable: true` instead of `"type": [T, "null"]`
    /// 4. Only a fixed set of `format` values is recognized
    ///
    /// This method transforms the schemars output to meet these requirements.
    fn response_schema() -> serde_json::Value {
        let schema = schema_for!(Self);
        let mut value = serde_json::to_value(schema).unwrap_or_default();

        // Step 1: Rewrite schemas (including definitions) into the accepted dialect
        sanitize_schemas(&mut value);

        // Step 2: Inline all $ref references
        inline_refs(&mut value);

        // Step 3: Remove the definitions section and $schema marker
        if let serde_json::Value::Object(map) = &mut value {
            map.remove("definitions");
            map.remove("$schema");
        }

        value
    }

    /// Get the schema name for this type.
    fn type_name() -> String {
        <Self as JsonSchema>::schema_name()
    }
}

// Blanket implementation for all types that satisfy the bounds
impl<T: JsonSchema + DeserializeOwned> StructuredOutput for T {}

/// Rewrite every schema node into the Gemini dialect.
///
/// Drops `additionalProperties`, converts `"type": [T, "null"]` to
/// `nullable: true`, and removes unsupported `format` values.
fn sanitize_schemas(value: &mut serde_json::Value) {
    match value {
        serde_json::Value::Object(map) => {
            map.remove("additionalProperties");

            // schemars encodes Option<T> as a two-element type array with "null"
            if let Some(serde_json::Value::Array(types)) = map.get("type") {
                if types.len() == 2 && types.iter().any(|t| t == "null") {
                    if let Some(actual) = types.iter().find(|t| *t != "null").cloned() {
                        map.insert("type".to_string(), actual);
                        map.insert("nullable".to_string(), serde_json::Value::Bool(true));
                    }
                }
            }

            if let Some(serde_json::Value::String(format)) = map.get("format") {
                if !SUPPORTED_FORMATS.contains(&format.as_str()) {
                    map.remove("format");
                }
            }

            // Recurse into nested schemas
            for (_, v) in map.iter_mut() {
                sanitize_schemas(v);
            }
        }
        serde_json::Value::Array(arr) => {
            for item in arr.iter_mut() {
                sanitize_schemas(item);
            }
        }
        _ => {}
    }
}

/// Inline all $ref references by replacing them with the actual schema from definitions.
fn inline_refs(value: &mut serde_json::Value) {
    let definitions = if let serde_json::Value::Object(map) = value {
        map.get("definitions").cloned()
    } else {
        None
    };

    if let Some(defs) = definitions {
        inline_refs_recursive(value, &defs);
    }
}

/// Recursively inline $ref references.
fn inline_refs_recursive(value: &mut serde_json::Value, definitions: &serde_json::Value) {
    match value {
        serde_json::Value::Object(map) => {
            // Check if this object has a $ref
            if let Some(serde_json::Value::String(ref_path)) = map.get("$ref").cloned() {
                // Parse ref like "#/definitions/RoomSummary"
                if ref_path.starts_with("#/definitions/") {
                    let type_name = ref_path.trim_start_matches("#/definitions/");
                    if let Some(def) = definitions.get(type_name) {
                        // Replace this object with the inlined definition
                        *value = def.clone();
                        // Recursively inline any nested refs in the inlined schema
                        inline_refs_recursive(value, definitions);
                        return;
                    }
                }
            }

            // Recurse into nested values
            for (_, v) in map.iter_mut() {
                inline_refs_recursive(v, definitions);
            }
        }
        serde_json::Value::Array(arr) => {
            for item in arr.iter_mut() {
                inline_refs_recursive(item, definitions);
            }
        }
        _ => {}
    }
}
