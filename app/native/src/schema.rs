//! JSON Schema for the configuration file.

use crate::config::GalleryMotionConfig;

/// Public URL of the published schema, also written into new config files.
pub const SCHEMA_URL: &str =
    "https://raw.githubusercontent.com/gallery-motion/gallery-motion/main/gallery-motion.schema.json";

/// Generates a JSON Schema for the Gallery Motion configuration.
#[must_use]
pub fn generate_schema() -> schemars::Schema {
    let mut schema = schemars::schema_for!(GalleryMotionConfig);

    if let Some(obj) = schema.as_object_mut() {
        obj.insert("$id".to_string(), serde_json::json!(SCHEMA_URL));
    }

    schema
}

/// Generates a pretty-printed JSON Schema string.
#[must_use]
pub fn generate_schema_json() -> String {
    let schema = generate_schema();
    serde_json::to_string_pretty(&schema).unwrap_or_default()
}

/// Returns the schema, ready to print.
#[must_use]
pub fn print_schema() -> String { generate_schema_json() }

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_schema_produces_valid_json() {
        let parsed: serde_json::Value = serde_json::from_str(&generate_schema_json()).unwrap();

        assert_eq!(parsed["$id"], SCHEMA_URL);
        assert_eq!(parsed["$schema"], "https://json-schema.org/draft/2020-12/schema");
        assert_eq!(parsed["title"], "GalleryMotionConfig");
        assert!(parsed["properties"]["motion"].is_object());
        assert!(parsed["properties"]["thumbnail"].is_object());
    }

    #[test]
    fn test_schema_contains_motion_definitions() {
        let parsed: serde_json::Value = serde_json::from_str(&generate_schema_json()).unwrap();

        let motion = &parsed["$defs"]["MotionConfig"];
        assert!(motion.is_object());
        assert!(motion["properties"]["openDuration"].is_object());
        assert!(parsed["$defs"]["EasingType"].is_object());
    }
}
