use jsonschema::JSONSchema;
use serde_json::Value;

const PAGE_SPEC_SCHEMA: &str = include_str!("../../../schemas/page-spec.json");

pub struct SchemaValidator {
    schema: JSONSchema,
}

impl SchemaValidator {
    pub fn new() -> Result<Self, String> {
        let schema_json: Value = serde_json::from_str(PAGE_SPEC_SCHEMA)
            .map_err(|e| format!("Failed to parse page spec schema: {}", e))?;

        let schema = JSONSchema::compile(&schema_json)
            .map_err(|e| format!("Failed to compile JSON schema: {}", e))?;

        Ok(Self { schema })
    }

    pub fn validate_document(&self, content: &str) -> Result<(), String> {
        // Parse YAML to JSON Value
        let document: Value = serde_yaml::from_str(content)
            .map_err(|e| format!("Failed to parse spec YAML: {}", e))?;

        // Validate against schema
        if let Err(errors) = self.schema.validate(&document) {
            let mut error_msg = String::from("Page spec validation failed:\n");
            for error in errors {
                error_msg.push_str(&format!("- {}\n", error));
            }
            return Err(error_msg);
        }

        Ok(())
    }
}
