//! Tool descriptors as reported by the gateway's tool listing

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::category::Category;
use crate::lenient::or_default;

/// A named operation exposed by the gateway
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolDescriptor {
    /// Tool name (e.g., "search_contacts")
    pub name: String,
    /// Human-readable description, empty when absent or not a string
    #[serde(default, deserialize_with = "or_default")]
    pub description: String,
    /// JSON schema for input parameters
    #[serde(default)]
    pub input_schema: Value,
}

impl ToolDescriptor {
    /// Create a descriptor with an empty object schema
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {}
            }),
        }
    }

    /// Set input schema
    pub fn with_schema(mut self, schema: Value) -> Self {
        self.input_schema = schema;
        self
    }

    pub fn category(&self) -> Category {
        Category::classify(&self.name)
    }

    /// Names of required input properties, if the schema lists any
    pub fn required_params(&self) -> Vec<&str> {
        self.input_schema["required"]
            .as_array()
            .map(|req| req.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }
}

/// Exact-name lookup in a tool listing
pub fn find_tool<'a>(tools: &'a [ToolDescriptor], name: &str) -> Option<&'a ToolDescriptor> {
    tools.iter().find(|t| t.name == name)
}
