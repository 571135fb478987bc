use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ToolDefinition {
    pub function: FunctionDefinition,

    #[serde(rename = "type")]
    pub tool_type: String, // Will only accept "function" value
}

impl ToolDefinition {
    pub fn function(function: FunctionDefinition) -> Self {
        Self {
            function,
            tool_type: "function".to_string(),
        }
    }

    /// Names listed under `parameters.required` in the JSON schema.
    pub fn required_parameters(&self) -> Vec<String> {
        self.function
            .parameters
            .as_ref()
            .and_then(|schema| schema.get("required"))
            .and_then(|required| required.as_array())
            .map(|names| {
                names
                    .iter()
                    .filter_map(|name| name.as_str().map(str::to_string))
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// A definition of a function that can be called.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct FunctionDefinition {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strict: Option<bool>,
}
