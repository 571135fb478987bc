use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct FunctionCall {
    /// JSON-encoded argument object, exactly as produced by the model.
    pub arguments: String,
    pub name: String,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct ChatMessageToolCall {
    pub id: String,
    pub function: FunctionCall,
    #[serde(rename = "type", default = "default_tool_call_type")]
    pub r#type: String, // Using `function` as the only valid value
}

fn default_tool_call_type() -> String {
    "function".to_string()
}
