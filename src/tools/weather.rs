use serde_json::json;

use super::types::ToolArguments;
use crate::models::tool_definition::{FunctionDefinition, ToolDefinition};

pub const GET_WEATHER: &str = "get_weather";

pub fn weather_tool_definition() -> ToolDefinition {
    ToolDefinition::function(FunctionDefinition {
        name: GET_WEATHER.to_string(),
        description: Some("Get current temperature for a given location.".to_string()),
        parameters: Some(json!({
            "type": "object",
            "properties": {
                "location": {
                    "type": "string",
                    "description": "City and country e.g. Paris, France"
                }
            },
            "required": ["location"],
            "additionalProperties": false
        })),
        strict: Some(true),
    })
}

/// Mock weather lookup with a fixed forecast.
pub fn get_weather(args: &ToolArguments) -> String {
    let location = args.text("location").unwrap_or_default();
    format!("The weather in {location} is sunny and 75°F.")
}
