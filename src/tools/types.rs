use serde_json::{Map, Value};
use thiserror::Error;

use crate::config::models::MissingArgumentsPolicy;
use crate::models::content::ChatCompletionMessage;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ToolError {
    #[error("Unknown tool requested: {0}")]
    UnknownTool(String),

    #[error("Invalid arguments for tool {name}: {reason}")]
    InvalidArguments { name: String, reason: String },
}

/// Decoded argument object of one tool call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToolArguments(Map<String, Value>);

impl ToolArguments {
    pub fn parse(name: &str, raw: &str) -> Result<Self, ToolError> {
        let value: Value =
            serde_json::from_str(raw).map_err(|e| ToolError::InvalidArguments {
                name: name.to_string(),
                reason: e.to_string(),
            })?;
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(ToolError::InvalidArguments {
                name: name.to_string(),
                reason: format!("expected a JSON object, got {other}"),
            }),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// The argument rendered as text: strings as-is, other values as JSON.
    pub fn text(&self, key: &str) -> Option<String> {
        match self.0.get(key)? {
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Absent, null and empty-string arguments all count as not provided.
    pub fn is_provided(&self, key: &str) -> bool {
        match self.0.get(key) {
            None | Some(Value::Null) => false,
            Some(Value::String(s)) => !s.is_empty(),
            Some(_) => true,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DispatchOutcome {
    /// The tool ran; the message answers the originating call.
    Completed(ChatCompletionMessage),
    /// The tool was not invoked because required arguments were not provided.
    MissingArguments {
        tool_call_id: String,
        name: String,
        missing: Vec<String>,
    },
}

impl DispatchOutcome {
    /// The message to append to the conversation, if any, under `policy`.
    pub fn into_message(self, policy: MissingArgumentsPolicy) -> Option<ChatCompletionMessage> {
        match self {
            DispatchOutcome::Completed(message) => Some(message),
            DispatchOutcome::MissingArguments {
                tool_call_id,
                name,
                missing,
            } => match policy {
                MissingArgumentsPolicy::Skip => None,
                MissingArgumentsPolicy::Report => Some(ChatCompletionMessage::tool(
                    name,
                    tool_call_id,
                    format!(
                        "Error: missing required argument(s): {}",
                        missing.join(", ")
                    ),
                )),
            },
        }
    }
}
