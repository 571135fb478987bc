use serde::{Deserialize, Serialize};
use std::fmt;

use super::tool_calls::ChatMessageToolCall;

#[derive(Deserialize, Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
    Tool,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::System => write!(f, "system"),
            Role::User => write!(f, "user"),
            Role::Assistant => write!(f, "assistant"),
            Role::Tool => write!(f, "tool"),
        }
    }
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum ChatMessageContent {
    String(String),
    Array(Vec<ChatMessageContentPart>),
}

impl ChatMessageContent {
    /// Flattens array content by concatenating its text parts.
    pub fn text(&self) -> String {
        match self {
            ChatMessageContent::String(text) => text.clone(),
            ChatMessageContent::Array(parts) => parts
                .iter()
                .filter(|part| part.r#type == "text")
                .map(|part| part.text.as_str())
                .collect(),
        }
    }
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct ChatMessageContentPart {
    #[serde(rename = "type")]
    pub r#type: String,
    pub text: String,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct ChatCompletionMessage {
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<ChatMessageContent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_calls: Option<Vec<ChatMessageToolCall>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_call_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refusal: Option<String>,
}

impl ChatCompletionMessage {
    fn with_text(role: Role, text: impl Into<String>) -> Self {
        Self {
            role,
            content: Some(ChatMessageContent::String(text.into())),
            name: None,
            tool_calls: None,
            tool_call_id: None,
            refusal: None,
        }
    }

    pub fn system(text: impl Into<String>) -> Self {
        Self::with_text(Role::System, text)
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::with_text(Role::User, text)
    }

    /// A tool result answering the request identified by `tool_call_id`.
    pub fn tool(
        name: impl Into<String>,
        tool_call_id: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            tool_call_id: Some(tool_call_id.into()),
            ..Self::with_text(Role::Tool, text)
        }
    }

    pub fn text(&self) -> Option<String> {
        self.content.as_ref().map(ChatMessageContent::text)
    }

    /// Tool calls requested by this message; empty when there are none.
    pub fn requested_tool_calls(&self) -> &[ChatMessageToolCall] {
        self.tool_calls.as_deref().unwrap_or_default()
    }
}
