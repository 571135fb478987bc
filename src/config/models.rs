use serde::{Deserialize, Serialize};

use super::constants::{
    DEFAULT_API_BASE, DEFAULT_API_KEY_ENV, DEFAULT_MODEL, DEFAULT_QUERY, DEFAULT_SYSTEM_PROMPT,
};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub provider: Provider,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_system_prompt")]
    pub system_prompt: String,
    #[serde(default = "default_query")]
    pub query: String,
    #[serde(default)]
    pub on_missing_arguments: MissingArgumentsPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            provider: Provider::default(),
            model: default_model(),
            system_prompt: default_system_prompt(),
            query: default_query(),
            on_missing_arguments: MissingArgumentsPolicy::default(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Provider {
    #[serde(default = "default_provider_key")]
    pub key: String,
    #[serde(default = "default_api_base")]
    pub api_base: String,
    /// Name of the environment variable holding the API key.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_seconds: Option<u64>,
}

impl Default for Provider {
    fn default() -> Self {
        Self {
            key: default_provider_key(),
            api_base: default_api_base(),
            api_key_env: default_api_key_env(),
            timeout_seconds: None,
        }
    }
}

impl Provider {
    /// Reads the credential from the configured environment variable. An unset
    /// variable yields an empty key and the remote service rejects the call.
    pub fn resolve_api_key(&self) -> String {
        std::env::var(&self.api_key_env).unwrap_or_default()
    }
}

/// What to do when a tool call omits one of the tool's required arguments.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum MissingArgumentsPolicy {
    /// Do not invoke the tool and append no tool message.
    #[default]
    Skip,
    /// Append a tool message describing the missing arguments.
    Report,
}

fn default_provider_key() -> String {
    "openai".to_string()
}

fn default_api_base() -> String {
    DEFAULT_API_BASE.to_string()
}

fn default_api_key_env() -> String {
    DEFAULT_API_KEY_ENV.to_string()
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_system_prompt() -> String {
    DEFAULT_SYSTEM_PROMPT.to_string()
}

fn default_query() -> String {
    DEFAULT_QUERY.to_string()
}
