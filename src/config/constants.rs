use std::env;

pub const DEFAULT_CONFIG_PATH: &str = "config.yaml";
pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";
pub const DEFAULT_API_KEY_ENV: &str = "OPENAI_API_KEY";
pub const DEFAULT_MODEL: &str = "gpt-4";
pub const DEFAULT_SYSTEM_PROMPT: &str = "You are a helpful assistant.";
pub const DEFAULT_QUERY: &str = "What is the weather in Paris?";

/// Path of the YAML config file, and whether it was set explicitly.
pub fn config_file_path() -> (String, bool) {
    match env::var("CONFIG_FILE_PATH") {
        Ok(path) if !path.trim().is_empty() => (path, true),
        _ => (DEFAULT_CONFIG_PATH.to_string(), false),
    }
}
