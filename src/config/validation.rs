use super::models::Config;

/// Validates the logical consistency of a Config.
/// Returns Ok(()) if valid, or Err(Vec<String>) with a list of error messages if invalid.
pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if config.model.trim().is_empty() {
        errors.push("Model name must not be empty.".to_string());
    }

    if config.query.trim().is_empty() {
        errors.push("Query must not be empty.".to_string());
    }

    let api_base = &config.provider.api_base;
    if !(api_base.starts_with("http://") || api_base.starts_with("https://")) {
        errors.push(format!(
            "Provider '{}' api_base '{}' must start with http:// or https://.",
            config.provider.key, api_base
        ));
    }

    if config.provider.api_key_env.trim().is_empty() {
        errors.push(format!(
            "Provider '{}' api_key_env must name an environment variable.",
            config.provider.key
        ));
    }

    if config.provider.timeout_seconds == Some(0) {
        errors.push(format!(
            "Provider '{}' timeout_seconds must be greater than zero.",
            config.provider.key
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
