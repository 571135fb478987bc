use thiserror::Error;

use super::models::Config;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: String,
        source: serde_yaml::Error,
    },
}

pub fn load_config(path: &str) -> Result<Config, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_string(),
        source,
    })?;
    let config: Config = serde_yaml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_string(),
        source,
    })?;
    Ok(config)
}

/// Loads the config file if one exists. A missing file at the default
/// location falls back to built-in defaults; a missing file that was asked
/// for explicitly is an error.
pub fn load_config_or_default(path: &str, explicit: bool) -> Result<Config, ConfigError> {
    if !explicit && !std::path::Path::new(path).exists() {
        return Ok(Config::default());
    }
    load_config(path)
}
