pub mod constants;
pub mod lib;
pub mod models;
pub mod validation;

pub use lib::{ConfigError, load_config, load_config_or_default};
