pub mod config;
pub mod conversation;
pub mod models;
pub mod providers;
pub mod tools;

pub use reqwest;
pub use serde;
pub use serde_json;
