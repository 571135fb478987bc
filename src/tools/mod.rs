pub mod registry;
pub mod types;
pub mod weather;

pub use registry::ToolRegistry;
pub use types::{DispatchOutcome, ToolArguments, ToolError};

/// Registry holding every tool this program offers the model.
pub fn default_registry() -> ToolRegistry {
    let mut registry = ToolRegistry::new();
    registry.register(weather::weather_tool_definition(), weather::get_weather);
    registry
}
