use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, warn};

use super::types::{DispatchOutcome, ToolArguments, ToolError};
use crate::models::content::ChatCompletionMessage;
use crate::models::tool_calls::ChatMessageToolCall;
use crate::models::tool_definition::ToolDefinition;

/// Uniform signature of a local tool implementation.
pub type ToolHandler = Arc<dyn Fn(&ToolArguments) -> String + Send + Sync>;

struct RegisteredTool {
    definition: ToolDefinition,
    required: Vec<String>,
    handler: ToolHandler,
}

/// Maps tool names announced to the model onto local functions.
#[derive(Default)]
pub struct ToolRegistry {
    tools: HashMap<String, RegisteredTool>,
    order: Vec<String>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<F>(&mut self, definition: ToolDefinition, handler: F) -> &mut Self
    where
        F: Fn(&ToolArguments) -> String + Send + Sync + 'static,
    {
        let name = definition.function.name.clone();
        let required = definition.required_parameters();
        let entry = RegisteredTool {
            definition,
            required,
            handler: Arc::new(handler),
        };
        if self.tools.insert(name.clone(), entry).is_some() {
            warn!(tool = %name, "Tool registered twice, keeping the latest handler");
        } else {
            self.order.push(name);
        }
        self
    }

    pub fn contains(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Definitions of every registered tool, in registration order.
    pub fn definitions(&self) -> Vec<ToolDefinition> {
        self.order
            .iter()
            .filter_map(|name| self.tools.get(name))
            .map(|tool| tool.definition.clone())
            .collect()
    }

    /// Resolves one tool call. Unknown tools and undecodable arguments are
    /// errors; required arguments that were not provided are reported
    /// without invoking the handler.
    pub fn dispatch(&self, call: &ChatMessageToolCall) -> Result<DispatchOutcome, ToolError> {
        let name = &call.function.name;
        let tool = self
            .tools
            .get(name)
            .ok_or_else(|| ToolError::UnknownTool(name.clone()))?;

        let args = ToolArguments::parse(name, &call.function.arguments)?;

        let missing: Vec<String> = tool
            .required
            .iter()
            .filter(|param| !args.is_provided(param))
            .cloned()
            .collect();
        if !missing.is_empty() {
            warn!(
                tool = %name,
                tool_call_id = %call.id,
                missing = ?missing,
                "Tool call is missing required arguments"
            );
            return Ok(DispatchOutcome::MissingArguments {
                tool_call_id: call.id.clone(),
                name: name.clone(),
                missing,
            });
        }

        let output = (tool.handler)(&args);
        debug!(tool = %name, tool_call_id = %call.id, output = %output, "Tool call completed");

        Ok(DispatchOutcome::Completed(ChatCompletionMessage::tool(
            name.clone(),
            call.id.clone(),
            output,
        )))
    }
}
