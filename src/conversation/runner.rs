use std::io::Write;

use thiserror::Error;
use tracing::{info, warn};

use crate::config::models::MissingArgumentsPolicy;
use crate::models::chat::{ChatCompletion, ChatCompletionRequest};
use crate::models::content::ChatCompletionMessage;
use crate::providers::provider::{Provider, ProviderError};
use crate::tools::{DispatchOutcome, ToolError, ToolRegistry};

const FIRST_CALL_BANNER: &str = "-------- First API Call --------";
const SECOND_CALL_BANNER: &str = "-------- Second API Call --------";
const ANSWER_SEPARATOR: &str = "-----";

#[derive(Debug, Error)]
pub enum ConversationError {
    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error(transparent)]
    Tool(#[from] ToolError),

    #[error("Completion for round {round} contained no choices")]
    EmptyResponse { round: u8 },

    #[error("Failed to write console output: {0}")]
    Output(#[from] std::io::Error),

    #[error("Failed to render response: {0}")]
    Render(#[from] serde_json::Error),
}

#[derive(Debug, Clone)]
pub struct ConversationOutcome {
    /// Full history, including the assistant turns and tool results.
    pub messages: Vec<ChatCompletionMessage>,
    pub first_response: ChatCompletion,
    /// Present only when the first response requested tools.
    pub second_response: Option<ChatCompletion>,
    pub final_answer: String,
}

/// The system prompt followed by the user's query.
pub fn initial_messages(system_prompt: &str, query: &str) -> Vec<ChatCompletionMessage> {
    vec![
        ChatCompletionMessage::system(system_prompt),
        ChatCompletionMessage::user(query),
    ]
}

/// Drives the call / run tools / call again exchange against one provider.
pub struct ConversationRunner<'a> {
    provider: &'a dyn Provider,
    tools: &'a ToolRegistry,
    model: String,
    on_missing_arguments: MissingArgumentsPolicy,
}

impl<'a> ConversationRunner<'a> {
    pub fn new(provider: &'a dyn Provider, tools: &'a ToolRegistry, model: impl Into<String>) -> Self {
        Self {
            provider,
            tools,
            model: model.into(),
            on_missing_arguments: MissingArgumentsPolicy::default(),
        }
    }

    pub fn with_missing_arguments_policy(mut self, policy: MissingArgumentsPolicy) -> Self {
        self.on_missing_arguments = policy;
        self
    }

    async fn complete(
        &self,
        messages: &[ChatCompletionMessage],
        round: u8,
    ) -> Result<ChatCompletion, ConversationError> {
        info!(
            provider = %self.provider.key(),
            model = %self.model,
            round,
            messages = messages.len(),
            "Calling chat completions"
        );
        let request =
            ChatCompletionRequest::new(&self.model, messages.to_vec(), self.tools.definitions());
        Ok(self.provider.chat_completions(request).await?)
    }

    /// Runs the exchange, writing the console transcript to `out`.
    pub async fn run<W: Write>(
        &self,
        mut messages: Vec<ChatCompletionMessage>,
        out: &mut W,
    ) -> Result<ConversationOutcome, ConversationError> {
        writeln!(out, "{FIRST_CALL_BANNER}")?;
        let first_response = self.complete(&messages, 1).await?;
        writeln!(out, "{}", serde_json::to_string_pretty(&first_response)?)?;

        let reply = first_response
            .first_message()
            .cloned()
            .ok_or(ConversationError::EmptyResponse { round: 1 })?;

        if reply.requested_tool_calls().is_empty() {
            info!("No tool calls requested, using the first answer");
            let final_answer = answer_text(&reply);
            messages.push(reply);
            write_answer(out, &final_answer)?;
            return Ok(ConversationOutcome {
                messages,
                first_response,
                second_response: None,
                final_answer,
            });
        }

        let tool_calls = reply.requested_tool_calls().to_vec();
        messages.push(reply);

        for call in &tool_calls {
            writeln!(out, "Tool Call: {}", serde_json::to_string(call)?)?;
            let outcome = self.tools.dispatch(call)?;
            if let DispatchOutcome::Completed(message) = &outcome {
                writeln!(out, "Function Response: {}", answer_text(message))?;
            }
            match outcome.into_message(self.on_missing_arguments) {
                Some(message) => messages.push(message),
                None => warn!(
                    tool_call_id = %call.id,
                    "Tool call left unanswered, the model may reference it in the next round"
                ),
            }
        }

        writeln!(out, "{SECOND_CALL_BANNER}")?;
        let second_response = self.complete(&messages, 2).await?;
        writeln!(out, "{}", serde_json::to_string_pretty(&second_response)?)?;

        let final_message = second_response
            .first_message()
            .cloned()
            .ok_or(ConversationError::EmptyResponse { round: 2 })?;
        let final_answer = answer_text(&final_message);
        messages.push(final_message);
        write_answer(out, &final_answer)?;

        Ok(ConversationOutcome {
            messages,
            first_response,
            second_response: Some(second_response),
            final_answer,
        })
    }
}

fn answer_text(message: &ChatCompletionMessage) -> String {
    message.text().unwrap_or_else(|| {
        warn!(role = %message.role, "Message has no text content");
        String::new()
    })
}

fn write_answer<W: Write>(out: &mut W, answer: &str) -> std::io::Result<()> {
    writeln!(out, "{ANSWER_SEPARATOR}")?;
    writeln!(out, "{answer}")
}
