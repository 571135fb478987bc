use toolcall_lib::config::models::MissingArgumentsPolicy;
use toolcall_lib::conversation::{ConversationError, ConversationRunner, initial_messages};
use toolcall_lib::models::content::Role;
use toolcall_lib::providers::ProviderError;
use toolcall_lib::tools::{ToolError, default_registry};

use super::helpers::*;

fn paris() -> Vec<toolcall_lib::models::content::ChatCompletionMessage> {
    initial_messages("You are a helpful assistant.", "What is the weather in Paris?")
}

#[tokio::test]
async fn test_no_tool_call_uses_first_answer() {
    let provider = ScriptedProvider::new(vec![Ok(text_completion("Hello there!"))]);
    let registry = default_registry();
    let runner = ConversationRunner::new(&provider, &registry, "gpt-4");

    let mut out = Vec::new();
    let outcome = runner.run(paris(), &mut out).await.unwrap();

    assert_eq!(outcome.final_answer, "Hello there!");
    assert!(outcome.second_response.is_none());
    assert_eq!(provider.requests().len(), 1);
    assert_eq!(outcome.messages.len(), 3);

    let transcript = String::from_utf8(out).unwrap();
    assert!(transcript.starts_with("-------- First API Call --------\n"));
    assert!(!transcript.contains("Second API Call"));
    assert!(transcript.ends_with("-----\nHello there!\n"));
}

#[tokio::test]
async fn test_paris_tool_call_round_trip() {
    let provider = ScriptedProvider::new(vec![
        Ok(tool_call_completion(&[(
            "call_abc",
            "get_weather",
            r#"{"location":"Paris"}"#,
        )])),
        Ok(text_completion("It is sunny and 75°F in Paris.")),
    ]);
    let registry = default_registry();
    let runner = ConversationRunner::new(&provider, &registry, "gpt-4");

    let mut out = Vec::new();
    let outcome = runner.run(paris(), &mut out).await.unwrap();

    assert_eq!(outcome.final_answer, "It is sunny and 75°F in Paris.");
    assert!(outcome.second_response.is_some());

    let requests = provider.requests();
    assert_eq!(requests.len(), 2);

    let second = &requests[1].messages;
    assert_eq!(second.len(), 4);
    assert_eq!(second[2].role, Role::Assistant);
    assert_eq!(second[2].requested_tool_calls()[0].id, "call_abc");
    assert_eq!(second[3].role, Role::Tool);
    assert_eq!(second[3].tool_call_id.as_deref(), Some("call_abc"));
    assert_eq!(second[3].name.as_deref(), Some("get_weather"));
    assert_eq!(
        second[3].text().as_deref(),
        Some("The weather in Paris is sunny and 75°F.")
    );

    // Tools are offered on both rounds.
    assert!(requests.iter().all(|r| r.tools.as_ref().is_some_and(|t| t.len() == 1)));

    let transcript = String::from_utf8(out).unwrap();
    assert!(transcript.contains("Tool Call: {\"id\":\"call_abc\""));
    assert!(transcript.contains("Function Response: The weather in Paris is sunny and 75°F.\n"));
    assert!(transcript.contains("-------- Second API Call --------\n"));
    assert!(transcript.ends_with("-----\nIt is sunny and 75°F in Paris.\n"));
}

#[tokio::test]
async fn test_each_tool_call_is_answered_with_its_own_id() {
    let provider = ScriptedProvider::new(vec![
        Ok(tool_call_completion(&[
            ("call_1", "get_weather", r#"{"location":"Paris"}"#),
            ("call_2", "get_weather", r#"{"location":"Tokyo, Japan"}"#),
        ])),
        Ok(text_completion("Both are sunny.")),
    ]);
    let registry = default_registry();
    let runner = ConversationRunner::new(&provider, &registry, "gpt-4");

    let outcome = runner.run(paris(), &mut Vec::new()).await.unwrap();

    let tool_messages: Vec<_> = outcome
        .messages
        .iter()
        .filter(|m| m.role == Role::Tool)
        .collect();
    assert_eq!(tool_messages.len(), 2);
    assert_eq!(tool_messages[0].tool_call_id.as_deref(), Some("call_1"));
    assert_eq!(tool_messages[1].tool_call_id.as_deref(), Some("call_2"));
    assert_eq!(
        tool_messages[1].text().as_deref(),
        Some("The weather in Tokyo, Japan is sunny and 75°F.")
    );
}

#[tokio::test]
async fn test_missing_location_appends_no_tool_message() {
    let provider = ScriptedProvider::new(vec![
        Ok(tool_call_completion(&[("call_1", "get_weather", "{}")])),
        Ok(text_completion("Which city?")),
    ]);
    let registry = default_registry();
    let runner = ConversationRunner::new(&provider, &registry, "gpt-4");

    let mut out = Vec::new();
    let outcome = runner.run(paris(), &mut out).await.unwrap();

    assert!(outcome.messages.iter().all(|m| m.role != Role::Tool));
    let second = &provider.requests()[1].messages;
    assert_eq!(second.len(), 3);
    assert_eq!(second[2].role, Role::Assistant);
    assert!(!String::from_utf8(out).unwrap().contains("Function Response"));
}

#[tokio::test]
async fn test_missing_location_reported_when_configured() {
    let provider = ScriptedProvider::new(vec![
        Ok(tool_call_completion(&[("call_1", "get_weather", r#"{"location": ""}"#)])),
        Ok(text_completion("Which city?")),
    ]);
    let registry = default_registry();
    let runner = ConversationRunner::new(&provider, &registry, "gpt-4")
        .with_missing_arguments_policy(MissingArgumentsPolicy::Report);

    runner.run(paris(), &mut Vec::new()).await.unwrap();

    let second = &provider.requests()[1].messages;
    assert_eq!(second.len(), 4);
    assert_eq!(second[3].tool_call_id.as_deref(), Some("call_1"));
    assert_eq!(
        second[3].text().as_deref(),
        Some("Error: missing required argument(s): location")
    );
}

#[tokio::test]
async fn test_unknown_tool_is_fatal() {
    let provider = ScriptedProvider::new(vec![Ok(tool_call_completion(&[(
        "call_1",
        "get_stock_price",
        r#"{"symbol":"ACME"}"#,
    )]))]);
    let registry = default_registry();
    let runner = ConversationRunner::new(&provider, &registry, "gpt-4");

    let err = runner.run(paris(), &mut Vec::new()).await.unwrap_err();
    assert!(matches!(
        err,
        ConversationError::Tool(ToolError::UnknownTool(ref name)) if name == "get_stock_price"
    ));
    assert_eq!(provider.requests().len(), 1);
}

#[tokio::test]
async fn test_provider_failure_is_fatal() {
    let provider = ScriptedProvider::new(vec![Err(ProviderError::HttpError {
        status: 401,
        body: "invalid api key".to_string(),
    })]);
    let registry = default_registry();
    let runner = ConversationRunner::new(&provider, &registry, "gpt-4");

    let err = runner.run(paris(), &mut Vec::new()).await.unwrap_err();
    assert!(matches!(
        err,
        ConversationError::Provider(ProviderError::HttpError { status: 401, .. })
    ));
}

#[tokio::test]
async fn test_empty_choices_is_fatal() {
    let provider = ScriptedProvider::new(vec![Ok(empty_completion())]);
    let registry = default_registry();
    let runner = ConversationRunner::new(&provider, &registry, "gpt-4");

    let err = runner.run(paris(), &mut Vec::new()).await.unwrap_err();
    assert!(matches!(err, ConversationError::EmptyResponse { round: 1 }));
}
