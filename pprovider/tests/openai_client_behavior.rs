#![cfg(feature = "provider-openai")]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use pprovider::adapters::openai::{
    OpenAiAssistantMessage, OpenAiAuth, OpenAiClient, OpenAiFinishReason, OpenAiRequest,
    OpenAiResponse, OpenAiTransport, OpenAiUsage,
};
use pprovider::{
    CompletionClient, CompletionError, CompletionErrorKind, CompletionHooks, CompletionOptions,
    FinishReason, Message, ProviderFuture, Response, Role,
};

#[derive(Debug)]
struct FakeTransport {
    outcome: Result<OpenAiResponse, CompletionError>,
    captured_auth: Mutex<Option<String>>,
    captured_request: Mutex<Option<OpenAiRequest>>,
}

impl FakeTransport {
    fn replying(content: &str, finish_reason: OpenAiFinishReason) -> Self {
        Self::with_outcome(Ok(OpenAiResponse {
            object: "chat.completion".to_string(),
            created: 1_700_000_000,
            model: "gpt-4o-mini".to_string(),
            usage: OpenAiUsage {
                prompt_tokens: 7,
                completion_tokens: 3,
                total_tokens: 10,
                reasoning_tokens: None,
            },
            system_fingerprint: Some("fp_abc".to_string()),
            message: OpenAiAssistantMessage {
                content: content.to_string(),
                refusal: None,
            },
            finish_reason,
        }))
    }

    fn with_outcome(outcome: Result<OpenAiResponse, CompletionError>) -> Self {
        Self {
            outcome,
            captured_auth: Mutex::new(None),
            captured_request: Mutex::new(None),
        }
    }

    fn captured_auth(&self) -> Option<String> {
        self.captured_auth.lock().expect("auth lock").clone()
    }

    fn captured_request(&self) -> Option<OpenAiRequest> {
        self.captured_request.lock().expect("request lock").clone()
    }
}

impl OpenAiTransport for FakeTransport {
    fn complete<'a>(
        &'a self,
        request: OpenAiRequest,
        auth: OpenAiAuth,
    ) -> ProviderFuture<'a, Result<OpenAiResponse, CompletionError>> {
        Box::pin(async move {
            *self.captured_request.lock().expect("request lock") = Some(request);
            *self.captured_auth.lock().expect("auth lock") = Some(match auth {
                OpenAiAuth::ApiKey(value) => value.expose().to_string(),
            });

            self.outcome.clone()
        })
    }
}

#[derive(Default)]
struct RecordingHooks {
    events: Mutex<Vec<String>>,
}

impl CompletionHooks for RecordingHooks {
    fn on_request_start(&self, model: &str, message_count: usize) {
        self.events
            .lock()
            .expect("events lock")
            .push(format!("start:{model}:{message_count}"));
    }

    fn on_success(&self, response: &Response, _elapsed: Duration) {
        self.events
            .lock()
            .expect("events lock")
            .push(format!("success:{}", response.message.content));
    }

    fn on_failure(&self, _model: &str, error: &CompletionError, _elapsed: Duration) {
        self.events
            .lock()
            .expect("events lock")
            .push(format!("failure:{:?}", error.kind));
    }
}

#[tokio::test]
async fn complete_maps_stop_response_and_forwards_messages() {
    let transport = Arc::new(FakeTransport::replying("hello world", OpenAiFinishReason::Stop));
    let client = OpenAiClient::new(transport.clone()).without_environment_key();
    let options = CompletionOptions::new("gpt-4o")
        .with_api_key("sk-live-123")
        .with_temperature(0.2);

    let response = client
        .complete(
            vec![Message::system("Be very succinct"), Message::user("hi")],
            &options,
        )
        .await
        .expect("completion should succeed");

    assert_eq!(response.message, Message::assistant("hello world"));
    assert_eq!(response.object, "chat.completion");
    assert_eq!(response.usage.total_tokens, 10);
    assert_eq!(response.system_fingerprint.as_deref(), Some("fp_abc"));

    assert_eq!(transport.captured_auth().as_deref(), Some("sk-live-123"));
    let request = transport.captured_request().expect("request captured");
    assert_eq!(request.model, "gpt-4o");
    assert_eq!(request.generation.temperature, Some(0.2));
    assert_eq!(request.messages.len(), 2);
    assert_eq!(request.messages[0].role, Role::System);
    assert_eq!(request.messages[1], Message::user("hi"));
}

#[tokio::test]
async fn options_key_overrides_client_default_key() {
    let transport = Arc::new(FakeTransport::replying("ok", OpenAiFinishReason::Stop));
    let client = OpenAiClient::new(transport.clone()).with_default_api_key("sk-default");

    client
        .complete(vec![Message::user("hi")], &CompletionOptions::default())
        .await
        .expect("default key should authenticate");
    assert_eq!(transport.captured_auth().as_deref(), Some("sk-default"));

    let options = CompletionOptions::default().with_api_key("sk-override");
    client
        .complete(vec![Message::user("hi")], &options)
        .await
        .expect("override key should authenticate");
    assert_eq!(transport.captured_auth().as_deref(), Some("sk-override"));
}

#[tokio::test]
async fn missing_credential_fails_before_transport() {
    let transport = Arc::new(FakeTransport::replying("unused", OpenAiFinishReason::Stop));
    let client = OpenAiClient::new(transport.clone()).without_environment_key();

    let err = client
        .complete(vec![Message::user("hi")], &CompletionOptions::default())
        .await
        .expect_err("no credential must fail");

    assert_eq!(err.kind, CompletionErrorKind::Authentication);
    assert!(transport.captured_request().is_none());
}

#[tokio::test]
async fn invalid_requests_never_reach_transport() {
    let transport = Arc::new(FakeTransport::replying("unused", OpenAiFinishReason::Stop));
    let client = OpenAiClient::new(transport.clone()).with_default_api_key("sk-default");

    let err = client
        .complete(Vec::new(), &CompletionOptions::default())
        .await
        .expect_err("empty messages must fail");
    assert_eq!(err.kind, CompletionErrorKind::InvalidRequest);

    let err = client
        .complete(vec![Message::user("hi")], &CompletionOptions::new(""))
        .await
        .expect_err("blank model must fail");
    assert_eq!(err.kind, CompletionErrorKind::InvalidRequest);

    assert!(transport.captured_request().is_none());
}

#[tokio::test]
async fn non_stop_finish_reasons_are_incomplete_generations() {
    for (reason, expected) in [
        (OpenAiFinishReason::Length, FinishReason::Length),
        (OpenAiFinishReason::ContentFilter, FinishReason::ContentFilter),
        (OpenAiFinishReason::ToolCalls, FinishReason::ToolCalls),
        (OpenAiFinishReason::Other, FinishReason::Other),
    ] {
        let transport = Arc::new(FakeTransport::replying("partial", reason));
        let client = OpenAiClient::new(transport).with_default_api_key("sk-default");

        let err = client
            .complete(vec![Message::user("hi")], &CompletionOptions::default())
            .await
            .expect_err("non-stop must fail");

        assert_eq!(err.kind, CompletionErrorKind::IncompleteGeneration);
        assert_eq!(err.finish_reason, Some(expected));
    }
}

#[tokio::test]
async fn provider_and_transport_errors_pass_through_unmodified() {
    for error in [
        CompletionError::provider("The model `gpt-9` does not exist"),
        CompletionError::transport("connection refused"),
        CompletionError::timeout("operation timed out"),
    ] {
        let transport = Arc::new(FakeTransport::with_outcome(Err(error.clone())));
        let client = OpenAiClient::new(transport).with_default_api_key("sk-default");

        let err = client
            .complete(vec![Message::user("hi")], &CompletionOptions::default())
            .await
            .expect_err("transport failure must surface");
        assert_eq!(err, error);
    }
}

#[tokio::test]
async fn hooks_observe_success_and_failure() {
    let hooks = Arc::new(RecordingHooks::default());
    let ok_client = OpenAiClient::new(Arc::new(FakeTransport::replying(
        "done",
        OpenAiFinishReason::Stop,
    )))
    .with_default_api_key("sk-default")
    .with_hooks(hooks.clone());
    let failing_client = OpenAiClient::new(Arc::new(FakeTransport::replying(
        "cut",
        OpenAiFinishReason::Length,
    )))
    .with_default_api_key("sk-default")
    .with_hooks(hooks.clone());

    let options = CompletionOptions::default();
    ok_client
        .complete(vec![Message::user("one")], &options)
        .await
        .expect("first call succeeds");
    failing_client
        .complete(vec![Message::user("one"), Message::user("two")], &options)
        .await
        .expect_err("second call fails");

    let events = hooks.events.lock().expect("events lock").clone();
    assert_eq!(
        events,
        vec![
            "start:gpt-4o-mini:1".to_string(),
            "success:done".to_string(),
            "start:gpt-4o-mini:2".to_string(),
            "failure:IncompleteGeneration".to_string(),
        ]
    );
}
