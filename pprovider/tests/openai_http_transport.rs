#![cfg(feature = "provider-openai")]

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use pprovider::adapters::openai::{
    OpenAiAuth, OpenAiClient, OpenAiFinishReason, OpenAiHttpTransport, OpenAiRequest,
    OpenAiTransport,
};
use pprovider::{
    CompletionClient, CompletionErrorKind, CompletionOptions, FinishReason, Message, SecretString,
};
use serde_json::{Value, json};

/// Answers exactly one HTTP request with a canned response and hands back the raw request.
struct OneShotServer {
    base_url: String,
    handle: JoinHandle<String>,
}

impl OneShotServer {
    fn start(status_line: &'static str, content_type: &'static str, body: &'static str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind listener");
        let address = listener.local_addr().expect("local address");

        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().expect("accept connection");
            let request = read_request(&mut stream);
            let response = format!(
                "HTTP/1.1 {status_line}\r\nContent-Type: {content_type}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            stream
                .write_all(response.as_bytes())
                .expect("write response");
            request
        });

        Self {
            base_url: format!("http://{address}/v1"),
            handle,
        }
    }

    fn transport(&self) -> OpenAiHttpTransport {
        let http = reqwest::Client::builder()
            .no_proxy()
            .build()
            .expect("http client");
        OpenAiHttpTransport::new(http).with_base_url(self.base_url.clone())
    }

    fn captured_request(self) -> String {
        self.handle.join().expect("server thread")
    }
}

fn read_request(stream: &mut TcpStream) -> String {
    let mut buffer = Vec::new();
    let mut chunk = [0_u8; 1024];

    loop {
        let read = stream.read(&mut chunk).expect("read request");
        if read == 0 {
            break;
        }
        buffer.extend_from_slice(&chunk[..read]);

        if let Some(header_end) = find_header_end(&buffer) {
            let head = String::from_utf8_lossy(&buffer[..header_end]).to_ascii_lowercase();
            let content_length = head
                .lines()
                .find_map(|line| line.strip_prefix("content-length:"))
                .and_then(|value| value.trim().parse::<usize>().ok())
                .unwrap_or(0);
            if buffer.len() >= header_end + 4 + content_length {
                break;
            }
        }
    }

    String::from_utf8(buffer).expect("utf-8 request")
}

fn find_header_end(buffer: &[u8]) -> Option<usize> {
    buffer.windows(4).position(|window| window == b"\r\n\r\n")
}

fn split_request(raw: &str) -> (String, Value) {
    let (head, body) = raw.split_once("\r\n\r\n").expect("request head and body");
    (
        head.to_ascii_lowercase(),
        serde_json::from_str(body).expect("json request body"),
    )
}

fn auth() -> OpenAiAuth {
    OpenAiAuth::ApiKey(SecretString::new("sk-http-test"))
}

const STOP_BODY: &str = r#"{
    "object": "chat.completion",
    "created": 1726000000,
    "model": "gpt-4o-mini-2024-07-18",
    "system_fingerprint": "fp_http",
    "usage": {"prompt_tokens": 9, "completion_tokens": 2, "total_tokens": 11},
    "choices": [{"index": 0, "finish_reason": "stop", "message": {"role": "assistant", "content": "Alice", "refusal": null}}]
}"#;

#[tokio::test]
async fn posts_options_without_credential_and_bearer_header() {
    let server = OneShotServer::start("200 OK", "application/json", STOP_BODY);
    let options = CompletionOptions::default()
        .with_api_key("sk-options-only")
        .with_frequency_penalty(0.5)
        .with_parameter("user", "tenant-7");
    let request = OpenAiRequest::from_options(vec![Message::user("What is my name?")], &options);

    let response = server
        .transport()
        .complete(request, auth())
        .await
        .expect("stop body succeeds");
    assert_eq!(response.finish_reason, OpenAiFinishReason::Stop);
    assert_eq!(response.message.content, "Alice");
    assert_eq!(response.usage.total_tokens, 11);

    let (head, body) = split_request(&server.captured_request());
    assert!(head.starts_with("post /v1/chat/completions http/1.1"));
    assert!(head.contains("authorization: bearer sk-http-test"));
    assert_eq!(
        body,
        json!({
            "model": "gpt-4o-mini",
            "messages": [{"role": "user", "content": "What is my name?"}],
            "temperature": 0.0,
            "frequency_penalty": 0.5,
            "user": "tenant-7",
        })
    );
    assert!(!body.to_string().contains("sk-options-only"));
}

#[tokio::test]
async fn error_body_on_unauthorized_status_is_provider_error() {
    let server = OneShotServer::start(
        "401 Unauthorized",
        "application/json",
        r#"{"error": {"message": "Incorrect API key provided", "type": "invalid_request_error", "code": "invalid_api_key"}}"#,
    );
    let request =
        OpenAiRequest::from_options(vec![Message::user("hi")], &CompletionOptions::default());

    let err = server
        .transport()
        .complete(request, auth())
        .await
        .expect_err("error body fails");
    server.captured_request();

    assert_eq!(err.kind, CompletionErrorKind::Provider);
    assert_eq!(err.message, "Incorrect API key provided");
    assert!(!err.retryable);
}

#[tokio::test]
async fn non_json_body_on_gateway_error_is_transport_error() {
    let server = OneShotServer::start(
        "502 Bad Gateway",
        "text/html",
        "<html><body>bad gateway</body></html>",
    );
    let request =
        OpenAiRequest::from_options(vec![Message::user("hi")], &CompletionOptions::default());

    let err = server
        .transport()
        .complete(request, auth())
        .await
        .expect_err("html body fails");
    server.captured_request();

    assert_eq!(err.kind, CompletionErrorKind::Transport);
    assert!(err.message.contains("502"));
    assert!(err.retryable);
}

#[tokio::test]
async fn truncated_generation_over_http_is_incomplete() {
    let server = OneShotServer::start(
        "200 OK",
        "application/json",
        r#"{"object": "chat.completion", "created": 1, "model": "gpt-4o", "choices": [{"finish_reason": "length", "message": {"role": "assistant", "content": "Ali"}}]}"#,
    );
    let client = OpenAiClient::new(Arc::new(server.transport()))
        .with_default_api_key("sk-http-test")
        .without_environment_key();

    let err = client
        .complete(vec![Message::user("hi")], &CompletionOptions::default())
        .await
        .expect_err("length fails");
    server.captured_request();

    assert_eq!(err.kind, CompletionErrorKind::IncompleteGeneration);
    assert_eq!(err.finish_reason, Some(FinishReason::Length));
}

#[tokio::test]
async fn refusal_over_http_is_incomplete_and_keeps_text() {
    let server = OneShotServer::start(
        "200 OK",
        "application/json",
        r#"{"object": "chat.completion", "created": 1, "model": "gpt-4o", "choices": [{"finish_reason": "stop", "message": {"role": "assistant", "content": null, "refusal": "I can't help with that."}}]}"#,
    );
    let client = OpenAiClient::new(Arc::new(server.transport()))
        .with_default_api_key("sk-http-test")
        .without_environment_key();

    let err = client
        .complete(vec![Message::user("hi")], &CompletionOptions::default())
        .await
        .expect_err("refusal fails");
    server.captured_request();

    assert_eq!(err.kind, CompletionErrorKind::IncompleteGeneration);
    assert!(err.message.contains("I can't help with that."));
}
