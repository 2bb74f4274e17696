//! OpenAI HTTP payload serde models and conversion helpers.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{CompletionError, Message};

use super::types::{
    OpenAiAssistantMessage, OpenAiFinishReason, OpenAiRequest, OpenAiResponse, OpenAiUsage,
};

pub(crate) fn build_api_request(
    request: OpenAiRequest,
) -> Result<OpenAiApiRequest, CompletionError> {
    if request.messages.is_empty() {
        return Err(CompletionError::invalid_request(
            "OpenAI request requires at least one message",
        ));
    }

    Ok(OpenAiApiRequest {
        model: request.model,
        messages: request.messages,
        temperature: request.generation.temperature,
        frequency_penalty: request.generation.frequency_penalty,
        max_tokens: request.generation.max_tokens,
        extra: request.extra,
    })
}

pub(crate) fn parse_finish_reason(value: Option<&str>) -> OpenAiFinishReason {
    match value {
        Some("stop") => OpenAiFinishReason::Stop,
        Some("length") => OpenAiFinishReason::Length,
        Some("content_filter") => OpenAiFinishReason::ContentFilter,
        Some("tool_calls") => OpenAiFinishReason::ToolCalls,
        Some("function_call") => OpenAiFinishReason::FunctionCall,
        _ => OpenAiFinishReason::Other,
    }
}

/// Request body: the options (without credential) merged with `messages`.
#[derive(Debug, Serialize)]
pub(crate) struct OpenAiApiRequest {
    pub model: String,
    pub messages: Vec<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency_penalty: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct OpenAiApiError {
    pub message: String,
}

/// Success and error bodies share this shape; every field is optional.
#[derive(Debug, Deserialize)]
pub(crate) struct OpenAiApiResponse {
    pub error: Option<OpenAiApiError>,
    #[serde(default)]
    pub object: String,
    #[serde(default)]
    pub created: u64,
    #[serde(default)]
    pub model: String,
    pub usage: Option<OpenAiApiUsage>,
    pub system_fingerprint: Option<String>,
    #[serde(default)]
    pub choices: Vec<OpenAiApiChoice>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct OpenAiApiChoice {
    pub message: Option<OpenAiApiAssistantMessage>,
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct OpenAiApiAssistantMessage {
    pub content: Option<String>,
    pub refusal: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct OpenAiApiUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
    pub completion_tokens_details: Option<OpenAiApiCompletionTokensDetails>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct OpenAiApiCompletionTokensDetails {
    pub reasoning_tokens: Option<u32>,
}

impl TryFrom<OpenAiApiResponse> for OpenAiResponse {
    type Error = CompletionError;

    fn try_from(value: OpenAiApiResponse) -> Result<Self, Self::Error> {
        if let Some(error) = value.error {
            return Err(CompletionError::provider(error.message));
        }

        let choice = value.choices.into_iter().next().ok_or_else(|| {
            CompletionError::transport("OpenAI response did not include choices")
        })?;

        let message = choice.message.unwrap_or(OpenAiApiAssistantMessage {
            content: None,
            refusal: None,
        });

        let usage = value
            .usage
            .map(|usage| OpenAiUsage {
                prompt_tokens: usage.prompt_tokens,
                completion_tokens: usage.completion_tokens,
                total_tokens: usage.total_tokens,
                reasoning_tokens: usage
                    .completion_tokens_details
                    .and_then(|details| details.reasoning_tokens),
            })
            .unwrap_or_default();

        Ok(Self {
            object: value.object,
            created: value.created,
            model: value.model,
            usage,
            system_fingerprint: value.system_fingerprint,
            message: OpenAiAssistantMessage {
                content: message.content.unwrap_or_default(),
                refusal: message.refusal,
            },
            finish_reason: parse_finish_reason(choice.finish_reason.as_deref()),
        })
    }
}
