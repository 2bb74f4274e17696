//! OpenAI adapter types and provider-agnostic conversion logic.

use std::fmt::Formatter;

use pcommon::GenerationOptions;
use serde_json::{Map, Value};

use crate::{
    CompletionError, CompletionOptions, FinishReason, Message, Response, SecretString, Usage,
};

#[derive(Debug, Clone, PartialEq)]
pub struct OpenAiRequest {
    pub model: String,
    pub messages: Vec<Message>,
    pub generation: GenerationOptions,
    pub extra: Map<String, Value>,
}

impl OpenAiRequest {
    /// Copies everything but the credential out of `options`.
    pub fn from_options(messages: Vec<Message>, options: &CompletionOptions) -> Self {
        Self {
            model: options.model.clone(),
            messages,
            generation: options.generation,
            extra: options.extra.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenAiResponse {
    pub object: String,
    pub created: u64,
    pub model: String,
    pub usage: OpenAiUsage,
    pub system_fingerprint: Option<String>,
    pub message: OpenAiAssistantMessage,
    pub finish_reason: OpenAiFinishReason,
}

impl OpenAiResponse {
    /// Accepts only completed, non-refused generations.
    pub(crate) fn into_response(self) -> Result<Response, CompletionError> {
        if self.finish_reason != OpenAiFinishReason::Stop {
            return Err(CompletionError::incomplete_generation(
                self.finish_reason.into(),
            ));
        }
        if let Some(refusal) = self.message.refusal
            && !refusal.trim().is_empty()
        {
            return Err(CompletionError::refusal(refusal));
        }

        Ok(Response {
            object: self.object,
            created: self.created,
            model: self.model,
            usage: self.usage.into(),
            system_fingerprint: self.system_fingerprint,
            message: Message::assistant(self.message.content),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenAiAssistantMessage {
    pub content: String,
    pub refusal: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenAiFinishReason {
    Stop,
    Length,
    ContentFilter,
    ToolCalls,
    FunctionCall,
    Other,
}

impl From<OpenAiFinishReason> for FinishReason {
    fn from(value: OpenAiFinishReason) -> Self {
        match value {
            OpenAiFinishReason::Stop => Self::Stop,
            OpenAiFinishReason::Length => Self::Length,
            OpenAiFinishReason::ContentFilter => Self::ContentFilter,
            OpenAiFinishReason::ToolCalls => Self::ToolCalls,
            OpenAiFinishReason::FunctionCall => Self::FunctionCall,
            OpenAiFinishReason::Other => Self::Other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OpenAiUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
    pub reasoning_tokens: Option<u32>,
}

impl From<OpenAiUsage> for Usage {
    fn from(value: OpenAiUsage) -> Self {
        Self {
            prompt_tokens: value.prompt_tokens,
            completion_tokens: value.completion_tokens,
            total_tokens: value.total_tokens,
            reasoning_tokens: value.reasoning_tokens,
        }
    }
}

#[derive(Clone, PartialEq, Eq)]
pub enum OpenAiAuth {
    ApiKey(SecretString),
}

impl std::fmt::Debug for OpenAiAuth {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ApiKey(_) => f.write_str("OpenAiAuth::ApiKey([REDACTED])"),
        }
    }
}
