//! Provider-agnostic messages, options, and normalized responses.
//!
//! ```rust
//! use pprovider::{CompletionErrorKind, CompletionOptions, Message, validate_request};
//!
//! let options = CompletionOptions::new("gpt-4o").with_max_tokens(256);
//! assert!(validate_request(&[Message::user("hello")], &options).is_ok());
//!
//! let err = validate_request(&[], &options).expect_err("empty list must fail");
//! assert_eq!(err.kind, CompletionErrorKind::InvalidRequest);
//! ```

use std::fmt::{Display, Formatter};

use pcommon::GenerationOptions;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{CompletionError, SecretString};

pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

const SEED_OBJECT: &str = "chain.seed";

/// Body keys owned by the client itself; extra parameters may not shadow them.
const RESERVED_PARAMETERS: [&str; 2] = ["model", "messages"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::System => "system",
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Role::System, content)
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }
}

/// Immutable per-function request configuration.
///
/// `CompletionOptions::default()` targets [`DEFAULT_MODEL`] at temperature `0`;
/// `CompletionOptions::new` sets only the model and leaves every sampling
/// parameter to the provider.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionOptions {
    pub model: String,
    pub api_key: Option<SecretString>,
    pub generation: GenerationOptions,
    pub extra: Map<String, Value>,
}

impl Default for CompletionOptions {
    fn default() -> Self {
        Self::new(DEFAULT_MODEL).with_temperature(0.0)
    }
}

impl CompletionOptions {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            api_key: None,
            generation: GenerationOptions::default(),
            extra: Map::new(),
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<SecretString>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.generation = self.generation.with_temperature(temperature);
        self
    }

    pub fn with_frequency_penalty(mut self, penalty: f32) -> Self {
        self.generation = self.generation.with_frequency_penalty(penalty);
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.generation = self.generation.with_max_tokens(max_tokens);
        self
    }

    /// Adds a provider parameter that is merged verbatim into the request body.
    pub fn with_parameter(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    pub fn validate(&self) -> Result<(), CompletionError> {
        if self.model.trim().is_empty() {
            return Err(CompletionError::invalid_request("model must not be empty"));
        }

        if let Some(max_tokens) = self.generation.max_tokens
            && max_tokens == 0
        {
            return Err(CompletionError::invalid_request(
                "max_tokens must be greater than zero",
            ));
        }

        if let Some(temperature) = self.generation.temperature
            && !(0.0..=2.0).contains(&temperature)
        {
            return Err(CompletionError::invalid_request(
                "temperature must be in the inclusive range 0.0..=2.0",
            ));
        }

        if let Some(penalty) = self.generation.frequency_penalty
            && !(-2.0..=2.0).contains(&penalty)
        {
            return Err(CompletionError::invalid_request(
                "frequency_penalty must be in the inclusive range -2.0..=2.0",
            ));
        }

        if let Some(key) = RESERVED_PARAMETERS
            .iter()
            .find(|key| self.extra.contains_key(**key))
        {
            return Err(CompletionError::invalid_request(format!(
                "extra parameter '{key}' is reserved"
            )));
        }

        Ok(())
    }
}

pub fn validate_request(
    messages: &[Message],
    options: &CompletionOptions,
) -> Result<(), CompletionError> {
    if messages.is_empty() {
        return Err(CompletionError::invalid_request(
            "at least one message is required",
        ));
    }

    options.validate()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinishReason {
    Stop,
    Length,
    ContentFilter,
    ToolCalls,
    FunctionCall,
    Other,
}

impl FinishReason {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Stop => "stop",
            Self::Length => "length",
            Self::ContentFilter => "content_filter",
            Self::ToolCalls => "tool_calls",
            Self::FunctionCall => "function_call",
            Self::Other => "other",
        }
    }
}

impl Display for FinishReason {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
    pub reasoning_tokens: Option<u32>,
}

/// Normalized result of one successful exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub object: String,
    pub created: u64,
    pub model: String,
    pub usage: Usage,
    pub system_fingerprint: Option<String>,
    pub message: Message,
}

impl Response {
    /// Builds a synthetic response that carries only `message`, used to start a chain.
    pub fn seed(message: Message) -> Self {
        Self {
            object: SEED_OBJECT.to_string(),
            created: 0,
            model: String::new(),
            usage: Usage::default(),
            system_fingerprint: None,
            message,
        }
    }

    pub fn is_seed(&self) -> bool {
        self.object == SEED_OBJECT
    }

    pub fn message(&self) -> &Message {
        &self.message
    }

    pub fn content(&self) -> &str {
        &self.message.content
    }

    pub fn into_message(self) -> Message {
        self.message
    }
}
