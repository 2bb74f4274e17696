//! Remote chat-completion client contracts and the OpenAI adapter.
//!
//! A [`CompletionClient`] performs exactly one request/response exchange: it
//! takes the ordered outbound messages plus immutable [`CompletionOptions`]
//! and resolves to a normalized [`Response`] or a [`CompletionError`]. It
//! never retries and never touches conversation history.

pub mod adapters;
pub mod client;
pub mod credentials;
pub mod error;
pub mod model;
pub mod prelude;

pub use client::{CompletionClient, CompletionHooks, NoopCompletionHooks, ProviderFuture};
pub use credentials::{API_KEY_ENV, SecretString, process_api_key, resolve_api_key};
pub use error::{CompletionError, CompletionErrorKind};
pub use model::{
    CompletionOptions, DEFAULT_BASE_URL, DEFAULT_MODEL, FinishReason, Message, Response, Role,
    Usage, validate_request,
};
