//! The completion client contract and its operation hooks.

use std::time::Duration;

use pcommon::BoxFuture;

use crate::{CompletionError, CompletionOptions, Message, Response};

pub type ProviderFuture<'a, T> = BoxFuture<'a, T>;

/// One request/response exchange against a chat-completion endpoint.
///
/// Implementations must not retry and must not mutate any conversation state.
pub trait CompletionClient: Send + Sync {
    fn complete<'a>(
        &'a self,
        messages: Vec<Message>,
        options: &'a CompletionOptions,
    ) -> ProviderFuture<'a, Result<Response, CompletionError>>;
}

pub trait CompletionHooks: Send + Sync {
    fn on_request_start(&self, _model: &str, _message_count: usize) {}

    fn on_success(&self, _response: &Response, _elapsed: Duration) {}

    fn on_failure(&self, _model: &str, _error: &CompletionError, _elapsed: Duration) {}
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopCompletionHooks;

impl CompletionHooks for NoopCompletionHooks {}
