//! OpenAI completion client over a pluggable transport.

use std::sync::Arc;
use std::time::Instant;

use crate::{
    CompletionClient, CompletionError, CompletionHooks, CompletionOptions, Message,
    NoopCompletionHooks, ProviderFuture, Response, SecretString, process_api_key,
    resolve_api_key, validate_request,
};

use super::transport::OpenAiTransport;
use super::types::{OpenAiAuth, OpenAiRequest};

#[derive(Clone)]
pub struct OpenAiClient {
    transport: Arc<dyn OpenAiTransport>,
    default_api_key: Option<SecretString>,
    environment_fallback: bool,
    hooks: Arc<dyn CompletionHooks>,
}

impl OpenAiClient {
    pub fn new(transport: Arc<dyn OpenAiTransport>) -> Self {
        Self {
            transport,
            default_api_key: None,
            environment_fallback: true,
            hooks: Arc::new(NoopCompletionHooks),
        }
    }

    /// Sets the key used when request options carry none.
    pub fn with_default_api_key(mut self, api_key: impl Into<SecretString>) -> Self {
        self.default_api_key = Some(api_key.into());
        self
    }

    /// Disables the `OPENAI_API_KEY` lookup.
    pub fn without_environment_key(mut self) -> Self {
        self.environment_fallback = false;
        self
    }

    pub fn with_hooks(mut self, hooks: Arc<dyn CompletionHooks>) -> Self {
        self.hooks = hooks;
        self
    }

    fn resolve_auth(&self, options: &CompletionOptions) -> Result<OpenAiAuth, CompletionError> {
        let fallback = match &self.default_api_key {
            Some(api_key) => Some(api_key),
            None if self.environment_fallback => process_api_key(),
            None => None,
        };

        resolve_api_key(options, fallback).map(OpenAiAuth::ApiKey)
    }

    async fn exchange(
        &self,
        messages: Vec<Message>,
        options: &CompletionOptions,
    ) -> Result<Response, CompletionError> {
        validate_request(&messages, options)?;
        let auth = self.resolve_auth(options)?;
        let request = OpenAiRequest::from_options(messages, options);
        let response = self.transport.complete(request, auth).await?;
        response.into_response()
    }
}

impl std::fmt::Debug for OpenAiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiClient")
            .field("transport", &self.transport)
            .field("default_api_key", &self.default_api_key)
            .field("environment_fallback", &self.environment_fallback)
            .finish_non_exhaustive()
    }
}

impl CompletionClient for OpenAiClient {
    fn complete<'a>(
        &'a self,
        messages: Vec<Message>,
        options: &'a CompletionOptions,
    ) -> ProviderFuture<'a, Result<Response, CompletionError>> {
        Box::pin(async move {
            let started = Instant::now();
            self.hooks.on_request_start(&options.model, messages.len());

            let result = self.exchange(messages, options).await;
            match &result {
                Ok(response) => self.hooks.on_success(response, started.elapsed()),
                Err(error) => self
                    .hooks
                    .on_failure(&options.model, error, started.elapsed()),
            }

            result
        })
    }
}
