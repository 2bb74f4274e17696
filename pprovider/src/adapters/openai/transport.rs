//! OpenAI transport trait and reqwest-based HTTP implementation.

use reqwest::Client;

use crate::{CompletionError, DEFAULT_BASE_URL, ProviderFuture};

use super::serde_api::{OpenAiApiResponse, build_api_request};
use super::types::{OpenAiAuth, OpenAiRequest, OpenAiResponse};

pub trait OpenAiTransport: Send + Sync + std::fmt::Debug {
    fn complete<'a>(
        &'a self,
        request: OpenAiRequest,
        auth: OpenAiAuth,
    ) -> ProviderFuture<'a, Result<OpenAiResponse, CompletionError>>;
}

#[derive(Debug, Clone)]
pub struct OpenAiHttpTransport {
    client: Client,
    base_url: String,
}

impl OpenAiHttpTransport {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }

    fn apply_auth(
        &self,
        builder: reqwest::RequestBuilder,
        auth: &OpenAiAuth,
    ) -> reqwest::RequestBuilder {
        match auth {
            OpenAiAuth::ApiKey(key) => builder.bearer_auth(key.expose()),
        }
    }
}

impl OpenAiTransport for OpenAiHttpTransport {
    fn complete<'a>(
        &'a self,
        request: OpenAiRequest,
        auth: OpenAiAuth,
    ) -> ProviderFuture<'a, Result<OpenAiResponse, CompletionError>> {
        Box::pin(async move {
            let api_request = build_api_request(request)?;
            let url = self.endpoint("chat/completions");
            let builder = self.client.post(url).json(&api_request);
            let response = self.apply_auth(builder, &auth).send().await.map_err(|err| {
                if err.is_timeout() {
                    CompletionError::timeout(err.to_string())
                } else {
                    CompletionError::transport(err.to_string())
                }
            })?;

            // Error payloads arrive with non-2xx statuses; the body decides the outcome.
            let status = response.status();
            let body = response
                .text()
                .await
                .map_err(|err| CompletionError::transport(err.to_string()))?;

            match serde_json::from_str::<OpenAiApiResponse>(&body) {
                Ok(parsed) => OpenAiResponse::try_from(parsed),
                Err(_) if !status.is_success() => Err(CompletionError::transport(format!(
                    "OpenAI request failed with status {status}"
                ))),
                Err(err) => Err(CompletionError::transport(err.to_string())),
            }
        })
    }
}
