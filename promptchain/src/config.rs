//! Client construction from explicit or environment-driven settings.

use std::sync::Arc;
use std::time::Duration;

use pprovider::{
    API_KEY_ENV, CompletionClient, CompletionError, CompletionHooks, DEFAULT_BASE_URL,
    NoopCompletionHooks, SecretString,
};

pub const BASE_URL_ENV: &str = "OPENAI_BASE_URL";
pub const TIMEOUT_ENV: &str = "PROMPTCHAIN_TIMEOUT_SECS";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(90);

#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Default credential; `None` defers to `OPENAI_API_KEY` at request time.
    pub api_key: Option<SecretString>,
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ClientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads `OPENAI_API_KEY`, `OPENAI_BASE_URL` and `PROMPTCHAIN_TIMEOUT_SECS`.
    ///
    /// Unset or blank variables keep their defaults.
    pub fn from_env() -> Result<Self, CompletionError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub(crate) fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, CompletionError> {
        let read = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let mut config = Self::default();
        if let Some(api_key) = read(API_KEY_ENV) {
            config.api_key = Some(SecretString::new(api_key));
        }
        if let Some(base_url) = read(BASE_URL_ENV) {
            config.base_url = base_url;
        }
        if let Some(timeout) = read(TIMEOUT_ENV) {
            let seconds = timeout.parse::<u64>().map_err(|_| {
                CompletionError::invalid_request(format!(
                    "{TIMEOUT_ENV} must be a whole number of seconds, got '{timeout}'"
                ))
            })?;
            config.timeout = Duration::from_secs(seconds);
        }

        Ok(config)
    }

    pub fn with_api_key(mut self, api_key: impl Into<SecretString>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

pub fn build_client(config: ClientConfig) -> Result<Arc<dyn CompletionClient>, CompletionError> {
    build_client_with_hooks(config, Arc::new(NoopCompletionHooks))
}

pub fn build_client_with_hooks(
    config: ClientConfig,
    hooks: Arc<dyn CompletionHooks>,
) -> Result<Arc<dyn CompletionClient>, CompletionError> {
    if let Some(api_key) = &config.api_key
        && api_key.is_empty()
    {
        return Err(CompletionError::authentication(
            "OpenAI API key must not be empty",
        ));
    }
    if config.timeout.is_zero() {
        return Err(CompletionError::invalid_request(
            "client timeout must be greater than zero",
        ));
    }

    let http = reqwest::Client::builder()
        .timeout(config.timeout)
        .build()
        .map_err(|err| CompletionError::transport(err.to_string()))?;

    build_openai_client(config, http, hooks)
}

#[cfg(feature = "provider-openai")]
fn build_openai_client(
    config: ClientConfig,
    http: reqwest::Client,
    hooks: Arc<dyn CompletionHooks>,
) -> Result<Arc<dyn CompletionClient>, CompletionError> {
    use pprovider::adapters::openai::{OpenAiClient, OpenAiHttpTransport};

    let transport = Arc::new(OpenAiHttpTransport::new(http).with_base_url(config.base_url));
    let mut client = OpenAiClient::new(transport).with_hooks(hooks);
    if let Some(api_key) = config.api_key {
        client = client.with_default_api_key(api_key);
    }

    Ok(Arc::new(client))
}

#[cfg(not(feature = "provider-openai"))]
fn build_openai_client(
    _config: ClientConfig,
    _http: reqwest::Client,
    _hooks: Arc<dyn CompletionHooks>,
) -> Result<Arc<dyn CompletionClient>, CompletionError> {
    Err(CompletionError::invalid_request(
        "provider-openai feature is not enabled on promptchain",
    ))
}
