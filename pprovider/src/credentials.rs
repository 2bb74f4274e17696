//! Credential values and the process-wide default API key.
//!
//! Resolution order for a request is: the key on [`CompletionOptions`], then a
//! client-level fallback, then the `OPENAI_API_KEY` environment variable read
//! once per process.
//!
//! ```rust
//! use pprovider::{CompletionOptions, SecretString, resolve_api_key};
//!
//! let options = CompletionOptions::new("gpt-4o-mini").with_api_key("sk-explicit");
//! let fallback = SecretString::new("sk-fallback");
//! let key = resolve_api_key(&options, Some(&fallback)).expect("key resolves");
//! assert_eq!(key.expose(), "sk-explicit");
//! assert_eq!(format!("{key:?}"), "[REDACTED]");
//! ```

use std::sync::OnceLock;

use crate::{CompletionError, CompletionOptions};

pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

static PROCESS_API_KEY: OnceLock<Option<SecretString>> = OnceLock::new();

#[derive(PartialEq, Eq)]
pub struct SecretString {
    value: String,
}

impl SecretString {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    pub fn expose(&self) -> &str {
        self.value.as_str()
    }

    pub fn is_empty(&self) -> bool {
        self.value.trim().is_empty()
    }
}

impl Clone for SecretString {
    fn clone(&self) -> Self {
        Self::new(self.value.clone())
    }
}

impl std::fmt::Debug for SecretString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl Drop for SecretString {
    fn drop(&mut self) {
        // SAFETY: zero bytes are valid UTF-8 and the string is never read again.
        unsafe {
            self.value.as_mut_vec().fill(0);
        }
    }
}

impl From<String> for SecretString {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for SecretString {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Returns the default key from the environment, read on first use and cached.
pub fn process_api_key() -> Option<&'static SecretString> {
    PROCESS_API_KEY
        .get_or_init(|| {
            std::env::var(API_KEY_ENV)
                .ok()
                .map(SecretString::new)
                .filter(|key| !key.is_empty())
        })
        .as_ref()
}

pub fn resolve_api_key(
    options: &CompletionOptions,
    fallback: Option<&SecretString>,
) -> Result<SecretString, CompletionError> {
    if let Some(api_key) = &options.api_key {
        if api_key.is_empty() {
            return Err(CompletionError::authentication("api key must not be empty"));
        }

        return Ok(api_key.clone());
    }

    match fallback {
        Some(api_key) if !api_key.is_empty() => Ok(api_key.clone()),
        _ => Err(CompletionError::authentication(format!(
            "no API key configured; set it on the options or via {API_KEY_ENV}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CompletionErrorKind;

    #[test]
    fn options_key_takes_precedence_over_fallback() {
        let options = CompletionOptions::default().with_api_key("sk-options");
        let fallback = SecretString::new("sk-fallback");

        let key = resolve_api_key(&options, Some(&fallback)).expect("options key");
        assert_eq!(key.expose(), "sk-options");
    }

    #[test]
    fn fallback_is_used_when_options_omit_key() {
        let fallback = SecretString::new("sk-fallback");
        let key = resolve_api_key(&CompletionOptions::default(), Some(&fallback))
            .expect("fallback key");
        assert_eq!(key.expose(), "sk-fallback");
    }

    #[test]
    fn missing_or_blank_keys_are_authentication_errors() {
        let err = resolve_api_key(&CompletionOptions::default(), None)
            .expect_err("no key must fail");
        assert_eq!(err.kind, CompletionErrorKind::Authentication);

        let blank = CompletionOptions::default().with_api_key("   ");
        let err = resolve_api_key(&blank, None).expect_err("blank key must fail");
        assert_eq!(err.kind, CompletionErrorKind::Authentication);
    }

    #[test]
    fn secret_string_debug_is_redacted() {
        let secret = SecretString::new("sk-very-secret");
        assert_eq!(format!("{secret:?}"), "[REDACTED]");
        assert_eq!(secret.clone().expose(), "sk-very-secret");
    }
}
