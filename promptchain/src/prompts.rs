//! Prompt-function constructors bound to a completion client.

use std::sync::{Arc, OnceLock};

use pchat::{Prompt, PromptLink, Thread};
use pprovider::{CompletionClient, CompletionError, CompletionOptions};

use crate::{ClientConfig, build_client};

static DEFAULT_CLIENT: OnceLock<Arc<dyn CompletionClient>> = OnceLock::new();

/// Shared client configured from the process environment on first use.
pub fn default_client() -> Result<Arc<dyn CompletionClient>, CompletionError> {
    if let Some(client) = DEFAULT_CLIENT.get() {
        return Ok(Arc::clone(client));
    }

    let client = build_client(ClientConfig::from_env()?)?;
    Ok(Arc::clone(DEFAULT_CLIENT.get_or_init(|| client)))
}

/// Creates a standalone prompt function over the default client.
///
/// Pass `Thread::new()` for a fresh conversation, or a clone of another
/// prompt's thread to share its history.
pub fn get_prompt(options: CompletionOptions, thread: Thread) -> Result<Prompt, CompletionError> {
    Ok(get_prompt_with_client(default_client()?, options, thread))
}

/// Creates a chainable prompt function over the default client.
pub fn get_prompt_link(
    options: CompletionOptions,
    thread: Thread,
) -> Result<PromptLink, CompletionError> {
    Ok(get_prompt_link_with_client(
        default_client()?,
        options,
        thread,
    ))
}

pub fn get_prompt_with_client(
    client: Arc<dyn CompletionClient>,
    options: CompletionOptions,
    thread: Thread,
) -> Prompt {
    Prompt::new(client, options, thread)
}

pub fn get_prompt_link_with_client(
    client: Arc<dyn CompletionClient>,
    options: CompletionOptions,
    thread: Thread,
) -> PromptLink {
    PromptLink::new(client, options, thread)
}
