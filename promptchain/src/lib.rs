//! Stateful LLM prompt functions and sequential prompt chains.
//!
//! This crate is the single dependency for most applications. It re-exports
//! the promptchain workspace crates, builds the default OpenAI client from the
//! environment, and offers helpers and macros for the common flows.
//!
//! ```rust,no_run
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! use promptchain::{CompletionOptions, Thread, get_message, get_prompt};
//!
//! let prompt = get_prompt(CompletionOptions::default(), Thread::new())?;
//! prompt.send("My name is Alice").await?;
//! let response = prompt.send("What is my name?").await?;
//! println!("{}", get_message(&response).content);
//! # Ok(())
//! # }
//! ```

mod config;
mod macros;
mod prompts;

pub mod prelude;
pub mod util;

pub use pchat;
pub use pcommon;
pub use pobserve;
pub use pprovider;

pub use pchat::{
    Chain, ChainHooks, ChainReport, ChainStep, ChatError, ChatErrorKind, DEFAULT_SEED_PROMPT,
    FnStep, Link, NoopChainHooks, OnStepFailure, Prompt, PromptLink, StepFailure, Thread, chain,
    default_seed, get_message, step_fn,
};
pub use pcommon::{BoxFuture, GenerationOptions};
pub use pobserve::{
    MetricsObservabilityHooks, SafeChainHooks, SafeCompletionHooks, TracingObservabilityHooks,
};
pub use pprovider::{
    CompletionClient, CompletionError, CompletionErrorKind, CompletionHooks, CompletionOptions,
    DEFAULT_BASE_URL, DEFAULT_MODEL, FinishReason, Message, NoopCompletionHooks, Response, Role,
    SecretString, Usage,
};

pub use config::{
    BASE_URL_ENV, ClientConfig, DEFAULT_TIMEOUT, TIMEOUT_ENV, build_client, build_client_with_hooks,
};
pub use prompts::{
    default_client, get_prompt, get_prompt_link, get_prompt_link_with_client,
    get_prompt_with_client,
};
pub use util::{assistant_message, context, options, system_message, user_message};
