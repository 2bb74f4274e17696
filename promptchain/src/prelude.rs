//! Common imports for most promptchain applications.

pub use crate::{
    ClientConfig, build_client, build_client_with_hooks, default_client, get_prompt,
    get_prompt_link, get_prompt_link_with_client, get_prompt_with_client,
};
pub use crate::{assistant_message, context, options, system_message, user_message};
pub use crate::{
    Chain, ChainReport, ChatError, ChatErrorKind, CompletionClient, CompletionError,
    CompletionErrorKind, CompletionOptions, Message, OnStepFailure, Prompt, PromptLink, Response,
    Role, Thread, chain, default_seed, get_message, step_fn,
};
pub use crate::{pc_chain, pc_messages, pc_msg};
