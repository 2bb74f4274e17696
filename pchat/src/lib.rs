//! Stateful prompt functions and sequential chains over a completion client.
//!
//! ```rust
//! use pchat::{Thread, get_message};
//! use pprovider::{Message, Response};
//!
//! let thread = Thread::with_messages([Message::system("Be very succinct")]);
//! assert_eq!(thread.len().expect("thread readable"), 1);
//!
//! let response = Response::seed(Message::assistant("Jon Snow"));
//! assert_eq!(get_message(&response).content, "Jon Snow");
//! ```

mod chain;
mod error;
mod prompt;
mod thread;

pub mod prelude {
    pub use crate::{
        Chain, ChainHooks, ChainReport, ChainStep, ChatError, ChatErrorKind, Link,
        NoopChainHooks, OnStepFailure, Prompt, PromptLink, StepFailure, Thread, chain,
        default_seed, get_message, step_fn,
    };
    pub use pprovider::{CompletionClient, CompletionOptions, Message, Response, Role};
}

pub use chain::{
    Chain, ChainHooks, ChainReport, ChainStep, ChatFuture, DEFAULT_SEED_PROMPT, FnStep,
    NoopChainHooks, OnStepFailure, StepFailure, chain, default_seed, step_fn,
};
pub use error::{ChatError, ChatErrorKind};
pub use prompt::{Link, Prompt, PromptLink};
pub use thread::Thread;

use pprovider::{Message, Response};

/// Projects a response onto its assistant message.
pub fn get_message(response: &Response) -> &Message {
    &response.message
}
