//! Common `pprovider` imports for downstream crates.

pub use crate::{
    CompletionClient, CompletionError, CompletionErrorKind, CompletionHooks, CompletionOptions,
    FinishReason, Message, NoopCompletionHooks, ProviderFuture, Response, Role, SecretString,
    Usage,
};
pub use pcommon::{BoxFuture, GenerationOptions};
