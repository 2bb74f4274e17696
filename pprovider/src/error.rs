//! Completion error kinds and error value helpers.
//!
//! ```rust
//! use pprovider::{CompletionError, CompletionErrorKind, FinishReason};
//!
//! let timeout = CompletionError::timeout("request timed out");
//! assert!(timeout.retryable);
//!
//! let truncated = CompletionError::incomplete_generation(FinishReason::Length);
//! assert_eq!(truncated.kind, CompletionErrorKind::IncompleteGeneration);
//! assert_eq!(truncated.finish_reason, Some(FinishReason::Length));
//! ```

use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::FinishReason;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionErrorKind {
    Authentication,
    InvalidRequest,
    Timeout,
    Transport,
    /// The provider answered with an `error` payload.
    Provider,
    /// The provider finished for any reason other than `stop`, or refused.
    IncompleteGeneration,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionError {
    pub kind: CompletionErrorKind,
    pub message: String,
    pub retryable: bool,
    pub finish_reason: Option<FinishReason>,
}

impl CompletionError {
    pub fn new(kind: CompletionErrorKind, message: impl Into<String>, retryable: bool) -> Self {
        Self {
            kind,
            message: message.into(),
            retryable,
            finish_reason: None,
        }
    }

    pub fn authentication(message: impl Into<String>) -> Self {
        Self::new(CompletionErrorKind::Authentication, message, false)
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(CompletionErrorKind::InvalidRequest, message, false)
    }

    pub fn timeout(message: impl Into<String>) -> Self {
        Self::new(CompletionErrorKind::Timeout, message, true)
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::new(CompletionErrorKind::Transport, message, true)
    }

    /// Wraps the bare provider error message; the payload's structure is not kept.
    pub fn provider(message: impl Into<String>) -> Self {
        Self::new(CompletionErrorKind::Provider, message, false)
    }

    pub fn incomplete_generation(finish_reason: FinishReason) -> Self {
        Self {
            kind: CompletionErrorKind::IncompleteGeneration,
            message: format!("No response from AI (finish reason: {finish_reason})"),
            retryable: false,
            finish_reason: Some(finish_reason),
        }
    }

    /// A completed generation that carries the model's refusal instead of content.
    pub fn refusal(refusal: impl Into<String>) -> Self {
        Self {
            kind: CompletionErrorKind::IncompleteGeneration,
            message: format!("No response from AI (refused: {})", refusal.into()),
            retryable: false,
            finish_reason: Some(FinishReason::Stop),
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(
            self.kind,
            CompletionErrorKind::Transport | CompletionErrorKind::Timeout
        )
    }
}

impl Display for CompletionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

impl Error for CompletionError {}
