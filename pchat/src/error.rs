//! Chat-layer errors and classification.

use std::error::Error;
use std::fmt::{Display, Formatter};

use pprovider::{CompletionError, CompletionErrorKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatErrorKind {
    InvalidRequest,
    Completion,
    Thread,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatError {
    pub kind: ChatErrorKind,
    pub message: String,
    pub completion: Option<CompletionError>,
    /// Zero-based index of the chain step that failed, when raised inside a chain.
    pub step: Option<usize>,
}

impl ChatError {
    pub fn new(kind: ChatErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            completion: None,
            step: None,
        }
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ChatErrorKind::InvalidRequest, message)
    }

    pub fn thread(message: impl Into<String>) -> Self {
        Self::new(ChatErrorKind::Thread, message)
    }

    pub fn at_step(mut self, step: usize) -> Self {
        self.step = Some(step);
        self
    }

    pub fn completion_kind(&self) -> Option<CompletionErrorKind> {
        self.completion.as_ref().map(|error| error.kind)
    }
}

impl Display for ChatError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.step {
            Some(step) => write!(f, "{:?} at step {step}: {}", self.kind, self.message),
            None => write!(f, "{:?}: {}", self.kind, self.message),
        }
    }
}

impl Error for ChatError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.completion
            .as_ref()
            .map(|error| error as &(dyn Error + 'static))
    }
}

impl From<CompletionError> for ChatError {
    fn from(value: CompletionError) -> Self {
        Self {
            kind: ChatErrorKind::Completion,
            message: value.to_string(),
            completion: Some(value),
            step: None,
        }
    }
}
