//! Small convenience constructors for common types.

use crate::{CompletionOptions, Message, Role, Thread};

pub fn system_message(content: impl Into<String>) -> Message {
    Message::new(Role::System, content)
}

pub fn user_message(content: impl Into<String>) -> Message {
    Message::new(Role::User, content)
}

pub fn assistant_message(content: impl Into<String>) -> Message {
    Message::new(Role::Assistant, content)
}

/// A new thread opened by a single system instruction.
pub fn context(system_prompt: impl Into<String>) -> Thread {
    Thread::with_messages([system_message(system_prompt)])
}

/// Default options (temperature `0`) targeting another model.
pub fn options(model: impl Into<String>) -> CompletionOptions {
    CompletionOptions {
        model: model.into(),
        ..CompletionOptions::default()
    }
}
