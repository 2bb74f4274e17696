//! Standalone and chainable prompt functions.
//!
//! Both forms capture a client, immutable options, and a [`Thread`] handle at
//! construction. A successful call appends the `(user, assistant)` pair to the
//! thread; a failed call leaves it untouched and returns the error.

use std::sync::Arc;

use pprovider::{CompletionClient, CompletionOptions, Message, Response, Role};

use crate::{ChainStep, ChatError, ChatErrorKind, ChatFuture, Thread};

/// A prompt whose outbound list is its thread followed by the new user turn.
pub struct Prompt {
    client: Arc<dyn CompletionClient>,
    options: Arc<CompletionOptions>,
    thread: Thread,
}

impl Prompt {
    pub fn new(
        client: Arc<dyn CompletionClient>,
        options: CompletionOptions,
        thread: Thread,
    ) -> Self {
        Self {
            client,
            options: Arc::new(options),
            thread,
        }
    }

    pub fn options(&self) -> &CompletionOptions {
        &self.options
    }

    pub fn thread(&self) -> &Thread {
        &self.thread
    }

    /// Sends the thread plus `user_text` and records the pair on success.
    ///
    /// Empty or whitespace-only `user_text` is rejected with
    /// [`ChatErrorKind::InvalidRequest`] before any request is made.
    pub async fn send(&self, user_text: impl Into<String>) -> Result<Response, ChatError> {
        let user = user_message(user_text)?;
        let mut messages = self.thread.snapshot()?;
        messages.push(user.clone());

        exchange(self.client.as_ref(), &self.options, &self.thread, messages, user).await
    }
}

/// A prompt that prepends the previous chain context to its own thread.
pub struct PromptLink {
    client: Arc<dyn CompletionClient>,
    options: Arc<CompletionOptions>,
    thread: Thread,
}

impl PromptLink {
    pub fn new(
        client: Arc<dyn CompletionClient>,
        options: CompletionOptions,
        thread: Thread,
    ) -> Self {
        Self {
            client,
            options: Arc::new(options),
            thread,
        }
    }

    pub fn options(&self) -> &CompletionOptions {
        &self.options
    }

    pub fn thread(&self) -> &Thread {
        &self.thread
    }

    /// Binds user text to this prompt, producing a step for [`crate::Chain`].
    pub fn link(&self, user_text: impl Into<String>) -> Link<'_> {
        Link {
            prompt: self,
            user_text: user_text.into(),
        }
    }

    /// Sends `previous.message`, the thread, then `user_text`; records the pair on success.
    ///
    /// Empty or whitespace-only `user_text` is rejected with
    /// [`ChatErrorKind::InvalidRequest`] before any request is made.
    pub async fn send(
        &self,
        user_text: impl Into<String>,
        previous: &Response,
    ) -> Result<Response, ChatError> {
        let user = user_message(user_text)?;
        let history = self.thread.snapshot()?;

        let mut messages = Vec::with_capacity(history.len() + 2);
        messages.push(previous.message.clone());
        messages.extend(history);
        messages.push(user.clone());

        exchange(self.client.as_ref(), &self.options, &self.thread, messages, user).await
    }
}

/// A [`PromptLink`] bound to one user text.
#[derive(Clone)]
pub struct Link<'a> {
    prompt: &'a PromptLink,
    user_text: String,
}

impl Link<'_> {
    pub fn user_text(&self) -> &str {
        &self.user_text
    }
}

impl ChainStep for Link<'_> {
    fn run<'s>(&'s self, previous: &'s Response) -> ChatFuture<'s, Result<Response, ChatError>> {
        Box::pin(self.prompt.send(self.user_text.as_str(), previous))
    }
}

fn user_message(user_text: impl Into<String>) -> Result<Message, ChatError> {
    let user_text = user_text.into();
    if user_text.trim().is_empty() {
        return Err(ChatError::invalid_request("user text must not be empty"));
    }

    Ok(Message::user(user_text))
}

async fn exchange(
    client: &dyn CompletionClient,
    options: &CompletionOptions,
    thread: &Thread,
    messages: Vec<Message>,
    user: Message,
) -> Result<Response, ChatError> {
    let response = client.complete(messages, options).await?;
    if response.message.role != Role::Assistant {
        return Err(ChatError::new(
            ChatErrorKind::Completion,
            format!(
                "completion client answered with a {} message",
                response.message.role
            ),
        ));
    }

    thread.append_turn(user, response.message.clone())?;
    Ok(response)
}
