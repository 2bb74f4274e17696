//! Append-only conversation history shared by handle.

use std::sync::{Arc, Mutex, MutexGuard};

use pprovider::Message;

use crate::ChatError;

/// Ordered conversation turns owned by the prompt functions holding this handle.
///
/// Cloning a `Thread` clones the handle, not the history: pass a clone to a
/// second prompt function to share context with it. The lock only makes the
/// handle `Send + Sync`; it does not order concurrent invocations, which must
/// be awaited one after another.
///
/// ```rust
/// use pchat::Thread;
/// use pprovider::Message;
///
/// let seeded = Thread::with_messages([Message::system("Be very succinct")]);
/// let shared = seeded.clone();
///
/// assert!(seeded.shares_history_with(&shared));
/// assert!(!seeded.shares_history_with(&Thread::new()));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Thread {
    messages: Arc<Mutex<Vec<Message>>>,
}

impl Thread {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_messages(messages: impl IntoIterator<Item = Message>) -> Self {
        Self {
            messages: Arc::new(Mutex::new(messages.into_iter().collect())),
        }
    }

    pub fn snapshot(&self) -> Result<Vec<Message>, ChatError> {
        Ok(self.lock()?.clone())
    }

    pub fn len(&self) -> Result<usize, ChatError> {
        Ok(self.lock()?.len())
    }

    pub fn is_empty(&self) -> Result<bool, ChatError> {
        Ok(self.lock()?.is_empty())
    }

    pub fn last(&self) -> Result<Option<Message>, ChatError> {
        Ok(self.lock()?.last().cloned())
    }

    pub fn shares_history_with(&self, other: &Thread) -> bool {
        Arc::ptr_eq(&self.messages, &other.messages)
    }

    /// Records one completed exchange; callers check roles beforehand.
    pub(crate) fn append_turn(&self, user: Message, assistant: Message) -> Result<(), ChatError> {
        self.lock()?.extend([user, assistant]);
        Ok(())
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<Message>>, ChatError> {
        self.messages
            .lock()
            .map_err(|_| ChatError::thread("conversation thread lock poisoned"))
    }
}
