use std::panic::{AssertUnwindSafe, catch_unwind};
use std::time::Duration;

use pchat::{ChainHooks, ChatError};
use pprovider::{CompletionError, CompletionHooks, Response};

/// Completion hooks whose panics never reach the request path.
pub struct SafeCompletionHooks<H> {
    inner: H,
}

impl<H> SafeCompletionHooks<H> {
    pub fn new(inner: H) -> Self {
        Self { inner }
    }
}

impl<H> CompletionHooks for SafeCompletionHooks<H>
where
    H: CompletionHooks,
{
    fn on_request_start(&self, model: &str, message_count: usize) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner.on_request_start(model, message_count)
        }));
    }

    fn on_success(&self, response: &Response, elapsed: Duration) {
        let _ = catch_unwind(AssertUnwindSafe(|| self.inner.on_success(response, elapsed)));
    }

    fn on_failure(&self, model: &str, error: &CompletionError, elapsed: Duration) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner.on_failure(model, error, elapsed)
        }));
    }
}

pub struct SafeChainHooks<H> {
    inner: H,
}

impl<H> SafeChainHooks<H> {
    pub fn new(inner: H) -> Self {
        Self { inner }
    }
}

impl<H> ChainHooks for SafeChainHooks<H>
where
    H: ChainHooks,
{
    fn on_step_start(&self, step: usize, total: usize) {
        let _ = catch_unwind(AssertUnwindSafe(|| self.inner.on_step_start(step, total)));
    }

    fn on_step_success(&self, step: usize, response: &Response, elapsed: Duration) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner.on_step_success(step, response, elapsed)
        }));
    }

    fn on_step_failure(&self, step: usize, error: &ChatError, absorbed: bool, elapsed: Duration) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner.on_step_failure(step, error, absorbed, elapsed)
        }));
    }

    fn on_chain_complete(&self, steps_run: usize, failures: usize, elapsed: Duration) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner.on_chain_complete(steps_run, failures, elapsed)
        }));
    }
}
