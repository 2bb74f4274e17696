//! Tracing-based observability hooks for completion requests and chain steps.
//!
//! Events carry counts, model names, timings, and error classification.
//! Message content is never recorded.
//!
//! ```rust
//! use pobserve::TracingObservabilityHooks;
//! use pchat::ChainHooks;
//!
//! fn accepts_chain_hooks(_hooks: &dyn ChainHooks) {}
//!
//! let hooks = TracingObservabilityHooks;
//! accepts_chain_hooks(&hooks);
//! ```

use std::time::Duration;

use pchat::{ChainHooks, ChatError};
use pprovider::{CompletionError, CompletionHooks, Response};

#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObservabilityHooks;

impl CompletionHooks for TracingObservabilityHooks {
    fn on_request_start(&self, model: &str, message_count: usize) {
        tracing::info!(
            phase = "completion",
            event = "request_start",
            model,
            message_count
        );
    }

    fn on_success(&self, response: &Response, elapsed: Duration) {
        tracing::info!(
            phase = "completion",
            event = "success",
            model = response.model.as_str(),
            prompt_tokens = response.usage.prompt_tokens,
            completion_tokens = response.usage.completion_tokens,
            total_tokens = response.usage.total_tokens,
            system_fingerprint = response.system_fingerprint.as_deref(),
            elapsed_ms = elapsed.as_millis() as u64
        );
    }

    fn on_failure(&self, model: &str, error: &CompletionError, elapsed: Duration) {
        tracing::error!(
            phase = "completion",
            event = "failure",
            model,
            elapsed_ms = elapsed.as_millis() as u64,
            error_kind = ?error.kind,
            finish_reason = error.finish_reason.map(|reason| reason.as_str()),
            retryable = error.retryable,
            error = %error
        );
    }
}

impl ChainHooks for TracingObservabilityHooks {
    fn on_step_start(&self, step: usize, total: usize) {
        tracing::debug!(phase = "chain", event = "step_start", step, total);
    }

    fn on_step_success(&self, step: usize, response: &Response, elapsed: Duration) {
        tracing::info!(
            phase = "chain",
            event = "step_success",
            step,
            seed = response.is_seed(),
            elapsed_ms = elapsed.as_millis() as u64
        );
    }

    fn on_step_failure(&self, step: usize, error: &ChatError, absorbed: bool, elapsed: Duration) {
        if absorbed {
            tracing::warn!(
                phase = "chain",
                event = "step_failure",
                step,
                absorbed,
                elapsed_ms = elapsed.as_millis() as u64,
                error_kind = ?error.kind,
                completion_kind = ?error.completion_kind(),
                error = %error
            );
        } else {
            tracing::error!(
                phase = "chain",
                event = "step_failure",
                step,
                absorbed,
                elapsed_ms = elapsed.as_millis() as u64,
                error_kind = ?error.kind,
                completion_kind = ?error.completion_kind(),
                error = %error
            );
        }
    }

    fn on_chain_complete(&self, steps_run: usize, failures: usize, elapsed: Duration) {
        tracing::info!(
            phase = "chain",
            event = "complete",
            steps_run,
            failures,
            elapsed_ms = elapsed.as_millis() as u64
        );
    }
}
