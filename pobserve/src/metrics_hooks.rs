//! Metrics-based observability hooks for completion requests and chain steps.
//!
//! ```rust
//! use pobserve::MetricsObservabilityHooks;
//! use pprovider::CompletionHooks;
//!
//! fn accepts_completion_hooks(_hooks: &dyn CompletionHooks) {}
//!
//! let hooks = MetricsObservabilityHooks;
//! accepts_completion_hooks(&hooks);
//! ```

use std::time::Duration;

use pchat::{ChainHooks, ChatError};
use pprovider::{CompletionError, CompletionHooks, Response};

#[derive(Debug, Clone, Copy, Default)]
pub struct MetricsObservabilityHooks;

impl CompletionHooks for MetricsObservabilityHooks {
    fn on_request_start(&self, model: &str, message_count: usize) {
        metrics::counter!(
            "promptchain_completion_request_total",
            "model" => model.to_string()
        )
        .increment(1);
        metrics::histogram!(
            "promptchain_completion_request_messages",
            "model" => model.to_string()
        )
        .record(message_count as f64);
    }

    fn on_success(&self, response: &Response, elapsed: Duration) {
        metrics::counter!(
            "promptchain_completion_success_total",
            "model" => response.model.clone()
        )
        .increment(1);
        metrics::counter!(
            "promptchain_completion_tokens_total",
            "model" => response.model.clone()
        )
        .increment(u64::from(response.usage.total_tokens));
        metrics::histogram!(
            "promptchain_completion_duration_seconds",
            "model" => response.model.clone(),
            "status" => "success"
        )
        .record(elapsed.as_secs_f64());
    }

    fn on_failure(&self, model: &str, error: &CompletionError, elapsed: Duration) {
        metrics::counter!(
            "promptchain_completion_failure_total",
            "model" => model.to_string(),
            "error_kind" => format!("{:?}", error.kind)
        )
        .increment(1);
        metrics::histogram!(
            "promptchain_completion_duration_seconds",
            "model" => model.to_string(),
            "status" => "failure"
        )
        .record(elapsed.as_secs_f64());
    }
}

impl ChainHooks for MetricsObservabilityHooks {
    fn on_step_start(&self, _step: usize, _total: usize) {
        metrics::counter!("promptchain_chain_step_start_total").increment(1);
    }

    fn on_step_success(&self, _step: usize, _response: &Response, elapsed: Duration) {
        metrics::counter!("promptchain_chain_step_success_total").increment(1);
        metrics::histogram!(
            "promptchain_chain_step_duration_seconds",
            "status" => "success"
        )
        .record(elapsed.as_secs_f64());
    }

    fn on_step_failure(&self, _step: usize, error: &ChatError, absorbed: bool, elapsed: Duration) {
        metrics::counter!(
            "promptchain_chain_step_failure_total",
            "error_kind" => format!("{:?}", error.kind),
            "absorbed" => absorbed.to_string()
        )
        .increment(1);
        metrics::histogram!(
            "promptchain_chain_step_duration_seconds",
            "status" => "failure"
        )
        .record(elapsed.as_secs_f64());
    }

    fn on_chain_complete(&self, steps_run: usize, failures: usize, elapsed: Duration) {
        let status = if failures == 0 { "clean" } else { "failed" };
        metrics::counter!("promptchain_chain_complete_total", "status" => status).increment(1);
        metrics::histogram!("promptchain_chain_steps_per_run").record(steps_run as f64);
        metrics::histogram!("promptchain_chain_duration_seconds", "status" => status)
            .record(elapsed.as_secs_f64());
    }
}
