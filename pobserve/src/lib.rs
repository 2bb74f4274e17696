//! Observability hooks for completion requests and chain steps.
//!
//! ```rust
//! use pobserve::{MetricsObservabilityHooks, SafeCompletionHooks, TracingObservabilityHooks};
//!
//! let _completion_hooks = SafeCompletionHooks::new(TracingObservabilityHooks);
//! let _metrics = MetricsObservabilityHooks;
//! ```

mod metrics_hooks;
mod safe_hooks;
mod tracing_hooks;

pub use metrics_hooks::MetricsObservabilityHooks;
pub use safe_hooks::{SafeChainHooks, SafeCompletionHooks};
pub use tracing_hooks::TracingObservabilityHooks;

pub mod prelude {
    pub use crate::{
        MetricsObservabilityHooks, SafeChainHooks, SafeCompletionHooks,
        TracingObservabilityHooks,
    };
}
