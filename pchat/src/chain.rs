//! Sequential folding of chain steps over a seed response.
//!
//! Each step receives the previous step's resolved [`Response`]; step `i + 1`
//! starts only after step `i` settles. Failure handling is an explicit
//! [`OnStepFailure`] policy on the [`Chain`].
//!
//! ```rust
//! use pchat::{Chain, default_seed, step_fn};
//! use pprovider::{Message, Response};
//!
//! let shout = step_fn(|previous: Response| async move {
//!     Ok::<_, pchat::ChatError>(Response::seed(Message::assistant(
//!         previous.message.content.to_uppercase(),
//!     )))
//! });
//!
//! let chain = Chain::new().step(shout);
//! assert_eq!(chain.len(), 1);
//! assert_eq!(default_seed().message.content, "You are a helpful assistant");
//! ```

use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};

use pcommon::BoxFuture;
use pprovider::{Message, Response};

use crate::ChatError;

pub type ChatFuture<'a, T> = BoxFuture<'a, T>;

pub const DEFAULT_SEED_PROMPT: &str = "You are a helpful assistant";

pub fn default_seed() -> Response {
    Response::seed(Message::system(DEFAULT_SEED_PROMPT))
}

pub trait ChainStep: Send + Sync {
    fn run<'a>(&'a self, previous: &'a Response) -> ChatFuture<'a, Result<Response, ChatError>>;
}

impl<S> ChainStep for Box<S>
where
    S: ChainStep + ?Sized,
{
    fn run<'a>(&'a self, previous: &'a Response) -> ChatFuture<'a, Result<Response, ChatError>> {
        (**self).run(previous)
    }
}

/// Adapts an async closure over an owned previous response into a [`ChainStep`].
pub struct FnStep<F> {
    step: F,
}

pub fn step_fn<F, Fut>(step: F) -> FnStep<F>
where
    F: Fn(Response) -> Fut + Send + Sync,
    Fut: Future<Output = Result<Response, ChatError>> + Send + 'static,
{
    FnStep { step }
}

impl<F, Fut> ChainStep for FnStep<F>
where
    F: Fn(Response) -> Fut + Send + Sync,
    Fut: Future<Output = Result<Response, ChatError>> + Send + 'static,
{
    fn run<'a>(&'a self, previous: &'a Response) -> ChatFuture<'a, Result<Response, ChatError>> {
        Box::pin((self.step)(previous.clone()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum OnStepFailure {
    /// Stop at the first failing step and return its error.
    #[default]
    Abort,
    /// Record the failure and hand the given response to the next step.
    ContinueWithSeed(Response),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepFailure {
    pub step: usize,
    pub error: ChatError,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainReport {
    pub response: Response,
    pub steps_run: usize,
    pub failures: Vec<StepFailure>,
}

impl ChainReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

pub trait ChainHooks: Send + Sync {
    fn on_step_start(&self, _step: usize, _total: usize) {}

    fn on_step_success(&self, _step: usize, _response: &Response, _elapsed: Duration) {}

    fn on_step_failure(
        &self,
        _step: usize,
        _error: &ChatError,
        _absorbed: bool,
        _elapsed: Duration,
    ) {
    }

    fn on_chain_complete(&self, _steps_run: usize, _failures: usize, _elapsed: Duration) {}
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopChainHooks;

impl ChainHooks for NoopChainHooks {}

pub struct Chain<'a> {
    steps: Vec<Box<dyn ChainStep + 'a>>,
    policy: OnStepFailure,
    hooks: Arc<dyn ChainHooks>,
}

impl Default for Chain<'_> {
    fn default() -> Self {
        Self {
            steps: Vec::new(),
            policy: OnStepFailure::default(),
            hooks: Arc::new(NoopChainHooks),
        }
    }
}

impl<'a> Chain<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_steps<I, S>(steps: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: ChainStep + 'a,
    {
        let mut chain = Self::new();
        for step in steps {
            chain.push(step);
        }

        chain
    }

    pub fn step(mut self, step: impl ChainStep + 'a) -> Self {
        self.push(step);
        self
    }

    pub fn push(&mut self, step: impl ChainStep + 'a) {
        self.steps.push(Box::new(step));
    }

    pub fn with_policy(mut self, policy: OnStepFailure) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_hooks(mut self, hooks: Arc<dyn ChainHooks>) -> Self {
        self.hooks = hooks;
        self
    }

    pub fn policy(&self) -> &OnStepFailure {
        &self.policy
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Runs every step starting from [`default_seed`].
    pub async fn run(&self) -> Result<Response, ChatError> {
        self.run_from(default_seed()).await
    }

    pub async fn run_from(&self, seed: Response) -> Result<Response, ChatError> {
        self.run_report_from(seed).await.map(|report| report.response)
    }

    pub async fn run_report(&self) -> Result<ChainReport, ChatError> {
        self.run_report_from(default_seed()).await
    }

    pub async fn run_report_from(&self, seed: Response) -> Result<ChainReport, ChatError> {
        let started = Instant::now();
        let total = self.steps.len();
        let mut context = seed;
        let mut failures = Vec::new();

        for (index, step) in self.steps.iter().enumerate() {
            self.hooks.on_step_start(index, total);
            let step_started = Instant::now();
            let outcome = step.run(&context).await;

            match outcome {
                Ok(response) => {
                    self.hooks
                        .on_step_success(index, &response, step_started.elapsed());
                    context = response;
                }
                Err(error) => {
                    let error = error.at_step(index);
                    match &self.policy {
                        OnStepFailure::Abort => {
                            self.hooks
                                .on_step_failure(index, &error, false, step_started.elapsed());
                            self.hooks.on_chain_complete(
                                index + 1,
                                failures.len() + 1,
                                started.elapsed(),
                            );
                            return Err(error);
                        }
                        OnStepFailure::ContinueWithSeed(fallback) => {
                            self.hooks
                                .on_step_failure(index, &error, true, step_started.elapsed());
                            failures.push(StepFailure { step: index, error });
                            context = fallback.clone();
                        }
                    }
                }
            }
        }

        self.hooks
            .on_chain_complete(total, failures.len(), started.elapsed());

        Ok(ChainReport {
            response: context,
            steps_run: total,
            failures,
        })
    }
}

/// Runs `steps` in order from [`default_seed`], aborting on the first failure.
pub async fn chain<'a, I, S>(steps: I) -> Result<Response, ChatError>
where
    I: IntoIterator<Item = S>,
    S: ChainStep + 'a,
{
    Chain::from_steps(steps).run().await
}
