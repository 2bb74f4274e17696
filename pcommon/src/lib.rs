//! Shared future aliases and generation settings for workspace crates.
//!
//! ```rust
//! use pcommon::GenerationOptions;
//!
//! let options = GenerationOptions::default()
//!     .with_temperature(0.3)
//!     .with_frequency_penalty(0.5);
//! assert_eq!(options.temperature, Some(0.3));
//! assert_eq!(options.max_tokens, None);
//! ```

pub mod future {
    //! Shared async future aliases.
    //!
    //! ```rust
    //! use pcommon::BoxFuture;
    //!
    //! fn str_len<'a>(value: &'a str) -> BoxFuture<'a, usize> {
    //!     Box::pin(async move { value.len() })
    //! }
    //!
    //! let _future = str_len("hello");
    //! ```

    use std::future::Future;
    use std::pin::Pin;

    pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;
}

pub mod model {
    //! Sampling parameters shared by completion options.
    //!
    //! ```rust
    //! use pcommon::GenerationOptions;
    //!
    //! let options = GenerationOptions::default()
    //!     .with_temperature(0.2)
    //!     .with_max_tokens(128);
    //!
    //! assert_eq!(options.temperature, Some(0.2));
    //! assert_eq!(options.max_tokens, Some(128));
    //! assert!(!options.is_empty());
    //! ```

    #[derive(Debug, Clone, Copy, PartialEq, Default)]
    pub struct GenerationOptions {
        pub temperature: Option<f32>,
        pub frequency_penalty: Option<f32>,
        pub max_tokens: Option<u32>,
    }

    impl GenerationOptions {
        pub fn with_temperature(mut self, temperature: f32) -> Self {
            self.temperature = Some(temperature);
            self
        }

        pub fn with_frequency_penalty(mut self, penalty: f32) -> Self {
            self.frequency_penalty = Some(penalty);
            self
        }

        pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
            self.max_tokens = Some(max_tokens);
            self
        }

        /// Returns `true` when no parameter is set, so the provider defaults apply.
        pub fn is_empty(&self) -> bool {
            self.temperature.is_none()
                && self.frequency_penalty.is_none()
                && self.max_tokens.is_none()
        }
    }
}

pub use future::BoxFuture;
pub use model::GenerationOptions;
