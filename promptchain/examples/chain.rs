//! Runs a three-step chain, then a one-step chain that reuses the same link history.
//!
//! Completion and chain events are emitted as `tracing` events; install a
//! subscriber to see them. Run with `OPENAI_API_KEY` set:
//! `cargo run -p promptchain --example chain`.

use std::sync::Arc;

use promptchain::prelude::*;
use promptchain::{SafeChainHooks, SafeCompletionHooks, TracingObservabilityHooks};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = build_client_with_hooks(
        ClientConfig::from_env()?,
        Arc::new(SafeCompletionHooks::new(TracingObservabilityHooks)),
    )?;
    let link = get_prompt_link_with_client(client, CompletionOptions::new("gpt-4o"), Thread::new());

    let outcome = Chain::new()
        .step(link.link("My name is Alice"))
        .step(link.link("Make all uppercase of my name"))
        .step(link.link("Remove any other information except my name"))
        .with_hooks(Arc::new(SafeChainHooks::new(TracingObservabilityHooks)))
        .run()
        .await;

    match outcome {
        Ok(response) => println!("{:?}", get_message(&response)),
        Err(err) => eprintln!("{err}"),
    }

    let response = chain([link.link("What is my name?")]).await?;
    println!("{response:?}");

    Ok(())
}
