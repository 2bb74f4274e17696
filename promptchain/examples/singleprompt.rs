//! Sends two prompts through one prompt function; the second relies on the first.
//!
//! Run with `OPENAI_API_KEY` set: `cargo run -p promptchain --example singleprompt`.

use promptchain::prelude::*;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let prompt = get_prompt(CompletionOptions::new("gpt-4o-mini"), Thread::new())?;

    match prompt.send("Tell me a joke").await {
        Ok(response) => println!("{:?}", get_message(&response)),
        Err(err) => eprintln!("{err}"),
    }

    match prompt.send("What was the joke about").await {
        Ok(response) => println!("{:?}", get_message(&response)),
        Err(err) => eprintln!("{err}"),
    }

    Ok(())
}
