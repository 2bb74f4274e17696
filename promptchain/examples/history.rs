//! Seeds a conversation with a system instruction and shows it being remembered,
//! first with a standalone prompt and then with a chain of links.
//!
//! Run with `OPENAI_API_KEY` set: `cargo run -p promptchain --example history`.

use promptchain::prelude::*;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let prompt = get_prompt(CompletionOptions::new("gpt-4o-mini"), context("Be very succinct"))?;

    prompt.send("My name is Jon Snow").await?;
    prompt.send("I love dragons").await?;
    prompt.send("I am a Stark").await?;
    let response = prompt.send("What is my name?").await?;
    println!("{:?}", get_message(&response));

    let link = get_prompt_link(CompletionOptions::new("gpt-4o"), context("Be very succinct"))?;
    let outcome = pc_chain![
        link => "My name is Jon Snow",
        link => "I love dragons",
        link => "I am a Stark",
        link => "Who am I?",
    ]
    .await;

    match outcome {
        Ok(response) => println!("{:?}", get_message(&response)),
        Err(err) => eprintln!("{err}"),
    }

    Ok(())
}
