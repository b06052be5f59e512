//! Exchange client walkthrough: discover the agent, then submit one task.
//!
//! Expects `tell_time_server` to be running on port 5001.

use taskwire::prelude::*;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let url = "http://localhost:5001".parse()?;
    let mut client = ExchangeClientBuilder::new_http(url).build()?;

    // Step 1: discover the agent
    let descriptor = client.discover().await?;
    println!("Agent discovered:");
    println!("{}", serde_json::to_string_pretty(&descriptor)?);

    // Step 2: submit a task (a fresh task id is generated for us)
    let response = client
        .submit_text(None, "What is the current time?")
        .await?;

    println!("Task response:");
    println!("{}", serde_json::to_string_pretty(&response)?);

    if let Some(messages) = response.messages() {
        if let Some(reply) = messages.last().and_then(|m| m.first_text()) {
            println!("Current time is: {reply}");
        }
    }

    Ok(())
}
