//! Reference exchange server: a time-telling agent on port 5001.
//!
//! Run with `cargo run --example tell_time_server`, then point
//! `time_client` at it.

use std::sync::Arc;

use taskwire::prelude::*;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "taskwire=debug".into()),
        )
        .init();

    let descriptor = AgentDescriptor::new(
        "Time Teller",
        "An agent that tells the current time based on the provided timezone.",
        "http://localhost:5001/tasks/send",
    )
    .with_version("1.0.0");

    // The reference behavior ignores timezone input; switch to
    // TimezonePolicy::Honor to apply a `timezone` metadata offset.
    let agent = Arc::new(TimeTeller::with_policy(TimezonePolicy::Ignore));

    let state = ExchangeState::new(descriptor, agent);
    taskwire::server::serve("127.0.0.1:5001".parse()?, state).await
}
