//! # taskwire
//!
//! A client and server implementation of a minimal agent task-exchange
//! protocol: callers discover an agent through a well-known descriptor, then
//! submit one task per call and receive the original message and the agent's
//! reply in a single response envelope.
//!
//! ## Features
//!
//! - **Discovery**: immutable agent descriptor served at
//!   `/.well-known/agent.json`
//! - **Task exchange**: synchronous `/tasks/send` with ordered payload
//!   validation and structured error envelopes
//! - **Composable handlers**: triage handoffs, guardrails, capability
//!   registries, and session recording behind one `TaskAgent` trait
//! - **Tower client stack**: transport-agnostic service with validation as a
//!   layer
//!
//! ## Example
//!
//! ```rust,no_run
//! use taskwire::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let url = "http://localhost:5001".parse().unwrap();
//!     let mut client = ExchangeClientBuilder::new_http(url).build()?;
//!
//!     let descriptor = client.discover().await?;
//!     println!("Connected to: {}", descriptor.name);
//!
//!     let response = client.submit_text(None, "What is the current time?").await?;
//!     println!("Response: {:?}", response.messages());
//!
//!     Ok(())
//! }
//! ```

pub mod agent;
pub mod client;
pub mod codec;
pub mod layer;
pub mod protocol;
pub mod server;
pub mod service;
pub mod session;
pub mod transport;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        agent::{TaskAgent, TimeTeller, TimezonePolicy},
        client::{ExchangeClient, ExchangeClientBuilder},
        protocol::{
            AgentCapabilities, AgentDescriptor, ExchangeError, ExchangeOperation, Message,
            MessagePart, Role, TaskRequest, TaskResponse,
        },
        server::{build_router, ExchangeState},
    };
}
