//! High-level client API for the exchange protocol

pub mod agent;
pub mod builder;
pub mod config;

pub use agent::ExchangeClient;
pub use builder::ExchangeClientBuilder;
pub use config::ClientConfig;
