//! Core task exchange protocol types and definitions

pub mod agent;
pub mod error;
pub mod message;
pub mod operation;
pub mod task;

pub use agent::{AgentCapabilities, AgentDescriptor};
pub use error::{ExchangeError, ExchangeResult};
pub use message::{Message, MessagePart, Role};
pub use operation::ExchangeOperation;
pub use task::{TaskRequest, TaskResponse};
