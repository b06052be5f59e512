//! Exchange service response types

use crate::protocol::{agent::AgentDescriptor, task::TaskResponse};

/// Response from an exchange service operation
#[derive(Debug, Clone)]
pub enum ExchangeResponse {
    /// Agent descriptor (from Discover)
    Descriptor(Box<AgentDescriptor>),

    /// Task response envelope (from SendTask)
    Task(Box<TaskResponse>),
}

impl ExchangeResponse {
    /// Extract the agent descriptor, if present
    pub fn into_descriptor(self) -> Option<AgentDescriptor> {
        match self {
            ExchangeResponse::Descriptor(descriptor) => Some(*descriptor),
            _ => None,
        }
    }

    /// Extract the task response, if present
    pub fn into_task(self) -> Option<TaskResponse> {
        match self {
            ExchangeResponse::Task(task) => Some(*task),
            _ => None,
        }
    }
}
