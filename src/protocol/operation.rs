//! Binding-independent exchange operations

use super::task::TaskRequest;

/// Operations of the task exchange protocol
///
/// Each operation is binding-independent; the HTTP mapping lives in
/// [`endpoint`](ExchangeOperation::endpoint) and
/// [`method`](ExchangeOperation::method).
#[derive(Debug, Clone)]
pub enum ExchangeOperation {
    /// Fetch the agent descriptor
    Discover,

    /// Submit a task for synchronous processing
    SendTask(TaskRequest),
}

impl ExchangeOperation {
    /// Get the HTTP endpoint path for this operation
    pub fn endpoint(&self) -> &'static str {
        match self {
            ExchangeOperation::Discover => "/.well-known/agent.json",
            ExchangeOperation::SendTask(_) => "/tasks/send",
        }
    }

    /// Get the HTTP method for this operation
    pub fn method(&self) -> &'static str {
        match self {
            ExchangeOperation::Discover => "GET",
            ExchangeOperation::SendTask(_) => "POST",
        }
    }
}
