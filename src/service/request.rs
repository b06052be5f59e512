//! Exchange service request types

use std::{collections::HashMap, time::Duration};

use crate::protocol::operation::ExchangeOperation;

/// A request to the exchange service
///
/// Wraps an exchange operation with the context needed for execution
#[derive(Debug, Clone)]
pub struct ExchangeRequest {
    /// The operation to execute
    pub operation: ExchangeOperation,

    /// Request context (timeouts, metadata headers)
    pub context: RequestContext,
}

impl ExchangeRequest {
    /// Create a new exchange request
    pub fn new(operation: ExchangeOperation, context: RequestContext) -> Self {
        Self { operation, context }
    }
}

/// Request context containing metadata and configuration
///
/// The target agent is identified by the transport, not the context; the
/// context carries only per-request knobs.
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// Request timeout
    pub timeout: Option<Duration>,

    /// Additional metadata headers
    pub metadata: HashMap<String, String>,
}

impl RequestContext {
    /// Create a new request context
    pub fn new() -> Self {
        Self {
            timeout: Some(Duration::from_secs(30)),
            metadata: HashMap::new(),
        }
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Add a metadata header
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }
}

impl Default for RequestContext {
    fn default() -> Self {
        Self::new()
    }
}
