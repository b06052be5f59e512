//! JSON codec for the HTTP+JSON binding

use bytes::Bytes;

use crate::{
    codec::Codec,
    protocol::{
        agent::AgentDescriptor, error::ExchangeError, operation::ExchangeOperation,
        task::TaskResponse,
    },
    service::response::ExchangeResponse,
};

/// JSON codec for the HTTP+JSON protocol binding
#[derive(Debug, Clone, Default)]
pub struct JsonCodec;

impl JsonCodec {
    /// Create a new JSON codec
    pub fn new() -> Self {
        Self
    }
}

impl Codec for JsonCodec {
    fn encode_request(&self, operation: &ExchangeOperation) -> Result<Bytes, ExchangeError> {
        match operation {
            // Discovery is a bodiless GET
            ExchangeOperation::Discover => Ok(Bytes::new()),
            ExchangeOperation::SendTask(request) => {
                let bytes = serde_json::to_vec(request)?;
                Ok(Bytes::from(bytes))
            }
        }
    }

    fn decode_response(
        &self,
        body: &[u8],
        operation: &ExchangeOperation,
    ) -> Result<ExchangeResponse, ExchangeError> {
        match operation {
            ExchangeOperation::Discover => {
                let descriptor: AgentDescriptor = serde_json::from_slice(body)?;
                Ok(ExchangeResponse::Descriptor(Box::new(descriptor)))
            }
            ExchangeOperation::SendTask(_) => {
                let response: TaskResponse = serde_json::from_slice(body)?;
                Ok(ExchangeResponse::Task(Box::new(response)))
            }
        }
    }

    fn content_type(&self) -> &str {
        "application/json"
    }
}
