//! Core exchange service implementation

use std::{
    future::Future,
    pin::Pin,
    sync::Arc,
    task::{Context, Poll},
};

use tower_service::Service;

use crate::{
    codec::Codec,
    protocol::{error::ExchangeError, operation::ExchangeOperation, task::TaskResponse},
    service::{ExchangeRequest, ExchangeResponse},
    transport::{Transport, TransportRequest, TransportResponse},
};

/// Core exchange service that wraps a transport
///
/// Implements the Tower `Service` trait and provides the logic for executing
/// exchange operations over any transport.
pub struct TaskExchangeService<T> {
    transport: T,
    codec: Arc<dyn Codec>,
}

impl<T> TaskExchangeService<T>
where
    T: Transport,
{
    /// Create a new exchange service
    ///
    /// # Arguments
    ///
    /// * `transport` - The underlying transport implementation
    /// * `codec` - The codec for serialization/deserialization
    pub fn new(transport: T, codec: Arc<dyn Codec>) -> Self {
        Self { transport, codec }
    }

    /// Build a transport request from an exchange operation
    fn build_transport_request(
        req: &ExchangeRequest,
        codec: &dyn Codec,
    ) -> Result<TransportRequest, ExchangeError> {
        let endpoint = req.operation.endpoint();
        let method = req.operation.method();

        let mut transport_req = TransportRequest::new(endpoint, method)
            .header("Accept", codec.content_type().to_string());

        for (key, value) in &req.context.metadata {
            transport_req = transport_req.header(key.clone(), value.clone());
        }

        let body = codec.encode_request(&req.operation)?;
        if !body.is_empty() && method != "GET" {
            transport_req = transport_req
                .header("Content-Type", codec.content_type().to_string())
                .body(body);
        }

        Ok(transport_req)
    }

    /// Parse a transport response into an exchange response
    fn parse_transport_response(
        transport_resp: TransportResponse,
        codec: &dyn Codec,
        operation: &ExchangeOperation,
    ) -> Result<ExchangeResponse, ExchangeError> {
        if !transport_resp.is_success() {
            return Err(Self::handle_error_response(&transport_resp, operation));
        }

        codec.decode_response(&transport_resp.body, operation)
    }

    /// Map a non-2xx transport response to the operation-specific error
    ///
    /// The error envelope body carries `{status: "error", message}`; the
    /// message is surfaced as the error detail when it parses.
    fn handle_error_response(
        transport_resp: &TransportResponse,
        operation: &ExchangeOperation,
    ) -> ExchangeError {
        let detail = match serde_json::from_slice::<TaskResponse>(&transport_resp.body) {
            Ok(TaskResponse::Error { message }) => message,
            _ => String::from_utf8_lossy(&transport_resp.body).into_owned(),
        };

        match operation {
            ExchangeOperation::Discover => ExchangeError::DiscoveryFailed {
                status: transport_resp.status,
                detail,
            },
            ExchangeOperation::SendTask(_) => ExchangeError::TaskSubmissionFailed {
                status: transport_resp.status,
                detail,
            },
        }
    }
}

impl<T> Service<ExchangeRequest> for TaskExchangeService<T>
where
    T: Transport + Clone,
{
    type Response = ExchangeResponse;
    type Error = ExchangeError;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.transport.poll_ready(cx)
    }

    fn call(&mut self, req: ExchangeRequest) -> Self::Future {
        let transport = self.transport.clone();
        let codec = self.codec.clone();

        Box::pin(async move {
            let transport_req = Self::build_transport_request(&req, codec.as_ref())?;

            let transport_resp = transport.execute(transport_req).await?;

            Self::parse_transport_response(transport_resp, codec.as_ref(), &req.operation)
        })
    }
}

impl<T> Clone for TaskExchangeService<T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        Self {
            transport: self.transport.clone(),
            codec: self.codec.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use bytes::Bytes;

    use crate::{
        codec::JsonCodec,
        protocol::{message::Message, task::TaskRequest},
        service::RequestContext,
        transport::mock::MockTransport,
    };

    use super::*;

    #[tokio::test]
    async fn test_service_send_task() {
        let transport = MockTransport::new(|_req| {
            let envelope = TaskResponse::exchange(
                "t1",
                Message::user("hello"),
                Message::agent("2024-01-01 00:00:00"),
            );
            let json = serde_json::to_vec(&envelope).unwrap();
            TransportResponse::new(200).body(Bytes::from(json))
        });

        let codec = Arc::new(JsonCodec);
        let mut service = TaskExchangeService::new(transport, codec);

        let operation = ExchangeOperation::SendTask(TaskRequest::new("t1", Message::user("hello")));
        let request = ExchangeRequest::new(operation, RequestContext::default());

        let response = service.call(request).await.unwrap();

        match response {
            ExchangeResponse::Task(envelope) => {
                assert_eq!(envelope.id(), Some("t1"));
            }
            _ => panic!("Expected task response"),
        }
    }

    #[tokio::test]
    async fn test_service_discovery_failure() {
        let transport = MockTransport::new(|_req| TransportResponse::new(503));

        let codec = Arc::new(JsonCodec);
        let mut service = TaskExchangeService::new(transport, codec);

        let request = ExchangeRequest::new(ExchangeOperation::Discover, RequestContext::default());
        let result = service.call(request).await;

        assert!(matches!(
            result.unwrap_err(),
            ExchangeError::DiscoveryFailed { status: 503, .. }
        ));
    }

    #[tokio::test]
    async fn test_service_surfaces_error_envelope_detail() {
        let transport = MockTransport::new(|_req| {
            let body = r#"{"status": "error", "message": "Request body is empty"}"#;
            TransportResponse::new(400).body(Bytes::from_static(body.as_bytes()))
        });

        let codec = Arc::new(JsonCodec);
        let mut service = TaskExchangeService::new(transport, codec);

        let operation = ExchangeOperation::SendTask(TaskRequest::new("t1", Message::user("hello")));
        let request = ExchangeRequest::new(operation, RequestContext::default());

        match service.call(request).await.unwrap_err() {
            ExchangeError::TaskSubmissionFailed { status, detail } => {
                assert_eq!(status, 400);
                assert_eq!(detail, "Request body is empty");
            }
            other => panic!("Unexpected error: {other:?}"),
        }
    }
}
