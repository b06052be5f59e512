//! Validation layer for outgoing exchange requests

use std::{
    future::Future,
    pin::Pin,
    task::{Context, Poll},
};

use tower_layer::Layer;
use tower_service::Service;

use crate::{
    protocol::{error::ExchangeError, message::MessagePart, operation::ExchangeOperation},
    service::{ExchangeRequest, ExchangeResponse},
};

/// Layer that validates exchange requests before they reach the wire
///
/// Mirrors the server-side field checks so a structurally invalid task is
/// rejected locally instead of costing a round trip.
#[derive(Clone, Debug, Default)]
pub struct ValidationLayer;

impl ValidationLayer {
    /// Create a new validation layer
    pub fn new() -> Self {
        Self
    }
}

impl<S> Layer<S> for ValidationLayer {
    type Service = ValidationService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        ValidationService { inner }
    }
}

/// Validation service that wraps an inner service
#[derive(Clone)]
pub struct ValidationService<S> {
    inner: S,
}

impl<S> ValidationService<S> {
    /// Validate an exchange request
    fn validate_request(req: &ExchangeRequest) -> Result<(), ExchangeError> {
        if let ExchangeOperation::SendTask(task) = &req.operation {
            if task.id.is_empty() {
                return Err(ExchangeError::invalid_field("id"));
            }

            if task.message.parts.is_empty() {
                return Err(ExchangeError::invalid_field("message.parts"));
            }

            match &task.message.parts[0] {
                MessagePart::Text { text } if text.is_empty() => {
                    return Err(ExchangeError::invalid_field("message.parts[0].text"));
                }
                MessagePart::Text { .. } => {}
                MessagePart::Data { .. } => {
                    return Err(ExchangeError::invalid_field("message.parts[0].text"));
                }
            }
        }

        Ok(())
    }
}

impl<S> Service<ExchangeRequest> for ValidationService<S>
where
    S: Service<ExchangeRequest, Response = ExchangeResponse, Error = ExchangeError>
        + Clone
        + Send
        + 'static,
    S::Future: Send,
{
    type Response = ExchangeResponse;
    type Error = ExchangeError;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: ExchangeRequest) -> Self::Future {
        if let Err(e) = Self::validate_request(&req) {
            return Box::pin(async move { Err(e) });
        }

        let mut inner = self.inner.clone();
        Box::pin(async move { inner.call(req).await })
    }
}
