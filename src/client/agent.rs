//! High-level exchange client

use tower_service::Service;
use uuid::Uuid;

use crate::{
    client::config::ClientConfig,
    protocol::{
        AgentDescriptor, ExchangeError, ExchangeOperation, Message, TaskRequest, TaskResponse,
    },
    service::{ExchangeRequest, ExchangeResponse, RequestContext},
};

/// High-level client for the task exchange protocol
///
/// Wraps a Tower service and provides discovery and task submission. The
/// service is generic over any implementation satisfying the Service trait
/// bounds, so tests can swap in an in-memory transport.
///
/// # Example
///
/// ```rust,no_run
/// use taskwire::prelude::*;
///
/// # async fn example() -> Result<(), ExchangeError> {
/// let url = "http://localhost:5001".parse().unwrap();
/// let mut client = ExchangeClientBuilder::new_http(url).build()?;
///
/// let response = client.submit_text(None, "What is the current time?").await?;
/// println!("Reply: {:?}", response.messages());
/// # Ok(())
/// # }
/// ```
pub struct ExchangeClient<S> {
    service: S,
    config: ClientConfig,
    descriptor: Option<AgentDescriptor>,
}

impl<S> ExchangeClient<S>
where
    S: Service<ExchangeRequest, Response = ExchangeResponse, Error = ExchangeError>,
{
    /// Create a new exchange client
    pub fn new(service: S, config: ClientConfig) -> Self {
        Self {
            service,
            config,
            descriptor: None,
        }
    }

    /// Get the client configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Build a request context from the client configuration
    fn build_context(&self) -> RequestContext {
        RequestContext::new().with_timeout(self.config.timeout)
    }

    /// Fetch the agent descriptor
    ///
    /// The descriptor is immutable server-side, so it is cached after the
    /// first successful fetch.
    ///
    /// # Errors
    ///
    /// Returns [`ExchangeError::DiscoveryFailed`] when the remote answers
    /// with a non-2xx status.
    pub async fn discover(&mut self) -> Result<AgentDescriptor, ExchangeError> {
        if let Some(descriptor) = &self.descriptor {
            return Ok(descriptor.clone());
        }

        let request = ExchangeRequest::new(ExchangeOperation::Discover, self.build_context());
        let response = self.service.call(request).await?;

        match response {
            ExchangeResponse::Descriptor(descriptor) => {
                tracing::debug!(agent = %descriptor.name, "agent discovered");
                self.descriptor = Some(*descriptor.clone());
                Ok(*descriptor)
            }
            _ => Err(ExchangeError::Protocol(
                "Expected descriptor response from discover".into(),
            )),
        }
    }

    /// Submit a task and return the parsed response envelope
    ///
    /// # Errors
    ///
    /// Returns [`ExchangeError::TaskSubmissionFailed`] when the remote
    /// answers with a non-2xx status. A single network error propagates as
    /// fatal; no retry is attempted.
    pub async fn send_task(&mut self, task: TaskRequest) -> Result<TaskResponse, ExchangeError> {
        let request =
            ExchangeRequest::new(ExchangeOperation::SendTask(task), self.build_context());
        let response = self.service.call(request).await?;

        match response {
            ExchangeResponse::Task(envelope) => Ok(*envelope),
            _ => Err(ExchangeError::Protocol(
                "Expected task response from send_task".into(),
            )),
        }
    }

    /// Discover the agent, then submit a plain-text task
    ///
    /// Generates a fresh unique task id when the caller does not supply one.
    pub async fn submit_text(
        &mut self,
        task_id: Option<String>,
        text: impl Into<String>,
    ) -> Result<TaskResponse, ExchangeError> {
        self.discover().await?;

        let id = task_id.unwrap_or_else(|| Uuid::now_v7().to_string());
        let task = TaskRequest::new(id, Message::user(text));

        self.send_task(task).await
    }
}
