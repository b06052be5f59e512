//! Client builder for constructing exchange clients

use std::{sync::Arc, time::Duration};

use url::Url;

use crate::{
    client::{ClientConfig, ExchangeClient},
    codec::{Codec, JsonCodec},
    protocol::ExchangeError,
    service::TaskExchangeService,
    transport::{HttpTransport, Transport},
};

/// Builder for constructing exchange clients
///
/// # Example
///
/// ```rust,no_run
/// use taskwire::prelude::*;
/// use std::time::Duration;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let url = "http://localhost:5001".parse().unwrap();
/// let mut client = ExchangeClientBuilder::new_http(url)
///     .with_timeout(Duration::from_secs(10))
///     .build()?;
///
/// let descriptor = client.discover().await?;
/// println!("Connected to: {}", descriptor.name);
/// # Ok(())
/// # }
/// ```
pub struct ExchangeClientBuilder<T: Transport> {
    transport: Option<T>,
    codec: Option<Arc<dyn Codec>>,
    timeout: Option<Duration>,
}

impl<T: Transport> ExchangeClientBuilder<T> {
    /// Create a builder without a transport; pair with
    /// [`with_transport`](Self::with_transport)
    pub fn new() -> Self {
        Self {
            transport: None,
            codec: None,
            timeout: Some(Duration::from_secs(30)),
        }
    }

    /// Use a custom transport
    pub fn with_transport(mut self, transport: T) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Use a custom codec
    pub fn with_codec(mut self, codec: Arc<dyn Codec>) -> Self {
        self.codec = Some(codec);
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the exchange client
    ///
    /// # Errors
    ///
    /// Returns an error if no transport has been configured
    pub fn build(self) -> Result<ExchangeClient<TaskExchangeService<T>>, ExchangeError> {
        let transport = self.transport.ok_or_else(|| {
            ExchangeError::Protocol(
                "Transport not configured. Use new_http() or with_transport()".into(),
            )
        })?;

        let codec = self.codec.unwrap_or_else(|| Arc::new(JsonCodec));

        let service = TaskExchangeService::new(transport, codec);

        let config = ClientConfig::new()
            .with_timeout(self.timeout.unwrap_or(Duration::from_secs(30)));

        Ok(ExchangeClient::new(service, config))
    }
}

impl<T: Transport> Default for ExchangeClientBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl ExchangeClientBuilder<HttpTransport> {
    /// Create a new client builder with HTTP transport (HTTP+JSON binding)
    ///
    /// # Arguments
    ///
    /// * `agent_url` - The base URL of the agent (e.g. "<http://localhost:5001>")
    pub fn new_http(agent_url: Url) -> Self {
        Self {
            transport: Some(HttpTransport::new(agent_url)),
            codec: Some(Arc::new(JsonCodec)),
            timeout: Some(Duration::from_secs(30)),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::transport::mock::MockTransport;

    use super::*;

    fn agent_url() -> Url {
        "http://localhost:5001".parse().unwrap()
    }

    #[test]
    fn test_builder_with_http() {
        let client = ExchangeClientBuilder::new_http(agent_url()).build();
        assert!(client.is_ok());
    }

    #[test]
    fn test_builder_with_mock_transport() {
        let client = ExchangeClientBuilder::new()
            .with_transport(MockTransport::ok())
            .with_codec(Arc::new(JsonCodec))
            .build();

        assert!(client.is_ok());
    }

    #[test]
    fn test_builder_without_transport_fails() {
        let result = ExchangeClientBuilder::<MockTransport>::new().build();
        assert!(result.is_err());
    }

    #[test]
    fn test_builder_with_timeout() {
        let client = ExchangeClientBuilder::new_http(agent_url())
            .with_timeout(Duration::from_secs(60))
            .build()
            .unwrap();

        assert_eq!(client.config().timeout, Duration::from_secs(60));
    }
}
