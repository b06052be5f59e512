//! Client configuration

use std::time::Duration;

/// Configuration for an exchange client
///
/// The agent's address belongs to the transport; the config carries the
/// client-side defaults applied to every request.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Default request timeout
    pub timeout: Duration,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new() -> Self {
        Self {
            timeout: Duration::from_secs(30),
        }
    }

    /// Set the timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new()
    }
}
