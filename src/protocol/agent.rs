//! Agent discovery descriptor types

use serde::{Deserialize, Serialize};

/// Agent descriptor for discovery
///
/// The descriptor is published at `/.well-known/agent.json` and describes the
/// agent's identity, endpoint URL, and capabilities. It is built once at
/// startup and served verbatim on every discovery request, so two consecutive
/// discovery calls return byte-identical content.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AgentDescriptor {
    /// Name of the agent
    pub name: String,

    /// Human-readable description of the agent
    pub description: String,

    /// Task submission endpoint URL
    pub url: String,

    /// Agent capabilities
    pub capabilities: AgentCapabilities,

    /// Agent version
    pub version: String,
}

impl AgentDescriptor {
    /// Create a new agent descriptor
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            url: url.into(),
            capabilities: AgentCapabilities::default(),
            version: "1.0.0".to_string(),
        }
    }

    /// Set the agent capabilities
    pub fn with_capabilities(mut self, capabilities: AgentCapabilities) -> Self {
        self.capabilities = capabilities;
        self
    }

    /// Set the agent version
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }
}

/// Agent capabilities advertised in the descriptor
#[derive(Debug, Default, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct AgentCapabilities {
    /// Supports streaming responses
    #[serde(default)]
    pub streaming: bool,

    /// Supports push notifications via webhooks
    #[serde(rename = "pushNotifications", default)]
    pub push_notifications: bool,
}

impl AgentCapabilities {
    /// Create capabilities with default values (all false)
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable streaming
    pub fn with_streaming(mut self) -> Self {
        self.streaming = true;
        self
    }

    /// Enable push notifications
    pub fn with_push_notifications(mut self) -> Self {
        self.push_notifications = true;
        self
    }
}
