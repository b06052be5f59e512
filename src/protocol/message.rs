//! Task exchange message types

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A message exchanged between a caller and an agent
///
/// Messages carry a role (user or agent), an ordered sequence of parts, and a
/// metadata object. Metadata is always serialized, even when empty, so that a
/// message round-trips verbatim through the response envelope.
///
/// The echo in the response envelope goes through this typed schema: known
/// fields (including arbitrary metadata keys) round-trip exactly, while
/// unknown fields on the message or its parts are dropped. Callers who need
/// extra data echoed back put it in `metadata`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Message {
    /// Role of the message sender
    pub role: Role,

    /// Message content parts (at least one required)
    pub parts: Vec<MessagePart>,

    /// Free-form metadata, possibly empty
    #[serde(default)]
    pub metadata: Map<String, Value>,
}

impl Message {
    /// Create a new message with a single text part
    pub fn new(role: Role, text: impl Into<String>) -> Self {
        Self {
            role,
            parts: vec![MessagePart::Text { text: text.into() }],
            metadata: Map::new(),
        }
    }

    /// Create a user message with text content
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Role::User, text)
    }

    /// Create an agent message with text content
    pub fn agent(text: impl Into<String>) -> Self {
        Self::new(Role::Agent, text)
    }

    /// Add a metadata field to the message
    pub fn with_metadata(mut self, key: impl Into<String>, value: Value) -> Self {
        self.metadata.insert(key.into(), value);
        self
    }

    /// Add a message part
    pub fn with_part(mut self, part: MessagePart) -> Self {
        self.parts.push(part);
        self
    }

    /// Text of the first part, if the first part is textual
    pub fn first_text(&self) -> Option<&str> {
        match self.parts.first() {
            Some(MessagePart::Text { text }) => Some(text),
            _ => None,
        }
    }
}

/// Role of a message sender
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Message from a user
    User,

    /// Message from an agent
    Agent,
}

/// A part of a message
///
/// A part currently carries only text; the data variant is the extension
/// point for richer part kinds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum MessagePart {
    /// Text content
    Text {
        /// The text content
        text: String,
    },

    /// Structured data
    Data {
        /// The structured data
        data: Value,
    },
}

impl MessagePart {
    /// Create a text part
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    /// Create a data part
    pub fn data(data: Value) -> Self {
        Self::Data { data }
    }
}
