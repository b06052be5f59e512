//! Task request and response envelopes

use serde::{Deserialize, Serialize};

use super::message::Message;

/// A task submission
///
/// A task is one request/response exchange, identified by a caller-chosen id
/// that is unique per logical task. The server retains no state for a task
/// once the response has been produced.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TaskRequest {
    /// Caller-chosen task identifier
    pub id: String,

    /// The message submitted for processing
    pub message: Message,
}

impl TaskRequest {
    /// Create a new task request
    pub fn new(id: impl Into<String>, message: Message) -> Self {
        Self {
            id: id.into(),
            message,
        }
    }
}

/// Response envelope for a task submission
///
/// Tagged on the `status` field: a success carries the echoed task id and the
/// message sequence (the original message first, agent replies after); an
/// error carries a human-readable explanation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum TaskResponse {
    /// The task was processed
    Success {
        /// Echo of the request id
        id: String,

        /// The original message followed by agent replies
        messages: Vec<Message>,
    },

    /// The task was rejected or failed
    Error {
        /// Human-readable explanation
        message: String,
    },
}

impl TaskResponse {
    /// Build a success envelope from the original message and a single reply
    pub fn exchange(id: impl Into<String>, original: Message, reply: Message) -> Self {
        Self::Success {
            id: id.into(),
            messages: vec![original, reply],
        }
    }

    /// Build an error envelope
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
        }
    }

    /// The echoed task id, if this is a success
    pub fn id(&self) -> Option<&str> {
        match self {
            TaskResponse::Success { id, .. } => Some(id),
            TaskResponse::Error { .. } => None,
        }
    }

    /// The message sequence, if this is a success
    pub fn messages(&self) -> Option<&[Message]> {
        match self {
            TaskResponse::Success { messages, .. } => Some(messages),
            TaskResponse::Error { .. } => None,
        }
    }

    /// Check whether this is a success envelope
    pub fn is_success(&self) -> bool {
        matches!(self, TaskResponse::Success { .. })
    }
}
