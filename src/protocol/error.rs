//! Error types for task exchange operations

use thiserror::Error;

/// Main error type for task exchange operations
#[derive(Debug, Error)]
pub enum ExchangeError {
    /// Request body could not be parsed as structured data
    #[error("Malformed payload: {0}")]
    MalformedPayload(String),

    /// Request body parsed to nothing
    #[error("Request body is empty")]
    EmptyPayload,

    /// A required field is missing or has the wrong shape
    #[error("Invalid task format: missing or invalid field `{field}`")]
    InvalidTaskFormat {
        /// Path of the offending field (e.g. "message.parts[0].text")
        field: String,
    },

    /// Discovery returned a non-2xx status
    #[error("Failed to discover agent: HTTP {status}: {detail}")]
    DiscoveryFailed {
        /// HTTP status code from the remote
        status: u16,

        /// Error detail reported by the remote, if any
        detail: String,
    },

    /// Task submission returned a non-2xx status
    #[error("Failed to send task: HTTP {status}: {detail}")]
    TaskSubmissionFailed {
        /// HTTP status code from the remote
        status: u16,

        /// Error detail reported by the remote, if any
        detail: String,
    },

    /// A guardrail blocked the request before it reached a handler
    #[error("Guardrail `{name}` blocked the request: {reason}")]
    GuardrailBlocked {
        /// Name of the guardrail that tripped
        name: String,

        /// Why the request was blocked
        reason: String,
    },

    /// No capability registered under the requested name
    #[error("Unknown capability: {0}")]
    UnknownCapability(String),

    /// Transport-level error (network, connection, etc.)
    #[error("Transport error: {0}")]
    Transport(String),

    /// Protocol-level error (unexpected response shape, etc.)
    #[error("Protocol error: {0}")]
    Protocol(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Request timeout
    #[error("Request timeout")]
    Timeout,
}

impl ExchangeError {
    /// Shorthand for an invalid-format error naming the offending field path
    pub fn invalid_field(field: impl Into<String>) -> Self {
        Self::InvalidTaskFormat {
            field: field.into(),
        }
    }

    /// Whether this error is the caller's fault (maps to a 4xx status)
    pub fn is_client_fault(&self) -> bool {
        matches!(
            self,
            ExchangeError::MalformedPayload(_)
                | ExchangeError::EmptyPayload
                | ExchangeError::InvalidTaskFormat { .. }
                | ExchangeError::GuardrailBlocked { .. }
        )
    }
}

/// Result type alias for exchange operations
pub type ExchangeResult<T> = Result<T, ExchangeError>;

impl From<reqwest::Error> for ExchangeError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ExchangeError::Timeout
        } else if err.is_connect() {
            ExchangeError::Transport(format!("Connection error: {}", err))
        } else {
            ExchangeError::Transport(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_field_message_names_path() {
        let err = ExchangeError::invalid_field("message.parts[0].text");
        assert_eq!(
            err.to_string(),
            "Invalid task format: missing or invalid field `message.parts[0].text`"
        );
    }

    #[test]
    fn test_client_fault_classification() {
        assert!(ExchangeError::EmptyPayload.is_client_fault());
        assert!(ExchangeError::MalformedPayload("eof".into()).is_client_fault());
        assert!(ExchangeError::invalid_field("id").is_client_fault());
        assert!(!ExchangeError::Timeout.is_client_fault());
        assert!(!ExchangeError::Transport("down".into()).is_client_fault());
    }

    #[test]
    fn test_submission_failure_message() {
        let err = ExchangeError::TaskSubmissionFailed {
            status: 400,
            detail: "Request body is empty".into(),
        };
        assert!(err.to_string().contains("400"));
        assert!(err.to_string().contains("empty"));
    }
}
