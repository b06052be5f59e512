//! Request body validation for the task endpoint
//!
//! Checks run in a fixed order: the body must parse as JSON, must not parse
//! to null, and must carry the required fields with the expected shapes.
//! Every failure names the error category and, for field errors, the path of
//! the offending field.

use serde_json::Value;

use crate::protocol::{ExchangeError, TaskRequest};

/// Parse and validate a task submission body
pub fn parse_task_request(body: &[u8]) -> Result<TaskRequest, ExchangeError> {
    let value: Value = serde_json::from_slice(body)
        .map_err(|e| ExchangeError::MalformedPayload(e.to_string()))?;

    if value.is_null() {
        return Err(ExchangeError::EmptyPayload);
    }

    value
        .get("id")
        .and_then(Value::as_str)
        .ok_or_else(|| ExchangeError::invalid_field("id"))?;

    let message = value
        .get("message")
        .filter(|m| m.is_object())
        .ok_or_else(|| ExchangeError::invalid_field("message"))?;

    let role = message
        .get("role")
        .and_then(Value::as_str)
        .ok_or_else(|| ExchangeError::invalid_field("message.role"))?;
    if role != "user" && role != "agent" {
        return Err(ExchangeError::invalid_field("message.role"));
    }

    let parts = message
        .get("parts")
        .and_then(Value::as_array)
        .ok_or_else(|| ExchangeError::invalid_field("message.parts"))?;

    let first = parts
        .first()
        .ok_or_else(|| ExchangeError::invalid_field("message.parts[0]"))?;

    first
        .get("text")
        .and_then(Value::as_str)
        .ok_or_else(|| ExchangeError::invalid_field("message.parts[0].text"))?;

    // Structural checks passed; residual shape problems (e.g. a malformed
    // later part) still surface as a format error, not a fault.
    serde_json::from_value(value)
        .map_err(|_| ExchangeError::invalid_field("message"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: &str) -> Result<TaskRequest, ExchangeError> {
        parse_task_request(body.as_bytes())
    }

    #[test]
    fn test_valid_request() {
        let request = parse(
            r#"{"id": "t1", "message": {"role": "user", "parts": [{"text": "hello"}], "metadata": {}}}"#,
        )
        .unwrap();

        assert_eq!(request.id, "t1");
        assert_eq!(request.message.first_text(), Some("hello"));
    }

    #[test]
    fn test_non_json_body_is_malformed() {
        let err = parse("this is not json").unwrap_err();
        assert!(matches!(err, ExchangeError::MalformedPayload(_)));
    }

    #[test]
    fn test_empty_body_is_malformed() {
        // Zero bytes do not parse as JSON at all
        let err = parse_task_request(b"").unwrap_err();
        assert!(matches!(err, ExchangeError::MalformedPayload(_)));
    }

    #[test]
    fn test_null_body_is_empty_payload() {
        let err = parse("null").unwrap_err();
        assert!(matches!(err, ExchangeError::EmptyPayload));
    }

    #[test]
    fn test_missing_id() {
        let err = parse(r#"{"message": {"role": "user", "parts": [{"text": "x"}]}}"#).unwrap_err();
        assert!(matches!(err, ExchangeError::InvalidTaskFormat { field } if field == "id"));
    }

    #[test]
    fn test_non_string_id() {
        let err =
            parse(r#"{"id": 7, "message": {"role": "user", "parts": [{"text": "x"}]}}"#)
                .unwrap_err();
        assert!(matches!(err, ExchangeError::InvalidTaskFormat { field } if field == "id"));
    }

    #[test]
    fn test_missing_message() {
        let err = parse(r#"{"id": "t1"}"#).unwrap_err();
        assert!(matches!(err, ExchangeError::InvalidTaskFormat { field } if field == "message"));
    }

    #[test]
    fn test_invalid_role() {
        let err = parse(r#"{"id": "t1", "message": {"role": "robot", "parts": [{"text": "x"}]}}"#)
            .unwrap_err();
        assert!(
            matches!(err, ExchangeError::InvalidTaskFormat { field } if field == "message.role")
        );
    }

    #[test]
    fn test_missing_parts() {
        let err = parse(r#"{"id": "t1", "message": {"role": "user"}}"#).unwrap_err();
        assert!(
            matches!(err, ExchangeError::InvalidTaskFormat { field } if field == "message.parts")
        );
    }

    #[test]
    fn test_empty_parts_list() {
        let err = parse(r#"{"id": "t1", "message": {"role": "user", "parts": []}}"#).unwrap_err();
        assert!(
            matches!(err, ExchangeError::InvalidTaskFormat { field } if field == "message.parts[0]")
        );
    }

    #[test]
    fn test_first_part_without_text() {
        let err = parse(r#"{"id": "t1", "message": {"role": "user", "parts": [{"data": {}}]}}"#)
            .unwrap_err();
        assert!(matches!(
            err,
            ExchangeError::InvalidTaskFormat { field } if field == "message.parts[0].text"
        ));
    }

    #[test]
    fn test_validation_order_malformed_before_fields() {
        // A truncated body never reaches field checks
        let err = parse(r#"{"id": "#).unwrap_err();
        assert!(matches!(err, ExchangeError::MalformedPayload(_)));
    }
}
