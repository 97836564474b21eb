//! Error response DTOs.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

/// Standard JSON error body for failures that are not field validation,
/// plaintext gate rejections or empty-body lookups.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Stable machine readable code, e.g. `DUPLICATE_ENTRY`
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub details: Option<Value>,
}

impl ErrorResponse {
    /// Creates a new error response with code and message.
    pub fn new(code: &str, message: &str) -> Self {
        Self {
            code: code.to_string(),
            message: message.to_string(),
            details: None,
        }
    }

    /// Adds structured details to the error response.
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    pub fn duplicate_error(entity: &str, field: &str, value: &str) -> Self {
        Self::new(
            "DUPLICATE_ENTRY",
            &format!("{} with {} '{}' already exists", entity, field, value),
        )
        .with_details(serde_json::json!({
            "entity": entity,
            "field": field,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_details_omitted_when_absent() {
        let body = serde_json::to_value(ErrorResponse::new("BAD_REQUEST", "nope")).unwrap();
        assert_eq!(body, serde_json::json!({"code": "BAD_REQUEST", "message": "nope"}));
    }

    #[test]
    fn test_duplicate_error_does_not_echo_value_in_details() {
        let response = ErrorResponse::duplicate_error("usuarios", "id", "abc");
        assert_eq!(response.code, "DUPLICATE_ENTRY");
        assert_eq!(
            response.details,
            Some(serde_json::json!({"entity": "usuarios", "field": "id"}))
        );
    }
}
