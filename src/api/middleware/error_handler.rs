//! Error handler for converting AppError to HTTP responses.
//!
//! This module implements the IntoResponse trait for AppError. Client
//! errors keep the body shapes existing clients depend on (a JSON list of
//! field errors, plaintext messages, an empty 404). Server errors are
//! sanitized into an `ErrorResponse` and logged with their source.

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::api::dto::ErrorResponse;
use crate::error::AppError;

impl IntoResponse for AppError {
    /// Converts an AppError into an HTTP response.
    ///
    /// # Status Code Mapping
    /// - ValidationErrors → 400, JSON array of `{field, message}`
    /// - BadRequest → 400, plaintext message
    /// - Unauthorized → 401, plaintext message
    /// - NotFound → 404, empty body
    /// - Duplicate → 409, `ErrorResponse`
    /// - Database, Configuration, Internal → 500, `ErrorResponse`
    /// - ConnectionPool → 503, `ErrorResponse`
    fn into_response(self) -> Response {
        let status = error_to_status_code(&self);

        match self {
            AppError::ValidationErrors { errors } => (status, Json(errors)).into_response(),
            AppError::BadRequest { message } | AppError::Unauthorized { message } => {
                (status, message).into_response()
            }
            AppError::NotFound { .. } => status.into_response(),
            AppError::Duplicate {
                entity,
                field,
                value,
            } => (
                status,
                Json(ErrorResponse::duplicate_error(&entity, &field, &value)),
            )
                .into_response(),
            server_error => {
                tracing::error!(error = ?server_error, "Request failed");
                (status, Json(sanitized_response(&server_error))).into_response()
            }
        }
    }
}

/// Builds a body for server-side failures that never exposes the source error.
fn sanitized_response(error: &AppError) -> ErrorResponse {
    let code = error_to_code(error);
    match error {
        AppError::Database { operation, .. } => ErrorResponse::new(
            code,
            &format!("Database operation failed: {}", operation),
        )
        .with_details(json!({ "operation": operation })),
        AppError::Configuration { key, .. } => {
            ErrorResponse::new(code, &format!("Configuration error: {}", key))
                .with_details(json!({ "key": key }))
        }
        AppError::ConnectionPool { .. } => {
            ErrorResponse::new(code, "Database connection unavailable")
        }
        _ => ErrorResponse::new(code, "An internal error occurred"),
    }
}

/// Converts axum JSON rejection errors to ErrorResponse.
pub fn handle_json_rejection(rejection: JsonRejection) -> Response {
    let error_response = match rejection {
        JsonRejection::JsonDataError(err) => {
            ErrorResponse::new("INVALID_JSON", "Invalid JSON format")
                .with_details(json!({ "error": err.body_text() }))
        }
        JsonRejection::JsonSyntaxError(err) => {
            ErrorResponse::new("JSON_SYNTAX_ERROR", "JSON syntax error")
                .with_details(json!({ "error": err.body_text() }))
        }
        JsonRejection::MissingJsonContentType(_) => ErrorResponse::new(
            "MISSING_CONTENT_TYPE",
            "Missing or invalid Content-Type header",
        )
        .with_details(json!({ "expected": "application/json" })),
        JsonRejection::BytesRejection(_) => {
            ErrorResponse::new("INVALID_BODY", "Failed to read request body")
        }
        _ => ErrorResponse::new("JSON_ERROR", "Failed to parse JSON request"),
    };

    (StatusCode::BAD_REQUEST, Json(error_response)).into_response()
}

/// Converts axum path rejection errors to ErrorResponse.
pub fn handle_path_rejection(rejection: PathRejection) -> Response {
    let error_response = match rejection {
        PathRejection::FailedToDeserializePathParams(err) => {
            ErrorResponse::new("INVALID_PATH_PARAMS", "Invalid path parameters")
                .with_details(json!({ "error": err.body_text() }))
        }
        PathRejection::MissingPathParams(err) => {
            ErrorResponse::new("MISSING_PATH_PARAMS", "Missing required path parameters")
                .with_details(json!({ "error": err.body_text() }))
        }
        _ => ErrorResponse::new("PATH_ERROR", "Invalid path parameters"),
    };

    (StatusCode::BAD_REQUEST, Json(error_response)).into_response()
}

/// Maps an AppError variant to its corresponding HTTP status code.
pub fn error_to_status_code(error: &AppError) -> StatusCode {
    match error {
        AppError::NotFound { .. } => StatusCode::NOT_FOUND,
        AppError::Duplicate { .. } => StatusCode::CONFLICT,
        AppError::ValidationErrors { .. } => StatusCode::BAD_REQUEST,
        AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
        AppError::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
        AppError::Database { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        AppError::Configuration { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        AppError::ConnectionPool { .. } => StatusCode::SERVICE_UNAVAILABLE,
        AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Maps an AppError variant to its error code string.
pub fn error_to_code(error: &AppError) -> &'static str {
    match error {
        AppError::NotFound { .. } => "NOT_FOUND",
        AppError::Duplicate { .. } => "DUPLICATE_ENTRY",
        AppError::ValidationErrors { .. } => "VALIDATION_ERROR",
        AppError::BadRequest { .. } => "BAD_REQUEST",
        AppError::Unauthorized { .. } => "UNAUTHORIZED",
        AppError::Database { .. } => "DATABASE_ERROR",
        AppError::Configuration { .. } => "CONFIGURATION_ERROR",
        AppError::ConnectionPool { .. } => "SERVICE_UNAVAILABLE",
        AppError::Internal { .. } => "INTERNAL_ERROR",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationFieldError;
    use axum::http::header;

    async fn body_of(response: Response) -> (Option<String>, Vec<u8>) {
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .map(|v| v.to_str().unwrap().to_string());
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (content_type, bytes.to_vec())
    }

    #[test]
    fn test_status_and_code_mapping() {
        let cases: Vec<(AppError, StatusCode, &str)> = vec![
            (AppError::user_not_found("x"), StatusCode::NOT_FOUND, "NOT_FOUND"),
            (
                AppError::Duplicate {
                    entity: "usuarios".to_string(),
                    field: "id".to_string(),
                    value: "x".to_string(),
                },
                StatusCode::CONFLICT,
                "DUPLICATE_ENTRY",
            ),
            (
                AppError::ValidationErrors { errors: vec![] },
                StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
            ),
            (
                AppError::BadRequest {
                    message: "x".to_string(),
                },
                StatusCode::BAD_REQUEST,
                "BAD_REQUEST",
            ),
            (
                AppError::Unauthorized {
                    message: "x".to_string(),
                },
                StatusCode::UNAUTHORIZED,
                "UNAUTHORIZED",
            ),
            (
                AppError::Database {
                    operation: "insert user".to_string(),
                    source: anyhow::anyhow!("boom"),
                },
                StatusCode::INTERNAL_SERVER_ERROR,
                "DATABASE_ERROR",
            ),
            (
                AppError::Configuration {
                    key: "database.url".to_string(),
                    source: anyhow::anyhow!("missing"),
                },
                StatusCode::INTERNAL_SERVER_ERROR,
                "CONFIGURATION_ERROR",
            ),
            (
                AppError::ConnectionPool {
                    source: anyhow::anyhow!("timed out"),
                },
                StatusCode::SERVICE_UNAVAILABLE,
                "SERVICE_UNAVAILABLE",
            ),
            (
                AppError::Internal {
                    source: anyhow::anyhow!("unexpected"),
                },
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
            ),
        ];

        for (error, status, code) in cases {
            assert_eq!(error_to_status_code(&error), status, "{:?}", error);
            assert_eq!(error_to_code(&error), code, "{:?}", error);
        }
    }

    #[tokio::test]
    async fn test_validation_errors_render_as_json_list() {
        let error = AppError::ValidationErrors {
            errors: vec![ValidationFieldError::new("name", "Name is required.")],
        };
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let (content_type, body) = body_of(response).await;
        assert_eq!(content_type.as_deref(), Some("application/json"));
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(
            value,
            json!([{ "field": "name", "message": "Name is required." }])
        );
    }

    #[tokio::test]
    async fn test_unauthorized_renders_as_plaintext() {
        let error = AppError::Unauthorized {
            message: "API Key is missing".to_string(),
        };
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let (content_type, body) = body_of(response).await;
        assert!(content_type.unwrap().starts_with("text/plain"));
        assert_eq!(body, b"API Key is missing");
    }

    #[tokio::test]
    async fn test_not_found_has_empty_body() {
        let response = AppError::user_not_found("abc").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let (_, body) = body_of(response).await;
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn test_database_error_is_sanitized() {
        let error = AppError::Database {
            operation: "list users".to_string(),
            source: anyhow::anyhow!("password authentication failed for user postgres"),
        };
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let (_, body) = body_of(response).await;
        let text = String::from_utf8(body).unwrap();
        assert!(text.contains("DATABASE_ERROR"));
        assert!(text.contains("list users"));
        assert!(!text.contains("password authentication"));
    }

    #[tokio::test]
    async fn test_internal_error_is_sanitized() {
        let error = AppError::Internal {
            source: anyhow::anyhow!("stack trace with secrets"),
        };
        let (_, body) = body_of(error.into_response()).await;
        let response: ErrorResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(response.code, "INTERNAL_ERROR");
        assert_eq!(response.message, "An internal error occurred");
    }
}
