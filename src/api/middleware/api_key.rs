//! Static API key gate.
//!
//! Every request outside the documentation prefix must carry the configured
//! header with a value byte-equal to the configured secret.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::error::AppError;
use crate::state::AppState;

/// Path prefix served without a key.
pub const DOCS_PATH_PREFIX: &str = "/swagger";

pub const MISSING_KEY_MESSAGE: &str = "API Key is missing";
pub const INVALID_KEY_MESSAGE: &str = "Unauthorized client";

/// API key middleware
///
/// # Errors
/// Returns 401 Unauthorized with a plaintext body if:
/// - the key header is missing (`API Key is missing`)
/// - the key does not match the configured secret (`Unauthorized client`)
///
/// # Example
/// ```ignore
/// Router::new()
///     .route("/protected", get(handler))
///     .layer(middleware::from_fn_with_state(state.clone(), api_key_middleware))
/// ```
pub async fn api_key_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    if is_docs_path(request.uri().path()) {
        return Ok(next.run(request).await);
    }

    let config = &state.api_key;
    let provided = request
        .headers()
        .get(config.header.as_str())
        .ok_or_else(|| {
            tracing::warn!(path = %request.uri().path(), "Request without API key rejected");
            AppError::Unauthorized {
                message: MISSING_KEY_MESSAGE.to_string(),
            }
        })?;

    // Values that are not visible ASCII never match.
    if provided.to_str().ok() != Some(config.secret.as_str()) {
        tracing::warn!(path = %request.uri().path(), "Request with invalid API key rejected");
        return Err(AppError::Unauthorized {
            message: INVALID_KEY_MESSAGE.to_string(),
        });
    }

    Ok(next.run(request).await)
}

/// Segment-aware prefix match: `/swagger` and `/swagger/...` but not
/// `/swaggerfoo`.
fn is_docs_path(path: &str) -> bool {
    path.strip_prefix(DOCS_PATH_PREFIX)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_docs_path_matching() {
        assert!(is_docs_path("/swagger"));
        assert!(is_docs_path("/swagger/"));
        assert!(is_docs_path("/swagger/v1/swagger.json"));
        assert!(!is_docs_path("/swaggerfoo"));
        assert!(!is_docs_path("/api/usuario/get"));
        assert!(!is_docs_path("/api/swagger"));
    }
}
