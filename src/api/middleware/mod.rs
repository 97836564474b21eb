//! Middleware components for request processing.
//!
//! This module contains middleware for logging, request ID tracking,
//! error handling, and API key authorization.

mod api_key;
mod error_handler;
mod logging;
mod request_id;

pub use api_key::{
    DOCS_PATH_PREFIX, INVALID_KEY_MESSAGE, MISSING_KEY_MESSAGE, api_key_middleware,
};
pub use error_handler::{
    error_to_code, error_to_status_code, handle_json_rejection, handle_path_rejection,
};
pub use logging::logging_middleware;
pub use request_id::{REQUEST_ID_HEADER, RequestId, request_id_middleware};
