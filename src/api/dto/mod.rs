//! Data Transfer Objects for API requests and responses.
//!
//! - `user` - User request/response DTOs
//! - `error` - Common error response DTOs

mod error;
mod user;

pub use error::ErrorResponse;
pub use user::{UserRequest, UserResponse};
