//! User DTOs for API requests and responses.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::User;

// ============================================================================
// Request DTOs
// ============================================================================

/// Request body for insert and update.
///
/// Every field may be omitted: missing strings arrive empty and are then
/// rejected by the validator, a missing id stays `None`.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct UserRequest {
    /// Ignored on insert; must equal the path id on update
    pub id: Option<Uuid>,
    pub name: String,
    #[schema(format = "email")]
    pub email: String,
    #[schema(format = "password")]
    pub password: String,
}

impl UserRequest {
    /// Converts the request into a `User`, using the nil UUID for an absent id.
    pub fn into_user(self) -> User {
        User {
            id: self.id.unwrap_or_else(Uuid::nil),
            name: self.name,
            email: self.email,
            password: self.password,
        }
    }
}

// ============================================================================
// Response DTOs
// ============================================================================

/// Response body for user data.
///
/// The password is returned as stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            password: user.password,
        }
    }
}
