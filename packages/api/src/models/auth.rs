use serde::{Deserialize, Serialize};
use store::{Session, UserProfile};

use crate::ApiError;

/// Body of `POST /auth/login`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Body of `POST /auth/register`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RegistrationRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub bio: String,
}

/// Answer of both auth endpoints.
///
/// `success` defaults to `false` so the backend's generic error body
/// (`{ error, message, status, timestamp }`) reads as a rejection carrying its
/// message.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AuthResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub user: Option<UserProfile>,
    #[serde(default)]
    pub token: Option<String>,
}

impl AuthResponse {
    /// The session carried by a successful response.
    pub fn into_session(self) -> Result<Session, ApiError> {
        let user = self.user.ok_or(ApiError::MissingField("user"))?;
        let token = self.token.ok_or(ApiError::MissingField("token"))?;
        Ok(Session { user, token })
    }
}
