//! Authentication models

use serde::{Deserialize, Serialize};

/// Body for `POST /login`
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// `data` of a successful login response
#[derive(Debug, Clone, Deserialize)]
pub struct LoginData {
    /// Bearer token for subsequent calls
    #[serde(rename = "authToken")]
    pub auth_token: String,
}

/// Body for `POST /reset_password`
#[derive(Debug, Clone, Serialize)]
pub struct PasswordResetRequest {
    pub usuario: String,
    pub email: String,
}
