//! Authentication and profile payloads.

use serde::{Deserialize, Serialize};

/// `POST /api/auth/login` request body. The username is the account email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
}

/// `POST /api/auth/check-user` — existence probe used by the password-reset
/// wizard. The password field is ignored server-side but required by the
/// endpoint's shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckUserRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckUserResponse {
    pub exists: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResetPasswordRequest {
    pub username: String,
    pub new_password: String,
}

/// The authenticated user's profile as returned by `GET /api/auth/profile`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Profile {
    pub username: String,
    #[serde(default)]
    pub nickname: String,
    #[serde(default)]
    pub full_name: String,
}

/// `PUT /api/auth/profile` — only the editable fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateProfileRequest {
    pub nickname: String,
    pub full_name: String,
}

/// `PUT /api/auth/profile/password`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangePasswordRequest {
    pub password: String,
}
