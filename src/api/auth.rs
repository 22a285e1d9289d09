//! Authentication endpoints: login and register.
//!
//! Token issuance is the API's business; from this side the token is an
//! opaque string handed back with a denormalized identity. Calls go out
//! unauthenticated — there is no session yet.

use serde::{Deserialize, Serialize};

use super::{ApiClient, ApiError};
use crate::session::UserIdentity;

/// Token plus identity snapshot returned by both login and register.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub token: String,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub profile_image: Option<String>,
}

impl AuthResponse {
    /// Split into the pieces the credential store wants.
    #[must_use]
    pub fn into_parts(self) -> (String, UserIdentity) {
        let user = UserIdentity {
            username: self.username,
            email: self.email,
            profile_image: self.profile_image,
        };
        (self.token, user)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

pub async fn login(api: &ApiClient, request: &LoginRequest) -> Result<AuthResponse, ApiError> {
    api.post_json("/auth/login", request, None).await
}

pub async fn register(api: &ApiClient, request: &RegisterRequest) -> Result<AuthResponse, ApiError> {
    api.post_json("/auth/register", request, None).await
}
