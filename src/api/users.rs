//! User profile endpoints.

use super::{ApiClient, ApiError};
use crate::models::{UpdatePasswordRequest, UpdateProfileRequest, UserProfile};

/// The current session's own profile.
pub async fn profile(api: &ApiClient, token: Option<&str>) -> Result<UserProfile, ApiError> {
    api.get_json("/user/profile", token).await
}

/// Another user's public profile, by username. Intentionally callable
/// without a token.
pub async fn public_profile(
    api: &ApiClient,
    token: Option<&str>,
    identifier: &str,
) -> Result<UserProfile, ApiError> {
    let path = format!("/user/profile/{}", urlencoding::encode(identifier));
    api.get_json(&path, token).await
}

pub async fn update_profile(
    api: &ApiClient,
    token: Option<&str>,
    request: &UpdateProfileRequest,
) -> Result<UserProfile, ApiError> {
    api.put_json("/user/profile", request, token).await
}

pub async fn change_password(
    api: &ApiClient,
    token: Option<&str>,
    request: &UpdatePasswordRequest,
) -> Result<(), ApiError> {
    api.put_unit("/user/password", request, token).await
}
