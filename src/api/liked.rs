//! Liked-track endpoints.

use super::{ApiClient, ApiError};
use crate::models::Track;

#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct StatusResponse {
    is_liked: bool,
}

#[derive(Debug, serde::Deserialize)]
struct CountResponse {
    count: i64,
}

pub async fn all(api: &ApiClient, token: Option<&str>) -> Result<Vec<Track>, ApiError> {
    api.get_json("/liked/tracks", token).await
}

/// Whether the given track is liked by the current session's user.
pub async fn status(api: &ApiClient, token: Option<&str>, track_id: i64) -> Result<bool, ApiError> {
    let response: StatusResponse = api
        .get_json(&format!("/liked/tracks/{track_id}/status"), token)
        .await?;
    Ok(response.is_liked)
}

pub async fn count(api: &ApiClient, token: Option<&str>) -> Result<i64, ApiError> {
    let response: CountResponse = api.get_json("/liked/tracks/count", token).await?;
    Ok(response.count)
}

pub async fn like(api: &ApiClient, token: Option<&str>, track_id: i64) -> Result<(), ApiError> {
    api.post_unit(&format!("/liked/tracks/{track_id}"), token).await
}

pub async fn unlike(api: &ApiClient, token: Option<&str>, track_id: i64) -> Result<(), ApiError> {
    api.delete(&format!("/liked/tracks/{track_id}"), token).await
}
