//! Track catalog endpoints.

use super::{ApiClient, ApiError};
use crate::models::Track;

pub async fn all(api: &ApiClient, token: Option<&str>) -> Result<Vec<Track>, ApiError> {
    api.get_json("/tracks", token).await
}

pub async fn get(api: &ApiClient, token: Option<&str>, id: i64) -> Result<Track, ApiError> {
    api.get_json(&format!("/tracks/{id}"), token).await
}

pub async fn search(api: &ApiClient, token: Option<&str>, query: &str) -> Result<Vec<Track>, ApiError> {
    let path = format!("/tracks/search?query={}", urlencoding::encode(query));
    api.get_json(&path, token).await
}

pub async fn record_play(api: &ApiClient, token: Option<&str>, track_id: i64) -> Result<(), ApiError> {
    api.post_unit(&format!("/tracks/{track_id}/play"), token).await
}
