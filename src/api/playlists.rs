//! Playlist CRUD endpoints.

use super::{ApiClient, ApiError};
use crate::models::{CreatePlaylistRequest, Playlist, ReorderTracksRequest, UpdatePlaylistRequest};

/// Playlists owned by the current session's user.
pub async fn mine(api: &ApiClient, token: Option<&str>) -> Result<Vec<Playlist>, ApiError> {
    api.get_json("/playlists", token).await
}

/// Publicly listed playlists. Intentionally callable without a token.
pub async fn public_list(api: &ApiClient, token: Option<&str>) -> Result<Vec<Playlist>, ApiError> {
    api.get_json("/playlists/public", token).await
}

pub async fn get(api: &ApiClient, token: Option<&str>, id: i64) -> Result<Playlist, ApiError> {
    api.get_json(&format!("/playlists/{id}"), token).await
}

pub async fn search(api: &ApiClient, token: Option<&str>, query: &str) -> Result<Vec<Playlist>, ApiError> {
    let path = format!("/playlists/search?query={}", urlencoding::encode(query));
    api.get_json(&path, token).await
}

pub async fn create(
    api: &ApiClient,
    token: Option<&str>,
    request: &CreatePlaylistRequest,
) -> Result<Playlist, ApiError> {
    api.post_json("/playlists", request, token).await
}

pub async fn update(
    api: &ApiClient,
    token: Option<&str>,
    id: i64,
    request: &UpdatePlaylistRequest,
) -> Result<Playlist, ApiError> {
    api.put_json(&format!("/playlists/{id}"), request, token).await
}

pub async fn delete(api: &ApiClient, token: Option<&str>, id: i64) -> Result<(), ApiError> {
    api.delete(&format!("/playlists/{id}"), token).await
}

pub async fn add_track(
    api: &ApiClient,
    token: Option<&str>,
    id: i64,
    track_id: i64,
) -> Result<Playlist, ApiError> {
    api.post_returning(&format!("/playlists/{id}/tracks/{track_id}"), token).await
}

pub async fn remove_track(
    api: &ApiClient,
    token: Option<&str>,
    id: i64,
    track_id: i64,
) -> Result<Playlist, ApiError> {
    api.delete_json(&format!("/playlists/{id}/tracks/{track_id}"), token).await
}

pub async fn reorder(
    api: &ApiClient,
    token: Option<&str>,
    id: i64,
    request: &ReorderTracksRequest,
) -> Result<Playlist, ApiError> {
    api.put_json(&format!("/playlists/{id}/reorder"), request, token).await
}
