//! CRUD proxy actions.
//!
//! Thin pass-throughs to the API carrying the request's credential. Failures
//! follow the loader-boundary taxonomy: session expiry tears down, anything
//! else is surfaced with the upstream status for the caller to display.

use axum::Json;
use axum::extract::{Extension, Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use super::api_error_response;
use crate::api;
use crate::api::ApiError;
use crate::models::{
    CreatePlaylistRequest, ReorderTracksRequest, UpdatePasswordRequest, UpdatePlaylistRequest,
    UpdateProfileRequest,
};
use crate::session::{SessionStore, UserIdentity};
use crate::state::AppState;

// =============================================================================
// PLAYLISTS
// =============================================================================

/// `POST /playlists`
pub async fn create_playlist(
    State(state): State<AppState>,
    Extension(store): Extension<SessionStore>,
    Json(request): Json<CreatePlaylistRequest>,
) -> Response {
    let result = api::playlists::create(&state.api, store.token(), &request).await;
    json_or_error(store, result)
}

/// `PUT /playlists/{id}`
pub async fn update_playlist(
    State(state): State<AppState>,
    Extension(store): Extension<SessionStore>,
    Path(id): Path<i64>,
    Json(request): Json<UpdatePlaylistRequest>,
) -> Response {
    let result = api::playlists::update(&state.api, store.token(), id, &request).await;
    json_or_error(store, result)
}

/// `DELETE /playlists/{id}`
pub async fn delete_playlist(
    State(state): State<AppState>,
    Extension(store): Extension<SessionStore>,
    Path(id): Path<i64>,
) -> Response {
    let result = api::playlists::delete(&state.api, store.token(), id).await;
    no_content_or_error(store, result)
}

/// `POST /playlists/{id}/tracks/{track_id}`
pub async fn add_track(
    State(state): State<AppState>,
    Extension(store): Extension<SessionStore>,
    Path((id, track_id)): Path<(i64, i64)>,
) -> Response {
    let result = api::playlists::add_track(&state.api, store.token(), id, track_id).await;
    json_or_error(store, result)
}

/// `DELETE /playlists/{id}/tracks/{track_id}`
pub async fn remove_track(
    State(state): State<AppState>,
    Extension(store): Extension<SessionStore>,
    Path((id, track_id)): Path<(i64, i64)>,
) -> Response {
    let result = api::playlists::remove_track(&state.api, store.token(), id, track_id).await;
    json_or_error(store, result)
}

/// `PUT /playlists/{id}/reorder`
pub async fn reorder_playlist(
    State(state): State<AppState>,
    Extension(store): Extension<SessionStore>,
    Path(id): Path<i64>,
    Json(request): Json<ReorderTracksRequest>,
) -> Response {
    let result = api::playlists::reorder(&state.api, store.token(), id, &request).await;
    json_or_error(store, result)
}

// =============================================================================
// LIKES / PLAYS
// =============================================================================

/// `POST /liked/tracks/{track_id}`
pub async fn like_track(
    State(state): State<AppState>,
    Extension(store): Extension<SessionStore>,
    Path(track_id): Path<i64>,
) -> Response {
    let result = api::liked::like(&state.api, store.token(), track_id).await;
    no_content_or_error(store, result)
}

/// `POST /liked/tracks/{track_id}/toggle` — reads the current liked status
/// and flips it, reporting the resulting state.
pub async fn toggle_like(
    State(state): State<AppState>,
    Extension(store): Extension<SessionStore>,
    Path(track_id): Path<i64>,
) -> Response {
    let liked = match api::liked::status(&state.api, store.token(), track_id).await {
        Ok(liked) => liked,
        Err(error) => return api_error_response(store, &error),
    };

    let result = if liked {
        api::liked::unlike(&state.api, store.token(), track_id).await
    } else {
        api::liked::like(&state.api, store.token(), track_id).await
    };
    match result {
        Ok(()) => Json(serde_json::json!({ "isLiked": !liked })).into_response(),
        Err(error) => api_error_response(store, &error),
    }
}

/// `DELETE /liked/tracks/{track_id}`
pub async fn unlike_track(
    State(state): State<AppState>,
    Extension(store): Extension<SessionStore>,
    Path(track_id): Path<i64>,
) -> Response {
    let result = api::liked::unlike(&state.api, store.token(), track_id).await;
    no_content_or_error(store, result)
}

/// `POST /tracks/{track_id}/play`
pub async fn record_play(
    State(state): State<AppState>,
    Extension(store): Extension<SessionStore>,
    Path(track_id): Path<i64>,
) -> Response {
    let result = api::tracks::record_play(&state.api, store.token(), track_id).await;
    no_content_or_error(store, result)
}

// =============================================================================
// USER SETTINGS
// =============================================================================

/// `PUT /settings/profile` — on success the cached identity cookie is
/// replaced wholesale from the fresh profile, under the unchanged token.
pub async fn update_profile(
    State(state): State<AppState>,
    Extension(mut store): Extension<SessionStore>,
    Json(request): Json<UpdateProfileRequest>,
) -> Response {
    let result = api::users::update_profile(&state.api, store.token(), &request).await;
    match result {
        Ok(profile) => {
            if let Some(token) = store.token().map(ToOwned::to_owned) {
                let user = UserIdentity {
                    username: profile.username.clone(),
                    email: profile.email.clone(),
                    profile_image: profile.profile_image.clone(),
                };
                store.set_auth(token, user);
            }
            (store.into_jar(), Json(profile)).into_response()
        }
        Err(error) => api_error_response(store, &error),
    }
}

/// `PUT /settings/password`
pub async fn change_password(
    State(state): State<AppState>,
    Extension(store): Extension<SessionStore>,
    Json(request): Json<UpdatePasswordRequest>,
) -> Response {
    let result = api::users::change_password(&state.api, store.token(), &request).await;
    no_content_or_error(store, result)
}

fn json_or_error<T: Serialize>(store: SessionStore, result: Result<T, ApiError>) -> Response {
    match result {
        Ok(value) => Json(value).into_response(),
        Err(error) => api_error_response(store, &error),
    }
}

fn no_content_or_error(store: SessionStore, result: Result<(), ApiError>) -> Response {
    match result {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => api_error_response(store, &error),
    }
}
