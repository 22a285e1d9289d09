//! Page-data loaders.
//!
//! Rendering is out of scope here: each loader returns the fully aggregated
//! page model as JSON. Constituent fetches are isolated — a failed section
//! degrades to its empty default and the page still loads. The one
//! exception is upstream session expiry, which short-circuits the whole
//! page into a single teardown redirect.

use axum::Json;
use axum::extract::{Extension, Path, Query, State};
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use super::{expired_response, section};
use crate::api;
use crate::models::{Playlist, Track, UserProfile};
use crate::session::{SessionStore, UserIdentity};
use crate::state::AppState;

// =============================================================================
// PAGE MODELS
// =============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardPage {
    pub user: Option<UserIdentity>,
    pub tracks: Vec<Track>,
    pub playlists: Vec<Playlist>,
    pub liked_track_ids: Vec<i64>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistsPage {
    pub playlists: Vec<Playlist>,
    pub public_playlists: Vec<Playlist>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistPage {
    pub playlist: Option<Playlist>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackPage {
    pub track: Option<Track>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LikedPage {
    pub tracks: Vec<Track>,
    /// Liked-track total as reported by the API; degrades to 0 when the
    /// count fetch fails independently of the track list.
    pub count: i64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchPage {
    pub query: String,
    pub tracks: Vec<Track>,
    pub playlists: Vec<Playlist>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfilePage {
    pub user_profile: Option<UserProfile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
    pub liked_tracks: Vec<Track>,
    pub playlists: Vec<Playlist>,
    pub is_own_profile: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsPage {
    pub user_profile: Option<UserProfile>,
}

// =============================================================================
// PUBLIC PAGES
// =============================================================================

/// `GET /login` — empty page model; the guard has already bounced
/// authenticated sessions to the dashboard.
pub async fn login() -> Json<serde_json::Value> {
    Json(serde_json::json!({}))
}

/// `GET /register` — empty page model.
pub async fn register() -> Json<serde_json::Value> {
    Json(serde_json::json!({}))
}

// =============================================================================
// PROTECTED PAGES
// =============================================================================

/// `GET /dashboard` — tracks + playlists + liked-track ids, each section
/// fetched concurrently and degraded independently.
pub async fn dashboard(State(state): State<AppState>, Extension(store): Extension<SessionStore>) -> Response {
    let token = store.token();
    let (tracks, playlists, liked) = tokio::join!(
        api::tracks::all(&state.api, token),
        api::playlists::mine(&state.api, token),
        api::liked::all(&state.api, token),
    );

    let mut expired = false;
    let tracks = section(tracks, "tracks", &mut expired).unwrap_or_default();
    let playlists = section(playlists, "playlists", &mut expired).unwrap_or_default();
    let liked_track_ids: Vec<i64> = section(liked, "liked-tracks", &mut expired)
        .map(|tracks: Vec<Track>| tracks.iter().map(|track| track.id).collect())
        .unwrap_or_default();
    if expired {
        return expired_response(store);
    }

    let user = store.user().cloned();
    Json(DashboardPage { user, tracks, playlists, liked_track_ids }).into_response()
}

/// `GET /playlists` — own playlists plus the public browse section.
pub async fn playlists(State(state): State<AppState>, Extension(store): Extension<SessionStore>) -> Response {
    let token = store.token();
    let (mine, public) = tokio::join!(
        api::playlists::mine(&state.api, token),
        api::playlists::public_list(&state.api, token),
    );

    let mut expired = false;
    let playlists = section(mine, "playlists", &mut expired).unwrap_or_default();
    let public_playlists = section(public, "public-playlists", &mut expired).unwrap_or_default();
    if expired {
        return expired_response(store);
    }
    Json(PlaylistsPage { playlists, public_playlists }).into_response()
}

/// `GET /playlists/{id}` — a missing or failed playlist renders as `null`.
pub async fn playlist(
    State(state): State<AppState>,
    Extension(store): Extension<SessionStore>,
    Path(id): Path<i64>,
) -> Response {
    let result = api::playlists::get(&state.api, store.token(), id).await;

    let mut expired = false;
    let playlist = section(result, "playlist", &mut expired);
    if expired {
        return expired_response(store);
    }
    Json(PlaylistPage { playlist }).into_response()
}

/// `GET /tracks/{id}` — a missing or failed track renders as `null`.
pub async fn track(
    State(state): State<AppState>,
    Extension(store): Extension<SessionStore>,
    Path(id): Path<i64>,
) -> Response {
    let result = api::tracks::get(&state.api, store.token(), id).await;

    let mut expired = false;
    let track = section(result, "track", &mut expired);
    if expired {
        return expired_response(store);
    }
    Json(TrackPage { track }).into_response()
}

/// `GET /liked`
pub async fn liked(State(state): State<AppState>, Extension(store): Extension<SessionStore>) -> Response {
    let token = store.token();
    let (tracks, count) = tokio::join!(
        api::liked::all(&state.api, token),
        api::liked::count(&state.api, token),
    );

    let mut expired = false;
    let tracks = section(tracks, "liked-tracks", &mut expired).unwrap_or_default();
    let count = section(count, "liked-count", &mut expired).unwrap_or_default();
    if expired {
        return expired_response(store);
    }
    Json(LikedPage { tracks, count }).into_response()
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub query: String,
}

/// `GET /search?query=` — combined track and playlist search.
pub async fn search(
    State(state): State<AppState>,
    Extension(store): Extension<SessionStore>,
    Query(params): Query<SearchParams>,
) -> Response {
    let token = store.token();
    let (tracks, playlists) = tokio::join!(
        api::tracks::search(&state.api, token, &params.query),
        api::playlists::search(&state.api, token, &params.query),
    );

    let mut expired = false;
    let tracks = section(tracks, "track-search", &mut expired).unwrap_or_default();
    let playlists = section(playlists, "playlist-search", &mut expired).unwrap_or_default();
    if expired {
        return expired_response(store);
    }
    Json(SearchPage { query: params.query, tracks, playlists }).into_response()
}

/// `GET /profile` — own profile with liked tracks and playlists.
pub async fn profile(State(state): State<AppState>, Extension(store): Extension<SessionStore>) -> Response {
    let token = store.token();
    let (profile, liked, playlists) = tokio::join!(
        api::users::profile(&state.api, token),
        api::liked::all(&state.api, token),
        api::playlists::mine(&state.api, token),
    );

    let mut expired = false;
    let user_profile = section(profile, "profile", &mut expired);
    let liked_tracks = section(liked, "liked-tracks", &mut expired).unwrap_or_default();
    let playlists = section(playlists, "playlists", &mut expired).unwrap_or_default();
    if expired {
        return expired_response(store);
    }
    Json(ProfilePage {
        user_profile,
        identifier: None,
        liked_tracks,
        playlists,
        is_own_profile: true,
    })
    .into_response()
}

/// `GET /profile/{identifier}` — own full view when the identifier matches
/// the session's user, otherwise the public profile only.
pub async fn public_profile(
    State(state): State<AppState>,
    Extension(store): Extension<SessionStore>,
    Path(identifier): Path<String>,
) -> Response {
    let token = store.token();

    let mut expired = false;
    let own = section(api::users::profile(&state.api, token).await, "profile", &mut expired);
    if expired {
        return expired_response(store);
    }

    if own.as_ref().is_some_and(|profile| profile.username == identifier) {
        let (liked, playlists) = tokio::join!(
            api::liked::all(&state.api, token),
            api::playlists::mine(&state.api, token),
        );
        let liked_tracks = section(liked, "liked-tracks", &mut expired).unwrap_or_default();
        let playlists = section(playlists, "playlists", &mut expired).unwrap_or_default();
        if expired {
            return expired_response(store);
        }
        return Json(ProfilePage {
            user_profile: own,
            identifier: Some(identifier),
            liked_tracks,
            playlists,
            is_own_profile: true,
        })
        .into_response();
    }

    let public = section(
        api::users::public_profile(&state.api, token, &identifier).await,
        "public-profile",
        &mut expired,
    );
    if expired {
        return expired_response(store);
    }
    Json(ProfilePage {
        user_profile: public,
        identifier: Some(identifier),
        liked_tracks: Vec::new(),
        playlists: Vec::new(),
        is_own_profile: false,
    })
    .into_response()
}

/// `GET /settings`
pub async fn settings(State(state): State<AppState>, Extension(store): Extension<SessionStore>) -> Response {
    let result = api::users::profile(&state.api, store.token()).await;

    let mut expired = false;
    let user_profile = section(result, "profile", &mut expired);
    if expired {
        return expired_response(store);
    }
    Json(SettingsPage { user_profile }).into_response()
}
