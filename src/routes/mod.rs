//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Page loaders and CRUD actions share one Axum router. Two layers wrap
//! every route, outermost first: the session bootstrap (prime the
//! request-scoped credential store from cookies) and the route guard
//! (allow/redirect before any handler runs). The helpers below are the
//! loader-boundary reaction to API failures: per-section degradation, and
//! session teardown performed exactly once per request.

pub mod actions;
pub mod auth;
pub mod pages;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use axum::routing::{get, post, put};
use axum::{Json, Router, middleware};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::api::ApiError;
use crate::guard;
use crate::session::{self, SessionStore};
use crate::state::AppState;

pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/login", get(pages::login).post(auth::login))
        .route("/register", get(pages::register).post(auth::register))
        .route("/logout", post(auth::logout))
        .route("/dashboard", get(pages::dashboard))
        .route("/search", get(pages::search))
        .route("/playlists", get(pages::playlists).post(actions::create_playlist))
        .route(
            "/playlists/{id}",
            get(pages::playlist)
                .put(actions::update_playlist)
                .delete(actions::delete_playlist),
        )
        .route(
            "/playlists/{id}/tracks/{track_id}",
            post(actions::add_track).delete(actions::remove_track),
        )
        .route("/playlists/{id}/reorder", put(actions::reorder_playlist))
        .route("/liked", get(pages::liked))
        .route(
            "/liked/tracks/{track_id}",
            post(actions::like_track).delete(actions::unlike_track),
        )
        .route("/liked/tracks/{track_id}/toggle", post(actions::toggle_like))
        .route("/tracks/{track_id}", get(pages::track))
        .route("/tracks/{track_id}/play", post(actions::record_play))
        .route("/profile", get(pages::profile))
        .route("/profile/{identifier}", get(pages::public_profile))
        .route("/settings", get(pages::settings))
        .route("/settings/profile", put(actions::update_profile))
        .route("/settings/password", put(actions::change_password))
        .route("/healthz", get(healthz))
        .layer(middleware::from_fn(guard::route_guard))
        .layer(middleware::from_fn_with_state(state.clone(), session::bootstrap))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

// =============================================================================
// LOADER-BOUNDARY HELPERS
// =============================================================================

/// Session teardown: exactly one `logout` and one 303 to the login surface
/// per request, no matter how many concurrent section fetches reported
/// expiry in the same tick.
pub(crate) fn expired_response(mut store: SessionStore) -> Response {
    tracing::warn!("session expired upstream, clearing session");
    store.logout();
    (store.into_jar(), Redirect::to("/login")).into_response()
}

/// Map an API failure onto an action response. Session expiry becomes
/// teardown; everything else is surfaced with the upstream status, falling
/// back to 502 for transport-level failures.
pub(crate) fn api_error_response(store: SessionStore, error: &ApiError) -> Response {
    if error.is_session_expired() {
        return expired_response(store);
    }
    let status = error
        .upstream_status()
        .and_then(|code| StatusCode::from_u16(code).ok())
        .unwrap_or(StatusCode::BAD_GATEWAY);
    tracing::warn!(%error, status = status.as_u16(), "api call failed");
    (status, Json(serde_json::json!({ "error": error.to_string() }))).into_response()
}

/// Degrade one page section: `Err` becomes `None` and is logged; expiry is
/// only recorded here so the loader can act on it once, after every section
/// has resolved.
pub(crate) fn section<T>(result: Result<T, ApiError>, name: &str, expired: &mut bool) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(error) => {
            if error.is_session_expired() {
                *expired = true;
            }
            tracing::warn!(section = name, %error, "page section degraded to empty");
            None
        }
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
