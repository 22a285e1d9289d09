//! Auth actions — login, register, logout.
//!
//! Login and register proxy the credentials to the API; on success the
//! returned token + identity replace the session wholesale and the browser
//! is sent to the dashboard. A rejection is surfaced with the API's own
//! status so the form can render it — it never touches an existing session.

use axum::Json;
use axum::extract::{Extension, State};
use axum::response::{IntoResponse, Redirect, Response};

use super::api_error_response;
use crate::api;
use crate::api::auth::{AuthResponse, LoginRequest, RegisterRequest};
use crate::session::SessionStore;
use crate::state::AppState;

/// `POST /login`
pub async fn login(
    State(state): State<AppState>,
    Extension(store): Extension<SessionStore>,
    Json(request): Json<LoginRequest>,
) -> Response {
    match api::auth::login(&state.api, &request).await {
        Ok(response) => grant_session(store, response),
        Err(error) => api_error_response(store, &error),
    }
}

/// `POST /register` — the API returns the same token envelope as login, so
/// a fresh account is signed in immediately.
pub async fn register(
    State(state): State<AppState>,
    Extension(store): Extension<SessionStore>,
    Json(request): Json<RegisterRequest>,
) -> Response {
    match api::auth::register(&state.api, &request).await {
        Ok(response) => grant_session(store, response),
        Err(error) => api_error_response(store, &error),
    }
}

/// `POST /logout` — clear both durable copies and return to the login
/// surface. No API call: the token is opaque and simply forgotten.
pub async fn logout(Extension(mut store): Extension<SessionStore>) -> Response {
    store.logout();
    (store.into_jar(), Redirect::to("/login")).into_response()
}

fn grant_session(mut store: SessionStore, response: AuthResponse) -> Response {
    let (token, user) = response.into_parts();
    tracing::info!(username = %user.username, "session established");
    store.set_auth(token, user);
    (store.into_jar(), Redirect::to("/dashboard")).into_response()
}
