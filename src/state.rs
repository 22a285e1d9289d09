//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! deliberately holds no credential: the bearer token is request-scoped
//! state carried by `session::SessionStore` in request extensions, so
//! concurrently served requests can never observe each other's session.

use crate::api::ApiClient;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum — `ApiClient` is cheap to clone (pooled inner client).
#[derive(Clone)]
pub struct AppState {
    pub api: ApiClient,
    /// Whether session cookies carry the `Secure` attribute.
    pub cookie_secure: bool,
}

impl AppState {
    #[must_use]
    pub fn new(api: ApiClient, cookie_secure: bool) -> Self {
        Self { api, cookie_secure }
    }
}
