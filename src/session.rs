//! Session credential store and per-request bootstrap.
//!
//! DESIGN
//! ======
//! The browser-held cookies are the single durable copy of the session; the
//! server never stores a credential beyond the request that carried it. Each
//! incoming request gets a fresh `SessionStore` built from its `Cookie`
//! header (the bootstrap middleware below), carried in request extensions
//! and dropped when the response goes out. Durable mutations (`set_auth`,
//! `logout`) accumulate in a cookie jar whose delta becomes the response's
//! `Set-Cookie` headers.
//!
//! INVARIANT
//! =========
//! The token is the authority: a cached `user` identity never outlives it.
//! A `user` cookie arriving without a `token` cookie is ignored, and
//! `logout` always clears both.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::{Deserialize, Serialize};
use time::Duration;

use crate::state::AppState;

pub const TOKEN_COOKIE: &str = "token";
pub const USER_COOKIE: &str = "user";
const COOKIE_PATH: &str = "/";
/// Durable copy lifetime: 24h, matching the upstream token's validity window.
pub const SESSION_TTL: Duration = Duration::hours(24);

// =============================================================================
// DATA MODEL
// =============================================================================

/// Denormalized identity cached alongside the token to avoid a profile
/// round trip. Replaced wholesale, never patched field-by-field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserIdentity {
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub profile_image: Option<String>,
}

/// The session as seen by one request: an opaque bearer token plus the
/// cached identity. `user` is `Some` only if `token` is.
#[derive(Debug, Clone, Default)]
pub struct Session {
    token: Option<String>,
    user: Option<UserIdentity>,
}

// =============================================================================
// CREDENTIAL STORE
// =============================================================================

/// Request-scoped credential store backed by the request's cookie jar.
///
/// Reads reflect the most recent `set_auth`/`logout` within the request;
/// the jar's delta carries the durable writes out on the response.
#[derive(Debug, Clone)]
pub struct SessionStore {
    session: Session,
    jar: CookieJar,
    secure: bool,
}

impl SessionStore {
    /// Session Bootstrap: decode the incoming cookies into a fresh store.
    ///
    /// Malformed durable state is treated as absent, never as an error: a
    /// `user` cookie that fails to decode is logged and dropped, and an
    /// empty `token` cookie counts as no session.
    #[must_use]
    pub fn from_request_cookies(jar: CookieJar, secure: bool) -> Self {
        let token = jar
            .get(TOKEN_COOKIE)
            .map(|cookie| cookie.value().to_owned())
            .filter(|token| !token.is_empty());
        let user = token
            .as_ref()
            .and_then(|_| jar.get(USER_COOKIE))
            .and_then(|cookie| decode_user_cookie(cookie.value()));

        Self { session: Session { token, user }, jar, secure }
    }

    /// Replace the session wholesale and persist both cookies for 24h.
    pub fn set_auth(&mut self, token: String, user: UserIdentity) {
        let jar = std::mem::replace(&mut self.jar, CookieJar::new());
        let jar = jar.add(durable_cookie(TOKEN_COOKIE, token.clone(), self.secure));
        self.jar = match serde_json::to_string(&user) {
            Ok(json) => jar.add(durable_cookie(
                USER_COOKIE,
                urlencoding::encode(&json).into_owned(),
                self.secure,
            )),
            Err(error) => {
                tracing::error!(%error, "failed to serialize user identity cookie");
                jar
            }
        };
        self.session = Session { token: Some(token), user: Some(user) };
    }

    /// Clear the session and both durable copies. The clearing writes use
    /// the identical cookie name and path as `set_auth` with `max-age=0`,
    /// which is what makes the browser actually delete them. Idempotent.
    pub fn logout(&mut self) {
        self.session = Session::default();
        let jar = std::mem::replace(&mut self.jar, CookieJar::new());
        self.jar = jar
            .add(removal_cookie(TOKEN_COOKIE, self.secure))
            .add(removal_cookie(USER_COOKIE, self.secure));
    }

    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.session.token.as_deref()
    }

    #[must_use]
    pub fn user(&self) -> Option<&UserIdentity> {
        self.session.user.as_ref()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.session.token.is_some()
    }

    /// Consume the store, yielding the jar whose delta is the response's
    /// `Set-Cookie` headers.
    #[must_use]
    pub fn into_jar(self) -> CookieJar {
        self.jar
    }
}

fn durable_cookie(name: &'static str, value: String, secure: bool) -> Cookie<'static> {
    Cookie::build((name, value))
        .path(COOKIE_PATH)
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(SESSION_TTL)
        .build()
}

fn removal_cookie(name: &'static str, secure: bool) -> Cookie<'static> {
    Cookie::build((name, ""))
        .path(COOKIE_PATH)
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(Duration::ZERO)
        .build()
}

fn decode_user_cookie(raw: &str) -> Option<UserIdentity> {
    let decoded = match urlencoding::decode(raw) {
        Ok(decoded) => decoded,
        Err(error) => {
            tracing::warn!(%error, "user cookie is not valid percent-encoding, treating as absent");
            return None;
        }
    };
    match serde_json::from_str(&decoded) {
        Ok(user) => Some(user),
        Err(error) => {
            tracing::warn!(%error, "user cookie failed to parse, treating as absent");
            None
        }
    }
}

// =============================================================================
// BOOTSTRAP MIDDLEWARE
// =============================================================================

/// Prime a request-scoped `SessionStore` from the incoming cookies before
/// routing. Runs outermost so the route guard and every loader see the same
/// primed session; never fails the request.
pub async fn bootstrap(State(state): State<AppState>, mut request: Request, next: Next) -> Response {
    let jar = CookieJar::from_headers(request.headers());
    let store = SessionStore::from_request_cookies(jar, state.cookie_secure);
    request.extensions_mut().insert(store);
    next.run(request).await
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
