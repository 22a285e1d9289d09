//! Route guard: page-level access decisions, taken once per request.
//!
//! DESIGN
//! ======
//! The guard is the sole authority on page access. It runs after the session
//! bootstrap and before any handler, so downstream loaders never re-check
//! authentication — they only handle per-call API failures. Redirects use
//! 303 so a guarded POST is safely converted to GET on follow.

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};

use crate::session::SessionStore;

/// Path prefixes reachable without a session.
pub const PUBLIC_PREFIXES: &[&str] = &["/login", "/register", "/healthz"];

/// Visibility class of a page path, computed statelessly per request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteVisibility {
    Public,
    Protected,
}

#[must_use]
pub fn classify(path: &str) -> RouteVisibility {
    if PUBLIC_PREFIXES.iter().any(|prefix| path.starts_with(prefix)) {
        RouteVisibility::Public
    } else {
        RouteVisibility::Protected
    }
}

/// Outcome of the guard for one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardAction {
    Allow,
    Redirect(&'static str),
}

/// The access decision table. The root path always redirects to the
/// session's home surface; otherwise authenticated sessions are kept off
/// public pages and unauthenticated ones off protected pages.
#[must_use]
pub fn decide(authenticated: bool, path: &str) -> GuardAction {
    if path == "/" {
        return GuardAction::Redirect(if authenticated { "/dashboard" } else { "/login" });
    }
    match (authenticated, classify(path)) {
        (true, RouteVisibility::Public) => GuardAction::Redirect("/dashboard"),
        (false, RouteVisibility::Protected) => GuardAction::Redirect("/login"),
        _ => GuardAction::Allow,
    }
}

/// Axum layer applying [`decide`] to every request.
pub async fn route_guard(request: Request, next: Next) -> Response {
    let authenticated = request
        .extensions()
        .get::<SessionStore>()
        .is_some_and(SessionStore::is_authenticated);

    match decide(authenticated, request.uri().path()) {
        GuardAction::Allow => next.run(request).await,
        GuardAction::Redirect(target) => Redirect::to(target).into_response(),
    }
}

#[cfg(test)]
#[path = "guard_test.rs"]
mod tests;
