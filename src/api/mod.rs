//! HTTP client for the remote Streamletz API.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every outbound call flows through `ApiClient`: the outbound side attaches
//! `Authorization: Bearer <token>` whenever the caller's session has one,
//! the inbound side classifies failures before any caller sees them. The
//! one response that carries design weight is a 401 — it means either a
//! rejected login attempt (propagate untouched, there is no session to tear
//! down) or an expired session (surfaced as `ApiError::SessionExpired` for
//! the loader boundary to act on exactly once). No call is retried here;
//! retry or degradation is the caller's decision.

pub mod auth;
pub mod liked;
pub mod playlists;
pub mod tracks;
pub mod users;

use std::time::Duration;

use reqwest::header::AUTHORIZATION;
use reqwest::{Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;

const REQUEST_TIMEOUT_SECS: u64 = 30;
const CONNECT_TIMEOUT_SECS: u64 = 10;

/// Endpoints whose 401 means "bad credentials", not "session expired".
const AUTH_ENDPOINTS: &[&str] = &["/auth/login", "/auth/register"];

/// Classify a request path as an authentication endpoint. A 401 from these
/// must never trigger session teardown — a failed login attempt has no
/// session to clear.
#[must_use]
pub fn is_auth_endpoint(path: &str) -> bool {
    AUTH_ENDPOINTS.iter().any(|prefix| path.starts_with(prefix))
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("api client build failed: {0}")]
    ClientBuild(String),
    #[error("request to {path} failed: {source}")]
    Transport {
        path: String,
        #[source]
        source: reqwest::Error,
    },
    /// 401 from a non-auth endpoint while a session existed.
    #[error("session expired: 401 from {path}")]
    SessionExpired { path: String },
    /// 401 that must be propagated untouched: an auth endpoint rejected the
    /// credentials, or there was no session to begin with.
    #[error("authentication rejected by {path}: {body}")]
    Unauthorized { path: String, body: String },
    #[error("api returned {status} for {path}: {body}")]
    Status { path: String, status: u16, body: String },
    #[error("failed to decode response from {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: reqwest::Error,
    },
}

impl ApiError {
    #[must_use]
    pub fn is_session_expired(&self) -> bool {
        matches!(self, Self::SessionExpired { .. })
    }

    /// Upstream status to surface to the caller, where one exists.
    #[must_use]
    pub fn upstream_status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized { .. } | Self::SessionExpired { .. } => Some(401),
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

// =============================================================================
// CLIENT
// =============================================================================

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .build()
            .map_err(|e| ApiError::ClientBuild(e.to_string()))?;
        Ok(Self { http, base_url: base_url.trim_end_matches('/').to_owned() })
    }

    /// Outbound interceptor: build a request with the bearer credential
    /// attached when present. Calls without a token go out unauthenticated —
    /// some endpoints are intentionally public.
    fn request(&self, method: Method, path: &str, token: Option<&str>) -> reqwest::RequestBuilder {
        let mut builder = self.http.request(method, format!("{}{}", self.base_url, path));
        if let Some(token) = token {
            builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
        }
        builder
    }

    /// Inbound interceptor: dispatch and classify the response.
    ///
    /// `authenticated` records whether a token accompanied the call, which
    /// is what distinguishes "session expired" from "nothing to tear down"
    /// on a 401.
    async fn send(
        &self,
        builder: reqwest::RequestBuilder,
        path: &str,
        authenticated: bool,
    ) -> Result<reqwest::Response, ApiError> {
        let response = builder
            .send()
            .await
            .map_err(|source| ApiError::Transport { path: path.to_owned(), source })?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            if authenticated && !is_auth_endpoint(path) {
                return Err(ApiError::SessionExpired { path: path.to_owned() });
            }
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Unauthorized { path: path.to_owned(), body });
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status { path: path.to_owned(), status: status.as_u16(), body });
        }
        Ok(response)
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str, token: Option<&str>) -> Result<T, ApiError> {
        let response = self
            .send(self.request(Method::GET, path, token), path, token.is_some())
            .await?;
        response
            .json()
            .await
            .map_err(|source| ApiError::Decode { path: path.to_owned(), source })
    }

    pub async fn post_json<B, T>(&self, path: &str, body: &B, token: Option<&str>) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let builder = self.request(Method::POST, path, token).json(body);
        let response = self.send(builder, path, token.is_some()).await?;
        response
            .json()
            .await
            .map_err(|source| ApiError::Decode { path: path.to_owned(), source })
    }

    /// POST with an empty body, decoding the JSON response.
    pub async fn post_returning<T: DeserializeOwned>(&self, path: &str, token: Option<&str>) -> Result<T, ApiError> {
        let response = self
            .send(self.request(Method::POST, path, token), path, token.is_some())
            .await?;
        response
            .json()
            .await
            .map_err(|source| ApiError::Decode { path: path.to_owned(), source })
    }

    pub async fn post_unit(&self, path: &str, token: Option<&str>) -> Result<(), ApiError> {
        self.send(self.request(Method::POST, path, token), path, token.is_some())
            .await
            .map(|_| ())
    }

    pub async fn put_json<B, T>(&self, path: &str, body: &B, token: Option<&str>) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let builder = self.request(Method::PUT, path, token).json(body);
        let response = self.send(builder, path, token.is_some()).await?;
        response
            .json()
            .await
            .map_err(|source| ApiError::Decode { path: path.to_owned(), source })
    }

    pub async fn put_unit<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
        token: Option<&str>,
    ) -> Result<(), ApiError> {
        let builder = self.request(Method::PUT, path, token).json(body);
        self.send(builder, path, token.is_some()).await.map(|_| ())
    }

    pub async fn delete(&self, path: &str, token: Option<&str>) -> Result<(), ApiError> {
        self.send(self.request(Method::DELETE, path, token), path, token.is_some())
            .await
            .map(|_| ())
    }

    pub async fn delete_json<T: DeserializeOwned>(&self, path: &str, token: Option<&str>) -> Result<T, ApiError> {
        let response = self
            .send(self.request(Method::DELETE, path, token), path, token.is_some())
            .await?;
        response
            .json()
            .await
            .map_err(|source| ApiError::Decode { path: path.to_owned(), source })
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
