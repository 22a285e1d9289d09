use super::*;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// =============================================================================
// auth-endpoint classification
// =============================================================================

#[test]
fn login_and_register_are_auth_endpoints() {
    assert!(is_auth_endpoint("/auth/login"));
    assert!(is_auth_endpoint("/auth/register"));
}

#[test]
fn other_paths_are_not_auth_endpoints() {
    assert!(!is_auth_endpoint("/tracks"));
    assert!(!is_auth_endpoint("/user/profile"));
    assert!(!is_auth_endpoint("/authors"));
    assert!(!is_auth_endpoint("/liked/tracks/3"));
}

#[test]
fn upstream_status_surfaces_http_statuses_only() {
    let err = ApiError::Status { path: "/tracks".into(), status: 503, body: String::new() };
    assert_eq!(err.upstream_status(), Some(503));
    let err = ApiError::Unauthorized { path: "/auth/login".into(), body: String::new() };
    assert_eq!(err.upstream_status(), Some(401));
    let err = ApiError::ClientBuild("boom".into());
    assert_eq!(err.upstream_status(), None);
}

// =============================================================================
// outbound interceptor — bearer attachment
// =============================================================================

#[tokio::test]
async fn attaches_bearer_header_when_token_present() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/tracks"))
        .and(header("authorization", "Bearer tok-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let api = ApiClient::new(&server.uri()).expect("client build");
    let result = tracks::all(&api, Some("tok-1")).await.expect("request should succeed");
    assert!(result.is_empty());
}

#[tokio::test]
async fn sends_unauthenticated_without_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/tracks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&server)
        .await;

    let api = ApiClient::new(&server.uri()).expect("client build");
    tracks::all(&api, None).await.expect("request should succeed");

    let requests = server.received_requests().await.expect("recording enabled");
    assert_eq!(requests.len(), 1);
    assert!(requests[0].headers.get("authorization").is_none());
}

// =============================================================================
// inbound interceptor — 401 classification
// =============================================================================

#[tokio::test]
async fn auth_endpoint_401_propagates_untouched() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(401).set_body_string("bad credentials"))
        .mount(&server)
        .await;

    let api = ApiClient::new(&server.uri()).expect("client build");
    let request = auth::LoginRequest { username: "ann".into(), password: "nope".into() };
    let err = auth::login(&api, &request).await.expect_err("401 should be an error");
    assert!(matches!(&err, ApiError::Unauthorized { body, .. } if body == "bad credentials"));
    assert!(!err.is_session_expired());
}

#[tokio::test]
async fn auth_endpoint_401_is_never_expiry_even_with_a_session() {
    // A stale login form submitted while an unrelated session exists: the
    // token goes out, the 401 still must not be classified as expiry.
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let api = ApiClient::new(&server.uri()).expect("client build");
    let err = api
        .get_json::<serde_json::Value>("/auth/login", Some("tok-1"))
        .await
        .expect_err("401 should be an error");
    assert!(!err.is_session_expired());
    assert!(matches!(err, ApiError::Unauthorized { .. }));
}

#[tokio::test]
async fn authenticated_401_on_plain_endpoint_is_session_expiry() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/tracks"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let api = ApiClient::new(&server.uri()).expect("client build");
    let err = tracks::all(&api, Some("tok-1")).await.expect_err("401 should be an error");
    assert!(err.is_session_expired());
}

#[tokio::test]
async fn unauthenticated_401_propagates_with_nothing_to_tear_down() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/tracks"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let api = ApiClient::new(&server.uri()).expect("client build");
    let err = tracks::all(&api, None).await.expect_err("401 should be an error");
    assert!(!err.is_session_expired());
    assert!(matches!(err, ApiError::Unauthorized { .. }));
}

// =============================================================================
// other failures pass through unchanged
// =============================================================================

#[tokio::test]
async fn non_401_error_statuses_are_surfaced_as_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/playlists"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let api = ApiClient::new(&server.uri()).expect("client build");
    let err = playlists::mine(&api, Some("tok-1")).await.expect_err("500 should be an error");
    assert!(matches!(&err, ApiError::Status { status: 500, body, .. } if body == "boom"));
}

#[tokio::test]
async fn undecodable_success_body_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/tracks"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let api = ApiClient::new(&server.uri()).expect("client build");
    let err = tracks::all(&api, Some("tok-1")).await.expect_err("bad body should be an error");
    assert!(matches!(err, ApiError::Decode { .. }));
}
