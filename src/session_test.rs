use super::*;

fn identity() -> UserIdentity {
    UserIdentity {
        username: "ann".to_owned(),
        email: "ann@example.com".to_owned(),
        profile_image: None,
    }
}

fn empty_store() -> SessionStore {
    SessionStore::from_request_cookies(CookieJar::new(), false)
}

// =============================================================================
// set_auth / accessors — round trip
// =============================================================================

#[test]
fn set_auth_round_trips_token_and_user() {
    let mut store = empty_store();
    assert!(!store.is_authenticated());

    store.set_auth("tok-1".to_owned(), identity());
    assert!(store.is_authenticated());
    assert_eq!(store.token(), Some("tok-1"));
    assert_eq!(store.user(), Some(&identity()));
}

#[test]
fn set_auth_replaces_session_wholesale() {
    let mut store = empty_store();
    store.set_auth("tok-1".to_owned(), identity());

    let other = UserIdentity {
        username: "bob".to_owned(),
        email: "bob@example.com".to_owned(),
        profile_image: Some("http://img/bob.png".to_owned()),
    };
    store.set_auth("tok-2".to_owned(), other.clone());
    assert_eq!(store.token(), Some("tok-2"));
    assert_eq!(store.user(), Some(&other));
}

#[test]
fn set_auth_writes_durable_cookies_with_full_attributes() {
    let mut store = empty_store();
    store.set_auth("tok-1".to_owned(), identity());

    let jar = store.into_jar();
    let token = jar.get(TOKEN_COOKIE).expect("token cookie should be set");
    assert_eq!(token.value(), "tok-1");
    assert_eq!(token.path(), Some("/"));
    assert_eq!(token.max_age(), Some(SESSION_TTL));
    assert_eq!(token.same_site(), Some(SameSite::Lax));
    assert_eq!(token.http_only(), Some(true));

    let user = jar.get(USER_COOKIE).expect("user cookie should be set");
    assert_eq!(user.max_age(), Some(SESSION_TTL));
    // URL-encoded JSON payload.
    assert!(user.value().contains("%22username%22"));
}

#[test]
fn set_auth_cookies_survive_a_bootstrap_round_trip() {
    let mut store = empty_store();
    store.set_auth("tok-1".to_owned(), identity());

    let reread = SessionStore::from_request_cookies(store.into_jar(), false);
    assert_eq!(reread.token(), Some("tok-1"));
    assert_eq!(reread.user(), Some(&identity()));
}

// =============================================================================
// logout — total and idempotent
// =============================================================================

#[test]
fn logout_clears_session_and_expires_cookies() {
    let mut store = empty_store();
    store.set_auth("tok-1".to_owned(), identity());
    store.logout();

    assert!(!store.is_authenticated());
    assert_eq!(store.token(), None);
    assert_eq!(store.user(), None);

    let jar = store.into_jar();
    let token = jar.get(TOKEN_COOKIE).expect("clearing write should be present");
    assert_eq!(token.value(), "");
    assert_eq!(token.path(), Some("/"));
    assert_eq!(token.max_age(), Some(Duration::ZERO));
    let user = jar.get(USER_COOKIE).expect("clearing write should be present");
    assert_eq!(user.max_age(), Some(Duration::ZERO));
}

#[test]
fn logout_without_prior_session_is_harmless() {
    let mut store = empty_store();
    store.logout();
    store.logout();
    assert!(!store.is_authenticated());
    assert_eq!(store.token(), None);
}

// =============================================================================
// bootstrap decode — malformed durable state is absent, not an error
// =============================================================================

#[test]
fn bootstrap_reads_token_and_user_cookies() {
    let encoded = urlencoding::encode(r#"{"username":"ann","email":"ann@example.com"}"#).into_owned();
    let jar = CookieJar::new()
        .add(Cookie::new(TOKEN_COOKIE, "tok-9"))
        .add(Cookie::new(USER_COOKIE, encoded));

    let store = SessionStore::from_request_cookies(jar, false);
    assert_eq!(store.token(), Some("tok-9"));
    assert_eq!(store.user().map(|u| u.username.as_str()), Some("ann"));
    assert_eq!(store.user().and_then(|u| u.profile_image.clone()), None);
}

#[test]
fn malformed_user_cookie_is_treated_as_absent() {
    let jar = CookieJar::new()
        .add(Cookie::new(TOKEN_COOKIE, "tok-9"))
        .add(Cookie::new(USER_COOKIE, "definitely-not-json"));

    let store = SessionStore::from_request_cookies(jar, false);
    assert_eq!(store.token(), Some("tok-9"));
    assert_eq!(store.user(), None);
}

#[test]
fn undecodable_user_cookie_is_treated_as_absent() {
    // %FF is not valid UTF-8 once decoded.
    let jar = CookieJar::new()
        .add(Cookie::new(TOKEN_COOKIE, "tok-9"))
        .add(Cookie::new(USER_COOKIE, "%FF%FE"));

    let store = SessionStore::from_request_cookies(jar, false);
    assert_eq!(store.user(), None);
}

#[test]
fn user_cookie_without_token_is_ignored() {
    let encoded = urlencoding::encode(r#"{"username":"ann","email":"ann@example.com"}"#).into_owned();
    let jar = CookieJar::new().add(Cookie::new(USER_COOKIE, encoded));

    let store = SessionStore::from_request_cookies(jar, false);
    assert!(!store.is_authenticated());
    assert_eq!(store.user(), None);
}

#[test]
fn empty_token_cookie_counts_as_no_session() {
    let jar = CookieJar::new().add(Cookie::new(TOKEN_COOKIE, ""));
    let store = SessionStore::from_request_cookies(jar, false);
    assert!(!store.is_authenticated());
}

#[test]
fn secure_flag_is_applied_to_durable_writes() {
    let mut store = SessionStore::from_request_cookies(CookieJar::new(), true);
    store.set_auth("tok-1".to_owned(), identity());
    let jar = store.into_jar();
    assert_eq!(jar.get(TOKEN_COOKIE).and_then(Cookie::secure), Some(true));
}
