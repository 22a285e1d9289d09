use super::*;

// =============================================================================
// classify
// =============================================================================

#[test]
fn public_prefixes_classify_as_public() {
    assert_eq!(classify("/login"), RouteVisibility::Public);
    assert_eq!(classify("/register"), RouteVisibility::Public);
    assert_eq!(classify("/healthz"), RouteVisibility::Public);
}

#[test]
fn prefix_matching_covers_subpaths() {
    assert_eq!(classify("/login?next=/dashboard"), RouteVisibility::Public);
    assert_eq!(classify("/register/confirm"), RouteVisibility::Public);
}

#[test]
fn everything_else_classifies_as_protected() {
    assert_eq!(classify("/dashboard"), RouteVisibility::Protected);
    assert_eq!(classify("/playlists/3"), RouteVisibility::Protected);
    assert_eq!(classify("/settings"), RouteVisibility::Protected);
    assert_eq!(classify("/"), RouteVisibility::Protected);
}

// =============================================================================
// decide — the full access table
// =============================================================================

#[test]
fn authenticated_on_public_route_goes_home() {
    assert_eq!(decide(true, "/login"), GuardAction::Redirect("/dashboard"));
    assert_eq!(decide(true, "/register"), GuardAction::Redirect("/dashboard"));
}

#[test]
fn unauthenticated_on_protected_route_goes_to_login() {
    assert_eq!(decide(false, "/dashboard"), GuardAction::Redirect("/login"));
    assert_eq!(decide(false, "/playlists/7"), GuardAction::Redirect("/login"));
}

#[test]
fn root_always_redirects_by_session_state() {
    assert_eq!(decide(true, "/"), GuardAction::Redirect("/dashboard"));
    assert_eq!(decide(false, "/"), GuardAction::Redirect("/login"));
}

#[test]
fn matching_visibility_is_allowed() {
    assert_eq!(decide(true, "/dashboard"), GuardAction::Allow);
    assert_eq!(decide(true, "/profile/ann"), GuardAction::Allow);
    assert_eq!(decide(false, "/login"), GuardAction::Allow);
    assert_eq!(decide(false, "/register"), GuardAction::Allow);
}
