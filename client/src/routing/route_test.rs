use super::*;

#[test]
fn parse_root_variants_are_landing() {
    assert_eq!(Route::parse("/"), Route::Landing);
    assert_eq!(Route::parse(""), Route::Landing);
    assert_eq!(Route::parse("/?demo=coach"), Route::Landing);
}

#[test]
fn parse_static_paths_round_trip() {
    for kind in RouteKind::ALL {
        let Some(path) = kind.static_path() else {
            continue;
        };
        let route = Route::parse(path);
        assert_eq!(route.kind(), kind, "path {path}");
        assert_eq!(route.path(), path);
    }
}

#[test]
fn parse_tolerates_trailing_slash_and_query() {
    assert_eq!(Route::parse("/jobs/"), Route::Jobs);
    assert_eq!(Route::parse("/login?demo=applicant"), Route::Login);
    assert_eq!(Route::parse("/chat#latest"), Route::Chat);
}

#[test]
fn parse_client_profile_extracts_id() {
    assert_eq!(Route::parse("/client-profile/3"), Route::ClientProfile("3".to_owned()));
    assert_eq!(Route::ClientProfile("3".to_owned()).path(), "/client-profile/3");
}

#[test]
fn parse_client_profile_without_id_is_unknown() {
    assert_eq!(Route::parse("/client-profile/").kind(), RouteKind::Unknown);
    assert_eq!(Route::parse("/client-profile/3/notes").kind(), RouteKind::Unknown);
}

#[test]
fn parse_unrecognized_path_keeps_raw_path() {
    let route = Route::parse("/signup");
    assert_eq!(route, Route::Unknown("/signup".to_owned()));
    assert_eq!(route.path(), "/signup");
}

#[test]
fn from_kind_builds_client_profile_from_param() {
    assert_eq!(
        Route::from_kind(RouteKind::ClientProfile, Some("4".to_owned())),
        Route::ClientProfile("4".to_owned())
    );
    assert_eq!(Route::from_kind(RouteKind::ClientProfile, None).kind(), RouteKind::Unknown);
    assert_eq!(Route::from_kind(RouteKind::Jobs, Some("ignored".to_owned())), Route::Jobs);
}

#[test]
fn only_parameterless_kinds_have_static_paths() {
    assert_eq!(RouteKind::ClientProfile.static_path(), None);
    assert_eq!(RouteKind::Unknown.static_path(), None);
    assert_eq!(RouteKind::Dashboard.static_path(), Some("/dashboard"));
}
