use super::*;
use crate::routing::policy::route_policy;
use crate::state::identity::{Identity, Role};
use crate::state::session::{IdentityProvider, ProviderError, SessionStore};

struct NoopProvider;

#[async_trait::async_trait(?Send)]
impl IdentityProvider for NoopProvider {
    async fn check_current_identity(&self) -> Result<Option<Identity>, ProviderError> {
        Ok(None)
    }

    fn sign_out(&self) {}
}

fn signed_in(role: Role) -> Session {
    Session::Authenticated(Identity::new("id", "Name", "name@demo.com", role))
}

fn go(session: &Session, path: &str) -> GateOutcome {
    resolve(session, &Route::parse(path), route_policy())
}

fn protected_paths() -> [&'static str; 9] {
    [
        "/dashboard",
        "/chat",
        "/jobs",
        "/documents",
        "/clients",
        "/workspaces",
        "/settings",
        "/profile",
        "/client-profile/1",
    ]
}

// =============================================================
// Scenarios
// =============================================================

#[test]
fn loading_session_never_redirects() {
    assert_eq!(go(&Session::Loading, "/dashboard"), GateOutcome::Loading);
    assert_eq!(go(&Session::Loading, "/"), GateOutcome::Loading);
    assert_eq!(go(&Session::Loading, "/nowhere"), GateOutcome::Loading);
}

#[test]
fn anonymous_jobs_redirects_to_login() {
    assert_eq!(go(&Session::Anonymous, "/jobs"), GateOutcome::RedirectToLogin);
}

#[test]
fn coach_jobs_falls_back_to_dashboard() {
    assert_eq!(
        go(&signed_in(Role::Coach), "/jobs"),
        GateOutcome::RedirectToFallback(RouteKind::Dashboard)
    );
}

#[test]
fn seeker_dashboard_renders_seeker_view() {
    assert_eq!(
        go(&signed_in(Role::Seeker), "/dashboard"),
        GateOutcome::Render(ViewKind::SeekerDashboard)
    );
}

#[test]
fn coach_landing_forwards_to_dashboard() {
    assert_eq!(
        go(&signed_in(Role::Coach), "/"),
        GateOutcome::RedirectToFallback(RouteKind::Dashboard)
    );
}

#[test]
fn logout_then_profile_redirects_to_login() {
    let mut store = SessionStore::new();
    store.login(Identity::new("1", "Alex", "applicant@demo.com", Role::Seeker));
    assert_eq!(go(store.session(), "/profile"), GateOutcome::Render(ViewKind::Profile));
    store.logout(&NoopProvider);
    assert_eq!(go(store.session(), "/profile"), GateOutcome::RedirectToLogin);
}

// =============================================================
// Properties
// =============================================================

#[test]
fn anonymous_never_renders_protected_paths() {
    for path in protected_paths() {
        assert_eq!(go(&Session::Anonymous, path), GateOutcome::RedirectToLogin, "path {path}");
    }
}

#[test]
fn denied_redirects_land_on_a_rendered_view() {
    for role in Role::ALL {
        let session = signed_in(role);
        for path in protected_paths() {
            if let GateOutcome::RedirectToFallback(target) = go(&session, path) {
                let landing = resolve(&session, &Route::from_kind(target, None), route_policy());
                assert!(
                    matches!(landing, GateOutcome::Render(_)),
                    "{path} for {role:?} bounced to {target:?} -> {landing:?}"
                );
            }
        }
    }
}

#[test]
fn role_conditional_views_depend_only_on_role() {
    let a = Session::Authenticated(Identity::new("a", "A", "a@x.com", Role::Coach));
    let b = Session::Authenticated(Identity::new("b", "B", "b@y.com", Role::Coach));
    for path in ["/dashboard", "/chat"] {
        assert_eq!(go(&a, path), go(&b, path));
    }
    assert_eq!(go(&a, "/chat"), GateOutcome::Render(ViewKind::CoachMessages));
    assert_eq!(go(&signed_in(Role::Seeker), "/chat"), GateOutcome::Render(ViewKind::Chat));
}

// =============================================================
// Per-path denial behavior
// =============================================================

#[test]
fn seeker_settings_substitutes_profile() {
    assert_eq!(go(&signed_in(Role::Seeker), "/settings"), GateOutcome::Render(ViewKind::Profile));
    assert_eq!(go(&signed_in(Role::Coach), "/settings"), GateOutcome::Render(ViewKind::CoachSettings));
}

#[test]
fn seeker_client_profile_renders_blank() {
    assert_eq!(go(&signed_in(Role::Seeker), "/client-profile/1"), GateOutcome::Render(ViewKind::Blank));
    assert_eq!(
        go(&signed_in(Role::Coach), "/client-profile/1"),
        GateOutcome::Render(ViewKind::ClientProfile)
    );
}

#[test]
fn seeker_coach_pages_fall_back_to_dashboard() {
    for path in ["/clients", "/workspaces"] {
        assert_eq!(
            go(&signed_in(Role::Seeker), path),
            GateOutcome::RedirectToFallback(RouteKind::Dashboard)
        );
    }
}

#[test]
fn login_page_forwards_signed_in_users() {
    assert_eq!(go(&Session::Anonymous, "/login"), GateOutcome::Render(ViewKind::Login));
    assert_eq!(
        go(&signed_in(Role::Seeker), "/login"),
        GateOutcome::RedirectToFallback(RouteKind::Dashboard)
    );
}

#[test]
fn unknown_paths_forward_to_landing() {
    assert_eq!(go(&Session::Anonymous, "/signup"), GateOutcome::RedirectToFallback(RouteKind::Landing));
    assert_eq!(
        go(&signed_in(Role::Coach), "/signup"),
        GateOutcome::RedirectToFallback(RouteKind::Landing)
    );
}

#[test]
fn redirect_path_maps_outcomes() {
    assert_eq!(GateOutcome::RedirectToLogin.redirect_path(), Some("/login"));
    assert_eq!(
        GateOutcome::RedirectToFallback(RouteKind::Dashboard).redirect_path(),
        Some("/dashboard")
    );
    assert_eq!(GateOutcome::Loading.redirect_path(), None);
    assert_eq!(GateOutcome::Render(ViewKind::Jobs).redirect_path(), None);
}
