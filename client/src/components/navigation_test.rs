use super::*;
use crate::routing::gate::{GateOutcome, resolve};
use crate::routing::policy::route_policy;
use crate::routing::route::Route;
use crate::state::identity::Identity;
use crate::state::session::Session;

#[test]
fn every_nav_item_renders_for_its_role() {
    for role in Role::ALL {
        let session = Session::Authenticated(Identity::new("x", "X", "x@demo.com", role));
        for item in nav_items(role) {
            let outcome = resolve(&session, &Route::parse(item.path()), route_policy());
            assert!(matches!(outcome, GateOutcome::Render(_)), "{} for {role:?} -> {outcome:?}", item.label);
        }
    }
}

#[test]
fn nav_items_per_role() {
    let seeker: Vec<_> = nav_items(Role::Seeker).iter().map(|i| i.label).collect();
    assert_eq!(seeker, ["Dashboard", "AI Chat", "Jobs", "Documents", "Profile"]);
    let coach: Vec<_> = nav_items(Role::Coach).iter().map(|i| i.path()).collect();
    assert_eq!(coach, ["/dashboard", "/clients", "/chat", "/workspaces", "/settings"]);
}

#[test]
fn unread_badge_only_for_seekers_with_unread() {
    assert!(shows_unread_badge(Some(Role::Seeker), 2));
    assert!(!shows_unread_badge(Some(Role::Seeker), 0));
    assert!(!shows_unread_badge(Some(Role::Coach), 2));
    assert!(!shows_unread_badge(None, 2));
}
