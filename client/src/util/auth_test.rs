use super::*;
use crate::data::users::demo_identity;
use crate::routing::gate::resolve;
use crate::routing::policy::route_policy;
use crate::routing::route::Route;
use crate::state::identity::Role;
use crate::state::session::Session;

#[test]
fn redirects_replace_history() {
    assert!(redirect_options().replace);
}

#[test]
fn sign_in_then_sign_out_round_trip() {
    let owner = Owner::new();
    owner.with(|| {
        let session = RwSignal::new(SessionStore::new());
        sign_in(session, demo_identity(Role::Seeker));
        assert_eq!(session.with_untracked(|s| s.identity().map(Identity::role)), Some(Role::Seeker));

        assert!(sign_out(session));
        assert_eq!(session.with_untracked(|s| s.session().clone()), Session::Anonymous);
        assert!(!sign_out(session), "second sign-out is a no-op");
    });
}

#[test]
fn sign_out_leaves_the_single_redirect_to_the_gate() {
    let owner = Owner::new();
    owner.with(|| {
        let session = RwSignal::new(SessionStore::new());
        sign_in(session, demo_identity(Role::Seeker));
        let route = Route::parse("/profile");
        let outcome = Memo::new(move |_| session.with(|store| resolve(store.session(), &route, route_policy())));
        assert!(matches!(outcome.get_untracked(), GateOutcome::Render(_)));

        assert!(sign_out(session));
        assert_eq!(outcome.get_untracked(), GateOutcome::RedirectToLogin);
        assert_eq!(outcome.get_untracked().redirect_path(), Some("/login"));
    });
}
