use std::cell::Cell;

use futures::executor::block_on;

use super::*;
use crate::state::identity::Role;

// =============================================================
// Test provider
// =============================================================

enum Lookup {
    Found(Identity),
    Nobody,
    Fails,
}

struct RecordingProvider {
    lookup: Lookup,
    sign_outs: Cell<u32>,
}

impl RecordingProvider {
    fn new(lookup: Lookup) -> Self {
        Self { lookup, sign_outs: Cell::new(0) }
    }
}

#[async_trait::async_trait(?Send)]
impl IdentityProvider for RecordingProvider {
    async fn check_current_identity(&self) -> Result<Option<Identity>, ProviderError> {
        match &self.lookup {
            Lookup::Found(identity) => Ok(Some(identity.clone())),
            Lookup::Nobody => Ok(None),
            Lookup::Fails => Err(ProviderError::Check("provider offline".to_owned())),
        }
    }

    fn sign_out(&self) {
        self.sign_outs.set(self.sign_outs.get() + 1);
    }
}

fn coach() -> Identity {
    Identity::new("2", "Sarah Chen", "coach@demo.com", Role::Coach)
}

fn seeker() -> Identity {
    Identity::new("1", "Alex Rivera", "applicant@demo.com", Role::Seeker)
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn new_store_is_loading() {
    let store = SessionStore::new();
    assert_eq!(store.session(), &Session::Loading);
    assert!(store.identity().is_none());
}

// =============================================================
// restore
// =============================================================

#[test]
fn restore_with_known_identity_authenticates() {
    let provider = RecordingProvider::new(Lookup::Found(seeker()));
    let restored = block_on(SessionStore::restore(&provider));
    assert_eq!(restored, Session::Authenticated(seeker()));
    assert_eq!(provider.sign_outs.get(), 0);
}

#[test]
fn restore_without_identity_is_anonymous() {
    let provider = RecordingProvider::new(Lookup::Nobody);
    let restored = block_on(SessionStore::restore(&provider));
    assert_eq!(restored, Session::Anonymous);
    assert_eq!(provider.sign_outs.get(), 0);
}

#[test]
fn restore_failure_is_anonymous_and_signs_out() {
    let provider = RecordingProvider::new(Lookup::Fails);
    let restored = block_on(SessionStore::restore(&provider));
    assert_eq!(restored, Session::Anonymous);
    assert_eq!(provider.sign_outs.get(), 1);
}

#[test]
fn restore_works_through_trait_object() {
    let provider = RecordingProvider::new(Lookup::Found(coach()));
    let dyn_provider: &dyn IdentityProvider = &provider;
    let restored = block_on(SessionStore::restore(dyn_provider));
    assert_eq!(restored.identity().map(Identity::role), Some(Role::Coach));
}

// =============================================================
// resolve
// =============================================================

#[test]
fn resolve_applies_while_loading() {
    let mut store = SessionStore::new();
    assert!(store.resolve(Session::Anonymous));
    assert_eq!(store.session(), &Session::Anonymous);
}

#[test]
fn resolve_ignored_after_login() {
    let mut store = SessionStore::new();
    store.login(coach());
    assert!(!store.resolve(Session::Anonymous));
    assert_eq!(store.identity(), Some(&coach()));
}

#[test]
fn resolve_ignores_loading_outcome() {
    let mut store = SessionStore::new();
    assert!(!store.resolve(Session::Loading));
    assert!(store.session().is_loading());
}

// =============================================================
// login / logout
// =============================================================

#[test]
fn login_from_any_state_authenticates() {
    let mut store = SessionStore::new();
    store.login(seeker());
    assert_eq!(store.identity(), Some(&seeker()));

    store.resolve(Session::Anonymous);
    store.login(coach());
    assert_eq!(store.identity(), Some(&coach()));
}

#[test]
fn logout_signs_out_once() {
    let provider = RecordingProvider::new(Lookup::Nobody);
    let mut store = SessionStore::new();
    store.login(seeker());

    assert!(store.logout(&provider));
    assert_eq!(store.session(), &Session::Anonymous);
    assert_eq!(provider.sign_outs.get(), 1);

    assert!(!store.logout(&provider));
    assert_eq!(store.session(), &Session::Anonymous);
    assert_eq!(provider.sign_outs.get(), 1);
}

#[test]
fn logout_while_loading_goes_anonymous() {
    let provider = RecordingProvider::new(Lookup::Nobody);
    let mut store = SessionStore::new();
    assert!(store.logout(&provider));
    assert_eq!(store.session(), &Session::Anonymous);
    assert_eq!(provider.sign_outs.get(), 1);
}

#[test]
fn role_survives_until_logout() {
    let provider = RecordingProvider::new(Lookup::Nobody);
    let mut store = SessionStore::new();
    store.login(coach());
    let before = store.identity().map(Identity::role);
    let _ = store.resolve(Session::Authenticated(seeker()));
    assert_eq!(store.identity().map(Identity::role), before);
    store.logout(&provider);
    assert!(store.identity().is_none());
}
