use futures::executor::block_on;

use super::*;
use crate::state::session::{Session, SessionStore};

#[test]
fn parse_marker_maps_role_to_demo_identity() {
    let identity = parse_marker(r#"{"role":"coach"}"#).unwrap();
    assert_eq!(identity.role(), Role::Coach);
    assert_eq!(identity.name(), "Sarah Chen");

    let identity = parse_marker(r#"{"role":"seeker"}"#).unwrap();
    assert_eq!(identity.email(), "applicant@demo.com");
}

#[test]
fn parse_marker_rejects_garbage() {
    assert!(matches!(parse_marker("not json"), Err(ProviderError::CorruptMarker(_))));
    assert!(matches!(parse_marker(r#"{"role":"admin"}"#), Err(ProviderError::CorruptMarker(_))));
}

#[test]
fn marker_serializes_lowercase_role() {
    let raw = serde_json::to_string(&DemoMarker { role: Role::Seeker }).unwrap();
    assert_eq!(raw, r#"{"role":"seeker"}"#);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn restore_outside_browser_is_anonymous() {
    let provider = DemoSessionProvider;
    provider.remember(Role::Coach);
    let mut store = SessionStore::new();
    assert!(store.resolve(block_on(SessionStore::restore(&provider))));
    assert_eq!(store.session(), &Session::Anonymous);
}
