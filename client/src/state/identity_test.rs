use super::*;

// =============================================================
// Role
// =============================================================

#[test]
fn role_parse_accepts_applicant_alias() {
    assert_eq!(Role::parse("applicant"), Some(Role::Seeker));
    assert_eq!(Role::parse("seeker"), Some(Role::Seeker));
    assert_eq!(Role::parse(" Coach "), Some(Role::Coach));
}

#[test]
fn role_parse_rejects_unknown_names() {
    assert_eq!(Role::parse("admin"), None);
    assert_eq!(Role::parse(""), None);
}

#[test]
fn role_as_str_round_trips_through_parse() {
    for role in Role::ALL {
        assert_eq!(Role::parse(role.as_str()), Some(role));
    }
}

#[test]
fn role_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Role::Coach).unwrap(), "\"coach\"");
    assert_eq!(serde_json::from_str::<Role>("\"seeker\"").unwrap(), Role::Seeker);
}

// =============================================================
// Identity
// =============================================================

#[test]
fn identity_new_has_empty_profile() {
    let identity = Identity::new("7", "Pat Doe", "pat@example.com", Role::Seeker);
    assert_eq!(identity.id(), "7");
    assert_eq!(identity.name(), "Pat Doe");
    assert_eq!(identity.email(), "pat@example.com");
    assert_eq!(identity.role(), Role::Seeker);
    assert_eq!(identity.profile, ProfileDetails::default());
}

#[test]
fn identity_with_profile_keeps_role() {
    let profile = ProfileDetails {
        location: Some("Austin, TX".to_owned()),
        ..ProfileDetails::default()
    };
    let identity = Identity::new("2", "Coach", "c@example.com", Role::Coach).with_profile(profile.clone());
    assert_eq!(identity.role(), Role::Coach);
    assert_eq!(identity.profile, profile);
}

#[test]
fn identity_clone_preserves_role() {
    let identity = Identity::new("1", "A", "a@example.com", Role::Coach);
    let mut copy = identity.clone();
    copy.profile.bio = Some("edited".to_owned());
    assert_eq!(copy.role(), identity.role());
}
