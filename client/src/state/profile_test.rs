use super::*;
use crate::data::users::demo_identity;
use crate::state::identity::Role;

#[test]
fn demo_seeker_profile_is_complete() {
    assert_eq!(completion_percent(&demo_identity(Role::Seeker)), 100);
}

#[test]
fn demo_coach_profile_is_partial() {
    // Contact, bio and interests are set; goal, objectives and preferences are not.
    assert_eq!(completion_percent(&demo_identity(Role::Coach)), 50);
}

#[test]
fn blank_fields_do_not_count() {
    let mut identity = Identity::new("9", "Blank", "blank@demo.com", Role::Seeker);
    assert_eq!(completion_percent(&identity), 0);
    identity.profile.bio = Some("   ".into());
    assert_eq!(completion_percent(&identity), 0);
    identity.profile.bio = Some("Hello".into());
    assert_eq!(completion_percent(&identity), 17);
}
