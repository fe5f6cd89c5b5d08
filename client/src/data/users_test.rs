use super::*;

#[test]
fn authenticate_accepts_both_demo_accounts() {
    let seeker = authenticate(SEEKER_EMAIL, DEMO_PASSWORD).unwrap();
    assert_eq!(seeker.role(), Role::Seeker);
    assert_eq!(seeker.name(), "Alex Rivera");

    let coach = authenticate(COACH_EMAIL, DEMO_PASSWORD).unwrap();
    assert_eq!(coach.role(), Role::Coach);
    assert_eq!(coach.id(), "2");
}

#[test]
fn authenticate_normalizes_email() {
    assert!(authenticate("  Coach@Demo.com ", DEMO_PASSWORD).is_some());
}

#[test]
fn authenticate_rejects_wrong_password_and_unknown_email() {
    assert!(authenticate(SEEKER_EMAIL, "demo1234").is_none());
    assert!(authenticate("someone@demo.com", DEMO_PASSWORD).is_none());
    assert!(authenticate("", "").is_none());
}

#[test]
fn seeker_identity_matches_first_roster_entry() {
    let seeker = demo_identity(Role::Seeker);
    assert!(crate::data::roster::find_client(seeker.id()).is_some());
}
