//! Demo accounts and credential check.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use time::macros::date;

use crate::state::identity::{Identity, ProfileDetails, Role, WorkPreferences};

/// Shared password of both demo accounts.
pub const DEMO_PASSWORD: &str = "demo123";
pub const SEEKER_EMAIL: &str = "applicant@demo.com";
pub const COACH_EMAIL: &str = "coach@demo.com";

/// The canned identity for `role`.
#[must_use]
pub fn demo_identity(role: Role) -> Identity {
    match role {
        Role::Seeker => Identity::new("1", "Alex Rivera", SEEKER_EMAIL, Role::Seeker).with_profile(ProfileDetails {
            avatar_url: Some("https://api.dicebear.com/7.x/avataaars/svg?seed=Alex".into()),
            location: Some("San Francisco, CA".into()),
            phone: Some("+1 (415) 555-0123".into()),
            goal: Some("Senior Backend Engineer at a growth-stage startup".into()),
            member_since: Some(date!(2024 - 01 - 15)),
            bio: Some(
                "Passionate software engineer with a focus on building scalable backend systems and \
                 mentoring emerging talent."
                    .into(),
            ),
            career_objectives: Some(
                "Seeking a Senior Backend Engineering role at a growth-stage startup where I can leverage \
                 my expertise in distributed systems and team leadership."
                    .into(),
            ),
            interests: vec![
                "Open Source Contributions".into(),
                "Technical Writing".into(),
                "Mentorship".into(),
                "Rock Climbing".into(),
                "Photography".into(),
            ],
            work_preferences: Some(WorkPreferences {
                remote: true,
                hybrid: true,
                on_site: false,
                willing_to_relocate: false,
            }),
        }),
        Role::Coach => Identity::new("2", "Sarah Chen", COACH_EMAIL, Role::Coach).with_profile(ProfileDetails {
            avatar_url: Some("https://api.dicebear.com/7.x/avataaars/svg?seed=Sarah".into()),
            location: Some("Austin, TX".into()),
            phone: Some("+1 (512) 555-0456".into()),
            goal: None,
            member_since: Some(date!(2023 - 08 - 20)),
            bio: Some(
                "Experienced career coach with 10+ years in tech recruitment and career development."
                    .into(),
            ),
            career_objectives: None,
            interests: vec![
                "Professional Development".into(),
                "Mentoring".into(),
                "Leadership Training".into(),
                "Hiking".into(),
                "Coffee".into(),
            ],
            work_preferences: None,
        }),
    }
}

/// Match `email`/`password` against the demo accounts.
///
/// Email comparison ignores case and surrounding whitespace; the password
/// must match exactly.
#[must_use]
pub fn authenticate(email: &str, password: &str) -> Option<Identity> {
    if password != DEMO_PASSWORD {
        return None;
    }
    let email = email.trim().to_ascii_lowercase();
    match email.as_str() {
        SEEKER_EMAIL => Some(demo_identity(Role::Seeker)),
        COACH_EMAIL => Some(demo_identity(Role::Coach)),
        _ => None,
    }
}
