//! Profile completeness.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use super::identity::Identity;

/// Profile sections counted towards completion, with their labels.
#[must_use]
pub fn profile_sections(identity: &Identity) -> [(&'static str, bool); 6] {
    let profile = &identity.profile;
    let filled = |value: &Option<String>| value.as_deref().is_some_and(|v| !v.trim().is_empty());
    [
        ("Contact details", filled(&profile.phone) && filled(&profile.location)),
        ("Career goal", filled(&profile.goal)),
        ("Bio", filled(&profile.bio)),
        ("Career objectives", filled(&profile.career_objectives)),
        ("Interests", !profile.interests.is_empty()),
        ("Work preferences", profile.work_preferences.is_some()),
    ]
}

/// Completed sections as a rounded percentage.
#[must_use]
pub fn completion_percent(identity: &Identity) -> u32 {
    let sections = profile_sections(identity);
    let done = sections.iter().filter(|(_, ok)| *ok).count();
    super::roster::rounded_mean(u32::try_from(done * 100).unwrap_or(0), sections.len())
}
