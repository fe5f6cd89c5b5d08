//! Signed-in actor model.
//!
//! DESIGN
//! ======
//! `Identity` is created once by the login flow (or session restore) and is
//! then only read. Core fields are private so nothing can change the role of
//! a live session; the profile payload is opaque to authorization and stays
//! public for the views that render it.

#[cfg(test)]
#[path = "identity_test.rs"]
mod identity_test;

use serde::{Deserialize, Serialize};
use time::Date;

/// The two mutually exclusive roles of the product.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Job seeker ("applicant" in the demo UI).
    Seeker,
    /// Career coach.
    Coach,
}

impl Role {
    /// Every role, in display order.
    pub const ALL: [Role; 2] = [Role::Seeker, Role::Coach];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Seeker => "seeker",
            Self::Coach => "coach",
        }
    }

    /// Human-facing label shown in the navigation bar and login cards.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Seeker => "Job Seeker",
            Self::Coach => "Career Coach",
        }
    }

    /// Parse a role name; the demo UI also calls seekers "applicant".
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "seeker" | "applicant" => Some(Self::Seeker),
            "coach" => Some(Self::Coach),
            _ => None,
        }
    }
}

/// Seeker work-arrangement preferences.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WorkPreferences {
    pub remote: bool,
    pub hybrid: bool,
    pub on_site: bool,
    pub willing_to_relocate: bool,
}

/// Optional profile payload carried by an identity.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileDetails {
    pub avatar_url: Option<String>,
    pub location: Option<String>,
    pub phone: Option<String>,
    pub goal: Option<String>,
    pub member_since: Option<Date>,
    pub bio: Option<String>,
    pub career_objectives: Option<String>,
    pub interests: Vec<String>,
    pub work_preferences: Option<WorkPreferences>,
}

/// The authenticated actor of a session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Identity {
    id: String,
    name: String,
    email: String,
    role: Role,
    pub profile: ProfileDetails,
}

impl Identity {
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, email: impl Into<String>, role: Role) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            role,
            profile: ProfileDetails::default(),
        }
    }

    #[must_use]
    pub fn with_profile(mut self, profile: ProfileDetails) -> Self {
        self.profile = profile;
        self
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub fn role(&self) -> Role {
        self.role
    }
}
