//! Record types for the demo data set.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use time::{Date, OffsetDateTime};

/// How well a job matches the seeker's profile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FitScore {
    Green,
    Orange,
    Red,
}

impl FitScore {
    pub const ALL: [FitScore; 3] = [FitScore::Green, FitScore::Orange, FitScore::Red];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Green => "Great Fit",
            Self::Orange => "Good Fit",
            Self::Red => "May Not Fit",
        }
    }

    /// CSS modifier used by badges and filter buttons.
    #[must_use]
    pub fn css(self) -> &'static str {
        match self {
            Self::Green => "fit--green",
            Self::Orange => "fit--orange",
            Self::Red => "fit--red",
        }
    }
}

/// Application pipeline stage of a job.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum JobStatus {
    Saved,
    Applied,
    Interview,
    Rejected,
    Offer,
}

impl JobStatus {
    pub const ALL: [JobStatus; 5] = [
        JobStatus::Saved,
        JobStatus::Applied,
        JobStatus::Interview,
        JobStatus::Offer,
        JobStatus::Rejected,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Saved => "Saved",
            Self::Applied => "Applied",
            Self::Interview => "Interview",
            Self::Rejected => "Rejected",
            Self::Offer => "Offer",
        }
    }

    /// Stable lowercase key used in form values.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Saved => "saved",
            Self::Applied => "applied",
            Self::Interview => "interview",
            Self::Rejected => "rejected",
            Self::Offer => "offer",
        }
    }

    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.key() == key)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Job {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub salary: Option<String>,
    pub employment_type: String,
    pub description: String,
    pub requirements: Vec<String>,
    pub fit_score: FitScore,
    pub status: JobStatus,
    pub applied_date: Option<Date>,
    pub last_updated: Date,
    pub link: Option<String>,
    /// Commute in minutes; zero for remote roles.
    pub commute_minutes: Option<u32>,
    pub company_size: Option<String>,
    pub remote: bool,
    pub keywords: Vec<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DocumentType {
    Resume,
    CoverLetter,
    Tailored,
}

impl DocumentType {
    pub const ALL: [DocumentType; 3] = [DocumentType::Resume, DocumentType::CoverLetter, DocumentType::Tailored];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Resume => "Resumes",
            Self::CoverLetter => "Cover Letters",
            Self::Tailored => "Tailored",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Document {
    pub id: String,
    pub title: String,
    pub doc_type: DocumentType,
    /// `"current"`, `"generated"` or `"draft"`.
    pub status: String,
    pub last_modified: Date,
    pub version: String,
    pub tailored_for: Option<String>,
    pub ai_score: u8,
    pub fit_jobs: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Speaker {
    User,
    Assistant,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message {
    pub id: String,
    pub speaker: Speaker,
    pub content: String,
    pub timestamp: OffsetDateTime,
}

/// Gamified seeker progress figures.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DashboardStats {
    pub level: u32,
    pub current_streak: u32,
    pub total_points: u32,
    pub examples_created: u32,
    pub jobs_applied: u32,
    pub interviews_scheduled: u32,
    pub profile_completion: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub id: String,
    pub title: String,
    pub message: String,
    pub kind: NotificationKind,
    pub read: bool,
    pub created_at: OffsetDateTime,
    pub action_url: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActivityKind {
    ExampleCreated,
    JobApplied,
    DocumentGenerated,
    SessionScheduled,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Activity {
    pub id: String,
    pub kind: ActivityKind,
    pub title: String,
    pub description: String,
    pub timestamp: OffsetDateTime,
    pub user_id: String,
}

/// Progress of a client-facing document.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DocStatus {
    Final,
    InReview,
    Draft,
    NotStarted,
}

impl DocStatus {
    /// Badge text shown on coach views.
    #[must_use]
    pub fn badge(self) -> &'static str {
        match self {
            Self::Final => "Complete",
            Self::InReview => "In Progress",
            Self::Draft => "Draft",
            Self::NotStarted => "Not Started",
        }
    }

    #[must_use]
    pub fn css(self) -> &'static str {
        match self {
            Self::Final => "badge--success",
            Self::InReview => "badge--warning",
            Self::Draft => "badge--secondary",
            Self::NotStarted => "badge--destructive",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientDocument {
    pub id: String,
    pub title: String,
    pub status: DocStatus,
    pub updated: Date,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionNote {
    pub date: Date,
    pub note: String,
}

/// One seeker on a coach's roster.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CoachingClient {
    pub seeker_id: String,
    pub name: String,
    pub email: String,
    pub avatar_url: Option<String>,
    pub assigned_date: Date,
    pub last_contact: OffsetDateTime,
    pub next_session: Option<Date>,
    pub total_sessions: u32,
    pub profile_completion: u8,
    pub examples_count: u32,
    pub target_examples_count: u32,
    /// Every readiness criterion met.
    pub meets_criteria: bool,
    pub resume_status: DocStatus,
    pub resumes: Vec<ClientDocument>,
    pub cover_letter_status: DocStatus,
    pub cover_letters: Vec<ClientDocument>,
    pub gaps: Vec<String>,
    pub session_notes: Vec<SessionNote>,
}

/// Coach-side shared workspace.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Workspace {
    pub id: String,
    pub name: String,
    pub description: String,
    pub client_ids: Vec<String>,
    pub document_count: u32,
    pub updated: Date,
}
