//! Coach-side sample records: the client roster and shared workspaces.

use time::macros::{date, datetime};

use super::types::{ClientDocument, CoachingClient, DocStatus, SessionNote, Workspace};

fn document(id: &str, title: &str, status: DocStatus, updated: time::Date) -> ClientDocument {
    ClientDocument { id: id.into(), title: title.into(), status, updated }
}

fn note(date: time::Date, note: &str) -> SessionNote {
    SessionNote { date, note: note.into() }
}

/// Every seeker assigned to the demo coach.
#[must_use]
#[allow(clippy::too_many_lines)]
pub fn clients() -> Vec<CoachingClient> {
    vec![
        CoachingClient {
            seeker_id: "1".into(),
            name: "Alex Rivera".into(),
            email: "applicant@demo.com".into(),
            avatar_url: Some("https://api.dicebear.com/7.x/avataaars/svg?seed=Alex".into()),
            assigned_date: date!(2024 - 10 - 01),
            last_contact: datetime!(2024-11-05 10:00 UTC),
            next_session: Some(date!(2024 - 11 - 10)),
            total_sessions: 8,
            profile_completion: 100,
            examples_count: 23,
            target_examples_count: 20,
            meets_criteria: true,
            resume_status: DocStatus::Final,
            resumes: vec![
                document("r1", "General Resume - Software Engineer", DocStatus::Final, date!(2024 - 11 - 05)),
                document("r2", "ScaleTech Resume - Principal Engineer", DocStatus::InReview, date!(2024 - 11 - 02)),
            ],
            cover_letter_status: DocStatus::Final,
            cover_letters: vec![document(
                "c1",
                "TechFlow Cover Letter",
                DocStatus::Final,
                date!(2024 - 11 - 03),
            )],
            gaps: Vec::new(),
            session_notes: vec![
                note(date!(2024 - 11 - 05), "Mock system design interview went well. Ready for onsite loops."),
                note(date!(2024 - 10 - 22), "Reworked STAR stories around the microservices migration."),
            ],
        },
        CoachingClient {
            seeker_id: "3".into(),
            name: "Jamie Kim".into(),
            email: "jamie.kim@demo.com".into(),
            avatar_url: Some("https://api.dicebear.com/7.x/avataaars/svg?seed=Jamie".into()),
            assigned_date: date!(2024 - 09 - 15),
            last_contact: datetime!(2024-11-03 16:30 UTC),
            next_session: Some(date!(2024 - 11 - 12)),
            total_sessions: 6,
            profile_completion: 75,
            examples_count: 12,
            target_examples_count: 20,
            meets_criteria: false,
            resume_status: DocStatus::InReview,
            resumes: vec![document("r3", "Frontend Engineer Resume", DocStatus::InReview, date!(2024 - 11 - 01))],
            cover_letter_status: DocStatus::Draft,
            cover_letters: vec![document("c2", "General Cover Letter", DocStatus::Draft, date!(2024 - 10 - 29))],
            gaps: vec![
                "Needs 8 more STAR examples".into(),
                "Cover letter still in draft".into(),
            ],
            session_notes: vec![note(
                date!(2024 - 11 - 03),
                "Focusing on resume storytelling and interview communication.",
            )],
        },
        CoachingClient {
            seeker_id: "4".into(),
            name: "Morgan Taylor".into(),
            email: "morgan.taylor@demo.com".into(),
            avatar_url: Some("https://api.dicebear.com/7.x/avataaars/svg?seed=Morgan".into()),
            assigned_date: date!(2024 - 08 - 20),
            last_contact: datetime!(2024-11-01 09:15 UTC),
            next_session: Some(date!(2024 - 11 - 08)),
            total_sessions: 10,
            profile_completion: 60,
            examples_count: 7,
            target_examples_count: 20,
            meets_criteria: false,
            resume_status: DocStatus::Draft,
            resumes: vec![document("r4", "Career Change Resume", DocStatus::Draft, date!(2024 - 10 - 30))],
            cover_letter_status: DocStatus::NotStarted,
            cover_letters: Vec::new(),
            gaps: vec![
                "Profile incomplete".into(),
                "Needs 13 more STAR examples".into(),
                "No cover letter yet".into(),
            ],
            session_notes: vec![note(
                date!(2024 - 11 - 01),
                "Career changer moving from finance to tech. Building technical foundation.",
            )],
        },
    ]
}

/// Look up a roster entry by seeker id.
#[must_use]
pub fn find_client(seeker_id: &str) -> Option<CoachingClient> {
    clients().into_iter().find(|client| client.seeker_id == seeker_id)
}

#[must_use]
pub fn workspaces() -> Vec<Workspace> {
    vec![
        Workspace {
            id: "w1".into(),
            name: "Backend Interview Prep".into(),
            description: "System design drills and STAR story reviews.".into(),
            client_ids: vec!["1".into(), "3".into()],
            document_count: 6,
            updated: date!(2024 - 11 - 05),
        },
        Workspace {
            id: "w2".into(),
            name: "Career Transition Track".into(),
            description: "Resume repositioning for career changers.".into(),
            client_ids: vec!["4".into()],
            document_count: 3,
            updated: date!(2024 - 11 - 01),
        },
    ]
}
