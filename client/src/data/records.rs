//! Seeker-side sample records.

use time::macros::{date, datetime};

use super::types::{
    Activity, ActivityKind, DashboardStats, Document, DocumentType, FitScore, Job, JobStatus, Message, Notification,
    NotificationKind, Speaker,
};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_owned()).collect()
}

#[must_use]
#[allow(clippy::too_many_lines)]
pub fn jobs() -> Vec<Job> {
    vec![
        Job {
            id: "1".into(),
            title: "Senior Backend Engineer".into(),
            company: "TechFlow Inc".into(),
            location: "San Francisco, CA (Remote)".into(),
            salary: Some("$140K - $180K".into()),
            employment_type: "Full-time".into(),
            description: "Design and implement a scalable microservices architecture, optimize database \
                          performance, and mentor junior developers."
                .into(),
            requirements: strings(&[
                "5+ years of backend development experience",
                "Expert knowledge of Node.js, Python, or Go",
                "Experience with microservices architecture",
                "Strong knowledge of databases (PostgreSQL, MongoDB)",
                "Experience with cloud platforms (AWS, GCP, Azure)",
            ]),
            fit_score: FitScore::Green,
            status: JobStatus::Applied,
            applied_date: Some(date!(2024 - 11 - 01)),
            last_updated: date!(2024 - 11 - 05),
            link: Some("https://techflow.com/careers/backend-senior".into()),
            commute_minutes: Some(0),
            company_size: Some("201-500".into()),
            remote: true,
            keywords: strings(&["Node.js", "Microservices", "PostgreSQL", "AWS", "Team Leadership"]),
        },
        Job {
            id: "2".into(),
            title: "Principal Software Engineer".into(),
            company: "ScaleTech".into(),
            location: "Palo Alto, CA".into(),
            salary: Some("$180K - $220K".into()),
            employment_type: "Full-time".into(),
            description: "Architect next-generation distributed systems and lead major technical initiatives \
                          with product and design."
                .into(),
            requirements: strings(&[
                "8+ years of software engineering experience",
                "Expert in distributed systems design",
                "Experience leading large-scale projects",
                "Experience with high-traffic applications",
            ]),
            fit_score: FitScore::Green,
            status: JobStatus::Saved,
            applied_date: None,
            last_updated: date!(2024 - 11 - 04),
            link: Some("https://scaletech.com/careers/principal-engineer".into()),
            commute_minutes: Some(45),
            company_size: Some("1000+".into()),
            remote: false,
            keywords: strings(&["Distributed Systems", "System Design", "Leadership", "Scalability", "Architecture"]),
        },
        Job {
            id: "3".into(),
            title: "Backend Developer".into(),
            company: "StartupXYZ".into(),
            location: "San Francisco, CA (Hybrid)".into(),
            salary: Some("$120K - $150K".into()),
            employment_type: "Full-time".into(),
            description: "Build the backend infrastructure for an AI-powered platform.".into(),
            requirements: strings(&[
                "3+ years of backend development",
                "Experience with Python or Node.js",
                "Experience with Docker and Kubernetes",
                "Understanding of CI/CD pipelines",
            ]),
            fit_score: FitScore::Orange,
            status: JobStatus::Interview,
            applied_date: Some(date!(2024 - 10 - 28)),
            last_updated: date!(2024 - 11 - 02),
            link: Some("https://startupxyz.com/jobs/backend-dev".into()),
            commute_minutes: Some(30),
            company_size: Some("51-200".into()),
            remote: false,
            keywords: strings(&["Python", "Node.js", "Docker", "Kubernetes", "AI/ML"]),
        },
        Job {
            id: "4".into(),
            title: "Senior Software Engineer".into(),
            company: "MegaCorp".into(),
            location: "New York, NY".into(),
            salary: Some("$130K - $160K".into()),
            employment_type: "Full-time".into(),
            description: "Modernize an enterprise technology stack and build next-generation applications.".into(),
            requirements: strings(&[
                "5+ years of Java or .NET development",
                "Experience with enterprise systems",
                "Experience with agile development",
            ]),
            fit_score: FitScore::Red,
            status: JobStatus::Rejected,
            applied_date: Some(date!(2024 - 10 - 15)),
            last_updated: date!(2024 - 10 - 20),
            link: Some("https://megacorp.com/careers/senior-engineer".into()),
            commute_minutes: Some(0),
            company_size: Some("10000+".into()),
            remote: true,
            keywords: strings(&["Java", "Enterprise", "Agile", "Database Design"]),
        },
        Job {
            id: "5".into(),
            title: "Lead Backend Engineer".into(),
            company: "InnovateCo".into(),
            location: "Seattle, WA".into(),
            salary: Some("$160K - $200K".into()),
            employment_type: "Full-time".into(),
            description: "Lead a team of backend engineers building scalable APIs and own the backend \
                          technical vision."
                .into(),
            requirements: strings(&[
                "6+ years of backend experience",
                "Team leadership experience",
                "Strong communication and mentoring skills",
            ]),
            fit_score: FitScore::Green,
            status: JobStatus::Offer,
            applied_date: Some(date!(2024 - 10 - 20)),
            last_updated: date!(2024 - 11 - 03),
            link: Some("https://innovate.co/careers/lead-backend".into()),
            commute_minutes: Some(0),
            company_size: Some("201-500".into()),
            remote: true,
            keywords: strings(&["Leadership", "System Architecture", "Mentoring", "API Design", "Team Building"]),
        },
    ]
}

#[must_use]
pub fn documents() -> Vec<Document> {
    let doc = |id: &str, title: &str, doc_type, status: &str, modified, version: &str, tailored: Option<&str>, ai_score, fit_jobs| Document {
        id: id.into(),
        title: title.into(),
        doc_type,
        status: status.into(),
        last_modified: modified,
        version: version.into(),
        tailored_for: tailored.map(str::to_owned),
        ai_score,
        fit_jobs,
    };
    vec![
        doc("1", "General Resume - Software Engineer", DocumentType::Resume, "current", date!(2024 - 11 - 05), "3.2", None, 92, 5),
        doc(
            "2",
            "TechFlow Cover Letter",
            DocumentType::CoverLetter,
            "generated",
            date!(2024 - 11 - 03),
            "1.1",
            Some("TechFlow Inc - Senior Backend Engineer"),
            95,
            1,
        ),
        doc(
            "3",
            "ScaleTech Resume - Principal Engineer",
            DocumentType::Tailored,
            "current",
            date!(2024 - 11 - 02),
            "2.0",
            Some("ScaleTech - Principal Software Engineer"),
            88,
            1,
        ),
        doc(
            "4",
            "StartupXYZ Resume - Backend Dev",
            DocumentType::Tailored,
            "generated",
            date!(2024 - 11 - 01),
            "1.3",
            Some("StartupXYZ - Backend Developer"),
            85,
            1,
        ),
    ]
}

/// Opening turns of the seeker's coaching conversation.
#[must_use]
pub fn conversation() -> Vec<Message> {
    vec![
        Message {
            id: "1".into(),
            speaker: Speaker::Assistant,
            content: "Hi! I'm your AI career coach. I'm here to help you capture your work accomplishments in \
                      STAR format. Let's start with something you're proud of from your recent work experience."
                .into(),
            timestamp: datetime!(2024-11-07 09:00 UTC),
        },
        Message {
            id: "2".into(),
            speaker: Speaker::User,
            content: "I recently led a project to migrate our e-commerce platform from a monolithic architecture \
                      to microservices. It took about 6 months."
                .into(),
            timestamp: datetime!(2024-11-07 09:01:30 UTC),
        },
        Message {
            id: "3".into(),
            speaker: Speaker::Assistant,
            content: "That sounds like an impressive project! What was the driving force behind this migration? \
                      What problems were you trying to solve?"
                .into(),
            timestamp: datetime!(2024-11-07 09:02:15 UTC),
        },
        Message {
            id: "4".into(),
            speaker: Speaker::User,
            content: "We were experiencing major scalability issues. Deployment was taking hours and users saw \
                      slow load times during peak hours."
                .into(),
            timestamp: datetime!(2024-11-07 09:03:45 UTC),
        },
    ]
}

#[must_use]
pub fn dashboard_stats() -> DashboardStats {
    DashboardStats {
        level: 12,
        current_streak: 7,
        total_points: 2840,
        examples_created: 23,
        jobs_applied: 8,
        interviews_scheduled: 3,
        profile_completion: 85,
    }
}

#[must_use]
pub fn notifications() -> Vec<Notification> {
    vec![
        Notification {
            id: "1".into(),
            title: "New Job Match Found!".into(),
            message: "We found 3 new jobs that match your profile perfectly.".into(),
            kind: NotificationKind::Success,
            read: false,
            created_at: datetime!(2024-11-07 08:30 UTC),
            action_url: Some("/jobs".into()),
        },
        Notification {
            id: "2".into(),
            title: "Interview Reminder".into(),
            message: "You have an interview with TechFlow Inc tomorrow at 2:00 PM. Good luck!".into(),
            kind: NotificationKind::Info,
            read: false,
            created_at: datetime!(2024-11-06 15:20 UTC),
            action_url: Some("/jobs".into()),
        },
        Notification {
            id: "3".into(),
            title: "Document Generated".into(),
            message: "Your tailored cover letter for ScaleTech is ready for review.".into(),
            kind: NotificationKind::Success,
            read: true,
            created_at: datetime!(2024-11-06 10:15 UTC),
            action_url: Some("/documents".into()),
        },
    ]
}

#[must_use]
pub fn activity() -> Vec<Activity> {
    let entry = |id: &str, kind, title: &str, description: &str, timestamp| Activity {
        id: id.into(),
        kind,
        title: title.into(),
        description: description.into(),
        timestamp,
        user_id: "1".into(),
    };
    vec![
        entry(
            "1",
            ActivityKind::ExampleCreated,
            "New Example Created",
            "Added \"Led Migration to Microservices Architecture\" to your story bank",
            datetime!(2024-11-06 14:30 UTC),
        ),
        entry(
            "2",
            ActivityKind::JobApplied,
            "Job Application Submitted",
            "Applied to Senior Backend Engineer at TechFlow Inc",
            datetime!(2024-11-01 11:15 UTC),
        ),
        entry(
            "3",
            ActivityKind::DocumentGenerated,
            "Cover Letter Generated",
            "AI generated tailored cover letter for ScaleTech position",
            datetime!(2024-10-30 16:45 UTC),
        ),
        entry(
            "4",
            ActivityKind::SessionScheduled,
            "Coaching Session Scheduled",
            "Next session with Sarah Chen scheduled for November 10th",
            datetime!(2024-10-28 09:20 UTC),
        ),
    ]
}
