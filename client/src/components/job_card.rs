//! Card for one tracked job.

#[cfg(test)]
#[path = "job_card_test.rs"]
mod job_card_test;

use leptos::prelude::*;

use crate::data::types::{Job, JobStatus};
use crate::util::format::{long_date, salary_or_placeholder};

/// Keywords shown before collapsing into "+N more".
const VISIBLE_KEYWORDS: usize = 3;

/// Primary call to action for a job in `status`.
#[must_use]
pub fn action_label(status: JobStatus) -> &'static str {
    match status {
        JobStatus::Saved => "Apply Now",
        JobStatus::Applied => "View Application",
        JobStatus::Interview => "Interview Prep",
        JobStatus::Offer | JobStatus::Rejected => "View Details",
    }
}

#[must_use]
pub fn status_css(status: JobStatus) -> &'static str {
    match status {
        JobStatus::Applied | JobStatus::Offer => "badge--success",
        JobStatus::Interview => "badge--warning",
        JobStatus::Rejected => "badge--destructive",
        JobStatus::Saved => "badge--secondary",
    }
}

/// `(shown, hidden_count)` for the keyword row.
#[must_use]
pub fn split_keywords(keywords: &[String]) -> (&[String], usize) {
    let shown = keywords.len().min(VISIBLE_KEYWORDS);
    (&keywords[..shown], keywords.len() - shown)
}

#[component]
pub fn JobCard(job: Job) -> impl IntoView {
    let (shown, hidden) = split_keywords(&job.keywords);
    let keywords = shown
        .iter()
        .map(|keyword| view! { <span class="badge badge--outline">{keyword.clone()}</span> })
        .collect::<Vec<_>>();
    let more = (hidden > 0).then(|| view! { <span class="badge badge--outline">{format!("+{hidden} more")}</span> });
    let salary = salary_or_placeholder(job.salary.as_deref()).to_owned();
    let applied = job.applied_date.map(|d| format!("Applied {}", long_date(d)));
    let href = job.link.clone().unwrap_or_else(|| "#".to_owned());

    view! {
        <article class="card job-card">
            <header class="job-card__header">
                <div>
                    <h3 class="job-card__title">{job.title.clone()}</h3>
                    <p class="job-card__meta">{job.company.clone()} " · " {job.location.clone()}</p>
                </div>
                <div class="job-card__badges">
                    <span class=format!("badge {}", status_css(job.status))>{job.status.label()}</span>
                    <span class=format!("badge {}", job.fit_score.css())>{job.fit_score.label()}</span>
                </div>
            </header>
            <div class="job-card__details">
                <span>{salary}</span>
                <span>{job.employment_type.clone()}</span>
            </div>
            <p class="job-card__description">{job.description.clone()}</p>
            <div class="job-card__keywords">{keywords} {more}</div>
            <div class="job-card__company">
                <span>{job.company_size.clone().map(|s| format!("{s} employees")).unwrap_or_default()}</span>
                <span>{if job.remote { "Remote" } else { "On-site" }}</span>
            </div>
            <div class="job-card__dates">
                <span>"Updated " {long_date(job.last_updated)}</span>
                {applied.map(|text| view! { <span>{text}</span> })}
            </div>
            <a class="btn job-card__action" href=href target="_blank" rel="noopener">
                {action_label(job.status)}
            </a>
        </article>
    }
}
