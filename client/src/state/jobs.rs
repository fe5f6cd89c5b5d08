//! Job tracker filters and counts.

#[cfg(test)]
#[path = "jobs_test.rs"]
mod jobs_test;

use crate::data::types::{FitScore, Job, JobStatus};

/// Search text plus optional fit and status selections.
///
/// `None` on either selector means "all".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct JobFilter {
    pub query: String,
    pub fit: Option<FitScore>,
    pub status: Option<JobStatus>,
}

impl JobFilter {
    /// Case-insensitive substring match over title, company and location.
    #[must_use]
    pub fn matches(&self, job: &Job) -> bool {
        let needle = self.query.trim().to_lowercase();
        let text_ok = needle.is_empty()
            || [&job.title, &job.company, &job.location]
                .iter()
                .any(|field| field.to_lowercase().contains(&needle));
        text_ok && self.fit.is_none_or(|fit| job.fit_score == fit) && self.status.is_none_or(|s| job.status == s)
    }

    #[must_use]
    pub fn apply<'a>(&self, jobs: &'a [Job]) -> Vec<&'a Job> {
        jobs.iter().filter(|job| self.matches(job)).collect()
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.query.trim().is_empty() || self.fit.is_some() || self.status.is_some()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[must_use]
pub fn count_by_status(jobs: &[Job], status: JobStatus) -> usize {
    jobs.iter().filter(|job| job.status == status).count()
}

#[must_use]
pub fn count_by_fit(jobs: &[Job], fit: FitScore) -> usize {
    jobs.iter().filter(|job| job.fit_score == fit).count()
}
