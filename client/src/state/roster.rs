//! Coach roster aggregates.

#[cfg(test)]
#[path = "roster_test.rs"]
mod roster_test;

use crate::data::types::CoachingClient;

/// Headline figures for the coach dashboard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RosterSummary {
    pub client_count: usize,
    /// Clients meeting every readiness criterion.
    pub ready_count: usize,
    pub total_sessions: u32,
    /// Mean profile completion, rounded; zero for an empty roster.
    pub avg_completion: u32,
}

impl RosterSummary {
    #[must_use]
    pub fn from_clients(clients: &[CoachingClient]) -> Self {
        let client_count = clients.len();
        let ready_count = clients.iter().filter(|c| c.meets_criteria).count();
        let total_sessions = clients.iter().map(|c| c.total_sessions).sum();
        let completion_sum: u32 = clients.iter().map(|c| u32::from(c.profile_completion)).sum();
        Self {
            client_count,
            ready_count,
            total_sessions,
            avg_completion: rounded_mean(completion_sum, client_count),
        }
    }
}

/// Integer mean rounded half up.
#[must_use]
pub fn rounded_mean(sum: u32, count: usize) -> u32 {
    let Ok(count) = u64::try_from(count) else {
        return 0;
    };
    if count == 0 {
        return 0;
    }
    let mean = (u64::from(sum) * 2 + count) / (count * 2);
    u32::try_from(mean).unwrap_or(u32::MAX)
}

/// Progress towards the example target, capped at 100.
#[must_use]
pub fn examples_progress(client: &CoachingClient) -> u32 {
    if client.target_examples_count == 0 {
        return 100;
    }
    (client.examples_count * 100 / client.target_examples_count).min(100)
}
