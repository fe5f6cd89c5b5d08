use super::*;
use crate::data::roster::{clients, find_client};

#[test]
fn demo_roster_summary() {
    let summary = RosterSummary::from_clients(&clients());
    assert_eq!(summary.client_count, 3);
    assert_eq!(summary.ready_count, 1);
    assert_eq!(summary.total_sessions, 24);
    // (100 + 75 + 60) / 3 = 78.33
    assert_eq!(summary.avg_completion, 78);
}

#[test]
fn empty_roster_summary_is_zero() {
    assert_eq!(RosterSummary::from_clients(&[]), RosterSummary::default());
}

#[test]
fn rounded_mean_rounds_half_up() {
    assert_eq!(rounded_mean(5, 2), 3);
    assert_eq!(rounded_mean(4, 3), 1);
    assert_eq!(rounded_mean(0, 0), 0);
}

#[test]
fn rounded_mean_handles_large_sums() {
    assert_eq!(rounded_mean(u32::MAX, 1), u32::MAX);
    assert_eq!(rounded_mean(u32::MAX, 2), u32::MAX / 2 + 1);
}

#[test]
fn examples_progress_caps_at_full() {
    let alex = find_client("1").unwrap();
    assert_eq!(examples_progress(&alex), 100);
    let morgan = find_client("4").unwrap();
    assert_eq!(examples_progress(&morgan), 35);
}

#[test]
fn unknown_seeker_is_not_on_roster() {
    assert!(find_client("999").is_none());
}
