use super::*;
use crate::data::records::jobs;

#[test]
fn empty_filter_keeps_everything() {
    let all = jobs();
    let filter = JobFilter::default();
    assert!(!filter.is_active());
    assert_eq!(filter.apply(&all).len(), all.len());
}

#[test]
fn query_matches_title_company_and_location_ignoring_case() {
    let all = jobs();
    let by_company = JobFilter { query: "scaletech".into(), ..JobFilter::default() };
    assert_eq!(by_company.apply(&all).len(), 1);

    let by_location = JobFilter { query: "SEATTLE".into(), ..JobFilter::default() };
    assert_eq!(by_location.apply(&all)[0].company, "InnovateCo");

    let by_title = JobFilter { query: "backend".into(), ..JobFilter::default() };
    assert_eq!(by_title.apply(&all).len(), 3);
}

#[test]
fn fit_and_status_combine() {
    let all = jobs();
    let filter = JobFilter { query: String::new(), fit: Some(FitScore::Green), status: Some(JobStatus::Offer) };
    let found = filter.apply(&all);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, "5");
}

#[test]
fn no_match_yields_empty() {
    let all = jobs();
    let filter = JobFilter { query: "zzz".into(), ..JobFilter::default() };
    assert!(filter.apply(&all).is_empty());
}

#[test]
fn clear_resets_all_selectors() {
    let mut filter = JobFilter { query: "x".into(), fit: Some(FitScore::Red), status: Some(JobStatus::Saved) };
    assert!(filter.is_active());
    filter.clear();
    assert_eq!(filter, JobFilter::default());
}

#[test]
fn counts_partition_the_list() {
    let all = jobs();
    let by_status: usize = JobStatus::ALL.iter().map(|s| count_by_status(&all, *s)).sum();
    let by_fit: usize = FitScore::ALL.iter().map(|f| count_by_fit(&all, *f)).sum();
    assert_eq!(by_status, all.len());
    assert_eq!(by_fit, all.len());
    assert_eq!(count_by_fit(&all, FitScore::Green), 3);
    assert_eq!(count_by_status(&all, JobStatus::Interview), 1);
}
