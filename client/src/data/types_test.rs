use super::*;

#[test]
fn fit_score_labels_match_filter_buttons() {
    assert_eq!(FitScore::Green.label(), "Great Fit");
    assert_eq!(FitScore::Orange.label(), "Good Fit");
    assert_eq!(FitScore::Red.label(), "May Not Fit");
}

#[test]
fn doc_status_badges() {
    assert_eq!(DocStatus::Final.badge(), "Complete");
    assert_eq!(DocStatus::InReview.badge(), "In Progress");
    assert_eq!(DocStatus::Draft.badge(), "Draft");
    assert_eq!(DocStatus::NotStarted.badge(), "Not Started");
}

#[test]
fn job_status_all_is_exhaustive() {
    assert_eq!(JobStatus::ALL.len(), 5);
    for status in JobStatus::ALL {
        assert!(!status.label().is_empty());
    }
}

#[test]
fn job_status_keys_parse_back() {
    for status in JobStatus::ALL {
        assert_eq!(JobStatus::from_key(status.key()), Some(status));
    }
    assert_eq!(JobStatus::from_key("all"), None);
}
