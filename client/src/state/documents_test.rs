use super::*;
use crate::data::records::documents;

#[test]
fn type_filter_selects_kind() {
    let docs = documents();
    let filter = DocumentFilter { doc_type: Some(DocumentType::Tailored), ..DocumentFilter::default() };
    assert_eq!(filter.apply(&docs).len(), 2);
    assert_eq!(count_by_type(&docs, DocumentType::Tailored), 2);
    assert_eq!(count_by_type(&docs, DocumentType::Resume), 1);
}

#[test]
fn search_covers_tailored_target() {
    let docs = documents();
    let filter = DocumentFilter { query: "principal software".into(), ..DocumentFilter::default() };
    let found = filter.apply(&docs);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, "3");
}

#[test]
fn untailored_documents_match_on_title_only() {
    let docs = documents();
    let filter = DocumentFilter { query: "general".into(), doc_type: Some(DocumentType::Resume) };
    assert_eq!(filter.apply(&docs).len(), 1);
    let filter = DocumentFilter { query: "general".into(), doc_type: Some(DocumentType::CoverLetter) };
    assert!(filter.apply(&docs).is_empty());
}

#[test]
fn job_match_label_pluralizes() {
    assert_eq!(job_match_label(1), "1 job match");
    assert_eq!(job_match_label(5), "5 job matches");
}
