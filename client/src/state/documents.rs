//! Document library filter.

#[cfg(test)]
#[path = "documents_test.rs"]
mod documents_test;

use crate::data::types::{Document, DocumentType};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DocumentFilter {
    pub query: String,
    pub doc_type: Option<DocumentType>,
}

impl DocumentFilter {
    /// Case-insensitive match over the title and the "tailored for" target.
    #[must_use]
    pub fn matches(&self, doc: &Document) -> bool {
        let needle = self.query.trim().to_lowercase();
        let text_ok = needle.is_empty()
            || doc.title.to_lowercase().contains(&needle)
            || doc.tailored_for.as_deref().is_some_and(|t| t.to_lowercase().contains(&needle));
        text_ok && self.doc_type.is_none_or(|kind| doc.doc_type == kind)
    }

    #[must_use]
    pub fn apply<'a>(&self, docs: &'a [Document]) -> Vec<&'a Document> {
        docs.iter().filter(|doc| self.matches(doc)).collect()
    }
}

#[must_use]
pub fn count_by_type(docs: &[Document], doc_type: DocumentType) -> usize {
    docs.iter().filter(|doc| doc.doc_type == doc_type).count()
}

/// "1 job match" / "3 job matches".
#[must_use]
pub fn job_match_label(count: u32) -> String {
    if count == 1 { "1 job match".to_owned() } else { format!("{count} job matches") }
}
