//! Shared test utilities and fixtures.

#![allow(dead_code)]

use kbmatch::{Document, FormattedResponse, MatchResult};

// Re-export canonical test utilities from kbmatch::testing
pub use kbmatch::testing::{make_doc, sample_corpus, ABOUT_CONTENT};

/// Id of the matched document, if any.
pub fn matched_id<'a>(result: &Option<MatchResult<'a>>) -> Option<&'a str> {
    result.as_ref().map(|r| r.document.id.as_str())
}

/// Assert a reply points at `doc` and does not escalate.
pub fn assert_answered_by(response: &FormattedResponse, doc: &Document) {
    assert!(
        !response.needs_admin,
        "expected an answer from {:?}, got escalation",
        doc.id
    );
    assert_eq!(response.source_url.as_deref(), Some(doc.url.as_str()));
    assert_eq!(response.source_page.as_deref(), Some(doc.title.as_str()));
}

/// Assert a reply escalates to an admin.
pub fn assert_escalated(response: &FormattedResponse) {
    assert!(response.needs_admin);
    assert!(response.confidence.abs() < f64::EPSILON);
    assert!(response.source_url.is_none());
    assert!(response.source_page.is_none());
}

/// Look a fixture document up by id.
pub fn doc<'a>(docs: &'a [Document], id: &str) -> &'a Document {
    docs.iter()
        .find(|d| d.id == id)
        .unwrap_or_else(|| panic!("fixture has no document {:?}", id))
}
