//! Ranking: title self-match, tie-breaks and the threshold boundary.

use super::common::{make_doc, matched_id, sample_corpus};
use kbmatch::{
    expand_query, find_best_match, score, Document, Matcher, MatcherConfig, DEFAULT_THRESHOLD,
};

// ============================================================================
// SELF-MATCH
// ============================================================================

#[test]
fn test_every_title_finds_its_page() {
    let docs = sample_corpus();
    for doc in &docs {
        let result = find_best_match(&doc.title, &docs, DEFAULT_THRESHOLD);
        assert_eq!(
            matched_id(&result),
            Some(doc.id.as_str()),
            "title {:?} matched the wrong page",
            doc.title
        );
    }
}

#[test]
fn test_exact_content_sentence_finds_its_page() {
    let docs = sample_corpus();
    let result = find_best_match(
        "Donations keep every program running",
        &docs,
        DEFAULT_THRESHOLD,
    );
    assert_eq!(matched_id(&result), Some("donate"));
}

// ============================================================================
// TIE-BREAK
// ============================================================================

#[test]
fn test_identical_documents_first_wins() {
    let docs = vec![
        make_doc("plantation-1", "Tree Plantation", "Tree plantation drive in Malir."),
        make_doc("plantation-2", "Tree Plantation", "Tree plantation drive in Malir."),
        make_doc("books", "Books", "Book collection for schools."),
        make_doc("iftar", "Iftar", "Iftar meals distribution."),
    ];
    let result = find_best_match("tree plantation", &docs, DEFAULT_THRESHOLD).unwrap();
    assert_eq!(result.document.id, "plantation-1");
}

#[test]
fn test_large_collection_keeps_first_wins() {
    // Large enough to take the parallel scoring path when it is enabled.
    let mut docs: Vec<Document> = (0..400)
        .map(|i| {
            make_doc(
                &format!("filler-{}", i),
                "Filler",
                &format!("Unrelated page number {} about gardening tips.", i),
            )
        })
        .collect();
    docs.insert(150, make_doc("target-a", "Blood Camp", "Blood donation camp at the hospital."));
    docs.insert(300, make_doc("target-b", "Blood Camp", "Blood donation camp at the hospital."));

    let result = find_best_match("blood donation camp", &docs, DEFAULT_THRESHOLD).unwrap();
    assert_eq!(result.document.id, "target-a");
}

// ============================================================================
// THRESHOLD
// ============================================================================

#[test]
fn test_threshold_is_inclusive() {
    let docs = sample_corpus();
    let query = "volunter registration";
    let exact = score(&expand_query(query), &docs[1].tokens, &docs);

    let at = find_best_match(query, &docs, exact).unwrap();
    assert_eq!(at.document.id, "volunteer");
    assert_eq!(at.score, exact);

    assert!(find_best_match(query, &docs, exact + 1e-9).is_none());
}

#[test]
fn test_returned_score_meets_threshold() {
    let docs = sample_corpus();
    for threshold in [0.0, 0.2, 0.4, 0.6, 0.8] {
        for query in ["volunteer", "donate online", "food drive", "karachi office"] {
            if let Some(result) = find_best_match(query, &docs, threshold) {
                assert!(result.score >= threshold);
            }
        }
    }
}

#[test]
fn test_zero_threshold_still_needs_positive_score() {
    let docs = sample_corpus();
    assert!(find_best_match("zzzzqqqq", &docs, 0.0).is_none());
}

#[test]
fn test_matcher_config_threshold() {
    let docs = sample_corpus();
    let strict = Matcher::new(MatcherConfig {
        threshold: 0.99,
        ..MatcherConfig::default()
    });
    assert!(strict.find_best_match("volunteer", &docs).is_none());

    let lenient = Matcher::new(MatcherConfig {
        threshold: 0.1,
        ..MatcherConfig::default()
    });
    assert!(lenient.find_best_match("volunteer", &docs).is_some());
}
