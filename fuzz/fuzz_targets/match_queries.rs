// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for query handling.
//!
//! Throws arbitrary queries and arbitrary document text at the matcher to
//! verify it never panics and never hands back a reply that breaks the
//! threshold or snippet-length guarantees.

#![no_main]

use arbitrary::Arbitrary;
use kbmatch::testing::{make_doc, sample_corpus};
use kbmatch::{answer, extract_snippet, find_best_match, tokenize, DEFAULT_THRESHOLD};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct QueryInput {
    query: String,
    extra_pages: Vec<String>,
    max_length: u16,
}

fuzz_target!(|input: QueryInput| {
    // Cap sizes to avoid timeouts
    let query: String = input.query.chars().take(200).collect();
    let mut docs = sample_corpus();
    for (i, page) in input.extra_pages.iter().take(8).enumerate() {
        let content: String = page.chars().take(500).collect();
        docs.push(make_doc(&format!("fuzz-{}", i), "Fuzz", &content));
    }

    // A match always meets the threshold and comes from a tokenized page
    if let Some(result) = find_best_match(&query, &docs, DEFAULT_THRESHOLD) {
        assert!(result.score >= DEFAULT_THRESHOLD);
        assert!(result.score.is_finite());
        assert!(!result.document.tokens.is_empty());
    }

    // Escalation and confidence agree
    let response = answer(&query, &docs);
    assert_eq!(response.needs_admin, response.source_url.is_none());

    // Snippets respect the length bound for any content
    let max_length = usize::from(input.max_length % 400) + 1;
    for doc in &docs {
        let snippet = extract_snippet(&doc.content, &tokenize(&query), max_length);
        assert!(snippet.chars().count() <= max_length + 3);
    }
});
