// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The combined relevance score and the defaults every match call starts from.
//!
//! ```text
//! score = 0.6 · tfidf_cosine + 0.4 · fuzzy_keyword
//! ```
//!
//! Both parts are in `[0, 1]`, so with the default weights the sum is too.
//! With custom weights it is not bounded; either way treat it as a ranking
//! signal, not a probability.

use crate::config::MatcherConfig;
use crate::types::Document;

use super::keyword::fuzzy_keyword_score;
use super::tfidf::{tfidf_cosine, CorpusStats};

// =============================================================================
// DEFAULTS
// =============================================================================

/// Weight of the TF-IDF cosine component.
pub const TFIDF_WEIGHT: f64 = 0.6;

/// Weight of the fuzzy keyword component.
pub const FUZZY_WEIGHT: f64 = 0.4;

/// Minimum combined score for a document to be returned at all.
pub const DEFAULT_THRESHOLD: f64 = 0.4;

/// Snippets longer than this many characters are truncated.
pub const DEFAULT_SNIPPET_MAX_LENGTH: usize = 300;

/// Combined score for one document against precomputed collection stats.
pub fn score_with_stats<Q, D>(
    query_tokens: &[Q],
    doc_tokens: &[D],
    stats: &CorpusStats,
    config: &MatcherConfig,
) -> f64
where
    Q: AsRef<str>,
    D: AsRef<str>,
{
    let tfidf = tfidf_cosine(query_tokens, doc_tokens, stats);
    let fuzzy = fuzzy_keyword_score(query_tokens, doc_tokens, config.fuzzy_threshold);
    config.tfidf_weight * tfidf + config.fuzzy_weight * fuzzy
}

/// Combined score of `doc_tokens` for a query, with IDF taken over
/// `all_documents` and the default weights.
///
/// Builds the collection statistics on every call; when scoring many
/// documents against the same collection use [`score_with_stats`].
pub fn score<Q, D>(query_tokens: &[Q], doc_tokens: &[D], all_documents: &[Document]) -> f64
where
    Q: AsRef<str>,
    D: AsRef<str>,
{
    let stats = CorpusStats::from_documents(all_documents);
    score_with_stats(query_tokens, doc_tokens, &stats, &MatcherConfig::default())
}
