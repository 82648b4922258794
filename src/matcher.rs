// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Best-match selection: the entry point of a match call.
//!
//! ```text
//! query ──▶ expand_query ──▶ score every document ──▶ strict-max scan ──▶ snippet
//!                               (CorpusStats once)
//! ```
//!
//! # Tie-break
//!
//! A document replaces the current best only when its score is strictly
//! greater, so among equal scores the first document in collection order
//! wins. There is no secondary key; callers that care should order the
//! collection accordingly.
//!
//! # Parallelism
//!
//! With the `parallel` feature, large collections are scored on the rayon
//! pool. Scores are collected in collection order and the scan is always
//! sequential, so the result is identical to the single-threaded path.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{debug, trace};

use crate::config::MatcherConfig;
use crate::expand::expand_query;
use crate::response::{format_response, FormattedResponse};
use crate::scoring::{score_with_stats, CorpusStats};
use crate::snippet::extract_snippet_with_threshold;
use crate::types::{Document, MatchResult};

/// Below this many documents the rayon overhead isn't worth it.
#[cfg(feature = "parallel")]
const PARALLEL_MIN_DOCS: usize = 256;

/// A configured matcher. Cheap to clone, holds no per-call state, and may be
/// shared across threads.
#[derive(Debug, Clone, Default)]
pub struct Matcher {
    config: MatcherConfig,
}

impl Matcher {
    pub fn new(config: MatcherConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }

    /// Best document for `query`, or `None` if nothing reaches the threshold.
    ///
    /// Also `None` for a query with no content tokens or an empty collection.
    /// Documents with no tokens are skipped but still count towards IDF.
    pub fn find_best_match<'a>(
        &self,
        query: &str,
        documents: &'a [Document],
    ) -> Option<MatchResult<'a>> {
        let query_tokens = expand_query(query);
        if query_tokens.is_empty() || documents.is_empty() {
            debug!(
                query_tokens = query_tokens.len(),
                documents = documents.len(),
                "nothing to match"
            );
            return None;
        }

        let stats = CorpusStats::from_documents(documents);
        let scores = self.score_all(&query_tokens, documents, &stats);

        let mut best: Option<usize> = None;
        let mut best_score = 0.0;
        let mut skipped = 0usize;

        for (idx, score) in scores.into_iter().enumerate() {
            let Some(score) = score else {
                skipped += 1;
                continue;
            };
            trace!(doc = %documents[idx].id, score, "scored document");
            if score > best_score && score >= self.config.threshold {
                best_score = score;
                best = Some(idx);
            }
        }

        debug!(
            query_tokens = query_tokens.len(),
            documents = documents.len(),
            skipped,
            best_score,
            matched = best.is_some(),
            "match call finished"
        );

        let document = &documents[best?];
        let snippet = extract_snippet_with_threshold(
            &document.content,
            &query_tokens,
            self.config.snippet_max_length,
            self.config.fuzzy_threshold,
        );

        Some(MatchResult {
            document,
            score: best_score,
            snippet,
        })
    }

    /// Find the best match and format it as a reply.
    pub fn answer(&self, query: &str, documents: &[Document]) -> FormattedResponse {
        format_response(self.find_best_match(query, documents).as_ref())
    }

    /// Score every document, `None` for documents without tokens.
    fn score_all(
        &self,
        query_tokens: &[String],
        documents: &[Document],
        stats: &CorpusStats,
    ) -> Vec<Option<f64>> {
        let score_one = |doc: &Document| -> Option<f64> {
            if doc.tokens.is_empty() {
                return None;
            }
            Some(score_with_stats(query_tokens, &doc.tokens, stats, &self.config))
        };

        #[cfg(feature = "parallel")]
        {
            if documents.len() >= PARALLEL_MIN_DOCS {
                return documents.par_iter().map(score_one).collect();
            }
        }

        documents.iter().map(score_one).collect()
    }
}

/// Best document for `query` with the default config and an explicit
/// threshold.
pub fn find_best_match<'a>(
    query: &str,
    documents: &'a [Document],
    threshold: f64,
) -> Option<MatchResult<'a>> {
    Matcher::new(MatcherConfig {
        threshold,
        ..MatcherConfig::default()
    })
    .find_best_match(query, documents)
}

/// Match `query` with the default config and format the reply.
pub fn answer(query: &str, documents: &[Document]) -> FormattedResponse {
    Matcher::default().answer(query, documents)
}
