// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! TF-IDF weighted cosine similarity.
//!
//! ```text
//! tf(t, tokens)  = count(t in tokens) / len(tokens)
//! idf(t)         = ln(N / (1 + df(t)))
//! w(t)           = tf * idf
//! cosine(q, d)   = Σ wq·wd / (‖wq‖ · ‖wd‖)
//! ```
//!
//! `N` is the size of the whole collection and `df(t)` the number of documents
//! whose token list contains `t`. In tiny collections `idf` goes to zero or
//! below (a term in every one of two documents gets `ln(2/3)`); both sides of
//! a product share the same `idf`, so every term's contribution to the dot
//! product stays non-negative and the cosine stays in `[0, 1]`.
//!
//! Terms are visited in first-occurrence order (query first, then document),
//! never in hash order, so the floating-point sum is identical on every run.

use std::collections::{HashMap, HashSet};

use crate::types::Document;

/// Collection-wide statistics for IDF: document count and per-term document
/// frequency. Built once per match call and shared by every document score.
#[derive(Debug, Clone, Default)]
pub struct CorpusStats {
    total_docs: usize,
    doc_freq: HashMap<String, usize>,
}

impl CorpusStats {
    pub fn from_documents(documents: &[Document]) -> Self {
        let mut doc_freq: HashMap<String, usize> = HashMap::new();
        for doc in documents {
            let unique: HashSet<&str> = doc.tokens.iter().map(String::as_str).collect();
            for term in unique {
                *doc_freq.entry(term.to_string()).or_insert(0) += 1;
            }
        }
        Self {
            total_docs: documents.len(),
            doc_freq,
        }
    }

    pub fn total_docs(&self) -> usize {
        self.total_docs
    }

    /// Number of documents containing `term`.
    pub fn doc_freq(&self, term: &str) -> usize {
        self.doc_freq.get(term).copied().unwrap_or(0)
    }

    /// `ln(N / (1 + df))`; zero for an empty collection.
    pub fn idf(&self, term: &str) -> f64 {
        if self.total_docs == 0 {
            return 0.0;
        }
        (self.total_docs as f64 / (1 + self.doc_freq(term)) as f64).ln()
    }
}

fn term_counts<S: AsRef<str>>(tokens: &[S]) -> HashMap<&str, usize> {
    let mut counts = HashMap::with_capacity(tokens.len());
    for token in tokens {
        *counts.entry(token.as_ref()).or_insert(0) += 1;
    }
    counts
}

/// Cosine similarity of TF-IDF weighted query and document vectors.
///
/// Returns 0.0 when either vector has zero magnitude: empty token lists, or
/// every shared term having zero IDF.
pub fn tfidf_cosine<Q, D>(query_tokens: &[Q], doc_tokens: &[D], stats: &CorpusStats) -> f64
where
    Q: AsRef<str>,
    D: AsRef<str>,
{
    if query_tokens.is_empty() || doc_tokens.is_empty() {
        return 0.0;
    }

    let query_counts = term_counts(query_tokens);
    let doc_counts = term_counts(doc_tokens);
    let query_len = query_tokens.len() as f64;
    let doc_len = doc_tokens.len() as f64;

    let mut seen: HashSet<&str> = HashSet::with_capacity(query_counts.len() + doc_counts.len());
    let union = query_tokens
        .iter()
        .map(|t| t.as_ref())
        .chain(doc_tokens.iter().map(|t| t.as_ref()))
        .filter(|term| seen.insert(*term));

    let mut dot = 0.0;
    let mut query_mag = 0.0;
    let mut doc_mag = 0.0;

    for term in union {
        let idf = stats.idf(term);
        let query_tf = query_counts.get(term).copied().unwrap_or(0) as f64 / query_len;
        let doc_tf = doc_counts.get(term).copied().unwrap_or(0) as f64 / doc_len;
        let query_weight = query_tf * idf;
        let doc_weight = doc_tf * idf;

        dot += query_weight * doc_weight;
        query_mag += query_weight * query_weight;
        doc_mag += doc_weight * doc_weight;
    }

    if query_mag == 0.0 || doc_mag == 0.0 {
        return 0.0;
    }

    dot / (query_mag.sqrt() * doc_mag.sqrt())
}
