// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Picking the reply text out of a matched document.
//!
//! The document is cut into sentences on `.`, `!` and `?` (no abbreviation
//! handling: "Dr. Khan" is two sentences). Each sentence is scored by the
//! fraction of query tokens it fuzzily contains, and the best one becomes the
//! snippet. Lengths are in characters, and the result is never longer than
//! `max_length + 3` (for the `"..."` suffix).

use crate::fuzzy::{has_fuzzy_match, FUZZY_MATCH_THRESHOLD};
use crate::text::tokenize;

const ELLIPSIS: &str = "...";

/// Most query-relevant sentence of `content`, truncated to `max_length`.
///
/// Ties keep the earliest sentence. If no sentence contains any query token,
/// falls back to the first `max_length` characters of `content` plus `"..."`.
pub fn extract_snippet<S: AsRef<str>>(content: &str, query_tokens: &[S], max_length: usize) -> String {
    extract_snippet_with_threshold(content, query_tokens, max_length, FUZZY_MATCH_THRESHOLD)
}

/// [`extract_snippet`] with an explicit fuzzy match threshold.
pub fn extract_snippet_with_threshold<S: AsRef<str>>(
    content: &str,
    query_tokens: &[S],
    max_length: usize,
    threshold: f64,
) -> String {
    let mut best_sentence: Option<&str> = None;
    let mut best_fraction = 0.0;

    for sentence in split_sentences(content) {
        let fraction = coverage(sentence, query_tokens, threshold);
        if fraction > best_fraction {
            best_fraction = fraction;
            best_sentence = Some(sentence);
        }
    }

    match best_sentence {
        Some(sentence) => match truncate_chars(sentence, max_length) {
            Some(cut) => format!("{}{}", cut, ELLIPSIS),
            None => sentence.to_string(),
        },
        None => {
            let head = truncate_chars(content, max_length).unwrap_or(content);
            format!("{}{}", head, ELLIPSIS)
        }
    }
}

/// Non-empty, trimmed sentences in order.
pub fn split_sentences(content: &str) -> impl Iterator<Item = &str> {
    content
        .split(['.', '!', '?'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

/// Fraction of query tokens with a fuzzy match among the sentence's tokens.
fn coverage<S: AsRef<str>>(sentence: &str, query_tokens: &[S], threshold: f64) -> f64 {
    if query_tokens.is_empty() {
        return 0.0;
    }
    let sentence_tokens = tokenize(sentence);
    if sentence_tokens.is_empty() {
        return 0.0;
    }

    let matched = query_tokens
        .iter()
        .filter(|token| has_fuzzy_match(token.as_ref(), &sentence_tokens, threshold))
        .count();

    matched as f64 / query_tokens.len() as f64
}

/// First `max_chars` characters of `s`, or `None` if `s` already fits.
fn truncate_chars(s: &str, max_chars: usize) -> Option<&str> {
    s.char_indices().nth(max_chars).map(|(byte_idx, _)| &s[..byte_idx])
}
