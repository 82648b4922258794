// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Typo-tolerant keyword overlap.

use crate::fuzzy::best_similarity;

/// Average best-match similarity of query tokens against document tokens.
///
/// Each query token contributes its best similarity against any document
/// token, but only when that similarity is strictly above `threshold`;
/// otherwise it contributes 0. The sum is divided by the number of query
/// tokens, so the result is in `[0, 1]`.
pub fn fuzzy_keyword_score<Q, D>(query_tokens: &[Q], doc_tokens: &[D], threshold: f64) -> f64
where
    Q: AsRef<str>,
    D: AsRef<str>,
{
    if query_tokens.is_empty() {
        return 0.0;
    }

    let total: f64 = query_tokens
        .iter()
        .map(|token| best_similarity(token.as_ref(), doc_tokens))
        .filter(|sim| *sim > threshold)
        .sum();

    total / query_tokens.len() as f64
}
