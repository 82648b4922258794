// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Edit distance and the similarity ratio built on it.
//!
//! All lengths are character counts, not byte lengths, so "café" is four
//! characters long and one substitution away from "cafe".
//!
//! `best_similarity` uses the usual lower bound: `|len(a) - len(b)|` edits are
//! unavoidable, so a candidate whose length alone caps its similarity below the
//! best seen so far is skipped without running the O(nm) DP.

/// Similarity must be strictly greater than this to count as a fuzzy match.
pub const FUZZY_MATCH_THRESHOLD: f64 = 0.75;

/// Classic Levenshtein distance (insert, delete, substitute all cost 1).
///
/// Two-row DP, O(len(a) * len(b)) time, O(len(b)) space.
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let b_chars: Vec<char> = b.chars().collect();
    let b_len = b_chars.len();

    if a.is_empty() {
        return b_len;
    }
    if b_len == 0 {
        return a.chars().count();
    }

    let mut dp: Vec<usize> = (0..=b_len).collect();
    for (i, ac) in a.chars().enumerate() {
        let mut prev = dp[0];
        dp[0] = i + 1;

        for (j, bc) in b_chars.iter().enumerate() {
            let temp = dp[j + 1];
            let cost = usize::from(ac != *bc);
            dp[j + 1] = (dp[j + 1] + 1).min(dp[j] + 1).min(prev + cost);
            prev = temp;
        }
    }

    dp[b_len]
}

/// `1 - distance / max(len(a), len(b))`, in `[0, 1]`.
///
/// Two empty strings are identical, so they score 1.0 rather than dividing
/// by zero.
pub fn similarity(a: &str, b: &str) -> f64 {
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 1.0;
    }
    1.0 - levenshtein_distance(a, b) as f64 / max_len as f64
}

/// Highest similarity between `token` and any of `candidates`, 0.0 if there
/// are none.
pub fn best_similarity<S: AsRef<str>>(token: &str, candidates: &[S]) -> f64 {
    let token_len = token.chars().count();
    let mut best = 0.0_f64;

    for candidate in candidates {
        let candidate = candidate.as_ref();
        let candidate_len = candidate.chars().count();
        let max_len = token_len.max(candidate_len);
        if max_len == 0 {
            return 1.0;
        }

        // Upper bound from the length difference alone
        let ceiling = 1.0 - token_len.abs_diff(candidate_len) as f64 / max_len as f64;
        if ceiling <= best {
            continue;
        }

        let sim = similarity(token, candidate);
        if sim > best {
            best = sim;
            if best >= 1.0 {
                break;
            }
        }
    }

    best
}

/// Does `token` fuzzily match at least one of `candidates`?
pub fn has_fuzzy_match<S: AsRef<str>>(token: &str, candidates: &[S], threshold: f64) -> bool {
    best_similarity(token, candidates) > threshold
}
