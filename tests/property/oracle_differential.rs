//! Differential testing: compare the edit-distance code against oracles.
//!
//! `strsim` is the reference Levenshtein. A naive full-matrix version written
//! here is the second opinion, and the similarity and fuzzy-match helpers are
//! checked against their one-line definitions.

use kbmatch::fuzzy::{best_similarity, has_fuzzy_match};
use kbmatch::{levenshtein_distance, similarity, FUZZY_MATCH_THRESHOLD};
use proptest::prelude::*;

/// Full (m+1)x(n+1) matrix Levenshtein over chars.
fn oracle_levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let mut dp = vec![vec![0usize; b.len() + 1]; a.len() + 1];
    for (i, row) in dp.iter_mut().enumerate() {
        row[0] = i;
    }
    for j in 0..=b.len() {
        dp[0][j] = j;
    }
    for i in 1..=a.len() {
        for j in 1..=b.len() {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            dp[i][j] = (dp[i - 1][j] + 1)
                .min(dp[i][j - 1] + 1)
                .min(dp[i - 1][j - 1] + cost);
        }
    }
    dp[a.len()][b.len()]
}

fn oracle_similarity(a: &str, b: &str) -> f64 {
    let max = a.chars().count().max(b.chars().count());
    if max == 0 {
        return 1.0;
    }
    1.0 - oracle_levenshtein(a, b) as f64 / max as f64
}

fn short_word() -> impl Strategy<Value = String> {
    "[a-eé]{0,12}"
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    #[test]
    fn diff_levenshtein_vs_strsim(a in short_word(), b in short_word()) {
        prop_assert_eq!(levenshtein_distance(&a, &b), strsim::levenshtein(&a, &b));
    }

    #[test]
    fn diff_levenshtein_vs_matrix(a in "\\PC{0,10}", b in "\\PC{0,10}") {
        prop_assert_eq!(levenshtein_distance(&a, &b), oracle_levenshtein(&a, &b));
    }

    #[test]
    fn diff_similarity(a in short_word(), b in short_word()) {
        let s = similarity(&a, &b);
        prop_assert!((s - oracle_similarity(&a, &b)).abs() < 1e-12);
        prop_assert!((0.0..=1.0).contains(&s));
        prop_assert!((s - similarity(&b, &a)).abs() < 1e-12);
    }

    /// Pruned best-similarity equals the brute-force maximum.
    #[test]
    fn diff_best_similarity(
        token in short_word(),
        candidates in prop::collection::vec(short_word(), 0..8),
    ) {
        let expected = candidates
            .iter()
            .map(|c| oracle_similarity(&token, c))
            .fold(0.0f64, f64::max);
        prop_assert!((best_similarity(&token, &candidates) - expected).abs() < 1e-12);
    }

    #[test]
    fn diff_has_fuzzy_match(
        token in short_word(),
        candidates in prop::collection::vec(short_word(), 0..8),
    ) {
        let expected = candidates
            .iter()
            .any(|c| oracle_similarity(&token, c) > FUZZY_MATCH_THRESHOLD);
        prop_assert_eq!(has_fuzzy_match(&token, &candidates, FUZZY_MATCH_THRESHOLD), expected);
    }
}

#[test]
fn test_known_distances() {
    assert_eq!(levenshtein_distance("volunter", "volunteer"), 1);
    assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
    assert_eq!(levenshtein_distance("", "abc"), 3);
    assert!(similarity("volunter", "volunteer") > FUZZY_MATCH_THRESHOLD);
    assert!(similarity("donate", "gardening") < FUZZY_MATCH_THRESHOLD);
}
