// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for edit distance and fuzzy token matching.
//!
//! Checks the metric properties of the distance and that similarity stays in
//! [0, 1]. A distance that lies makes every typo-tolerant match wrong.

#![no_main]

use arbitrary::Arbitrary;
use kbmatch::fuzzy::{best_similarity, has_fuzzy_match};
use kbmatch::{levenshtein_distance, similarity, FUZZY_MATCH_THRESHOLD};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct MatchInput {
    a: String,
    b: String,
    c: String,
}

fn cap(s: &str, chars: usize) -> String {
    s.chars().take(chars).collect()
}

fuzz_target!(|input: MatchInput| {
    // Cap lengths to avoid timeouts
    let a = cap(&input.a, 64);
    let b = cap(&input.b, 64);
    let c = cap(&input.c, 64);

    let ab = levenshtein_distance(&a, &b);
    let len_a = a.chars().count();
    let len_b = b.chars().count();

    // Identity and symmetry
    assert_eq!(levenshtein_distance(&a, &a), 0);
    assert_eq!(ab, levenshtein_distance(&b, &a), "a={:?} b={:?}", a, b);

    // Bounds: at least the length difference, at most the longer length
    assert!(ab >= len_a.abs_diff(len_b));
    assert!(ab <= len_a.max(len_b));

    // Triangle inequality
    let bc = levenshtein_distance(&b, &c);
    let ac = levenshtein_distance(&a, &c);
    assert!(ac <= ab + bc, "a={:?} b={:?} c={:?}", a, b, c);

    let sim = similarity(&a, &b);
    assert!((0.0..=1.0).contains(&sim));
    assert_eq!(sim >= 1.0, a == b);

    let candidates = [b.clone(), c.clone()];
    let best = best_similarity(&a, &candidates);
    assert!((best - sim.max(similarity(&a, &c))).abs() < 1e-12);
    assert_eq!(
        has_fuzzy_match(&a, &candidates, FUZZY_MATCH_THRESHOLD),
        best > FUZZY_MATCH_THRESHOLD
    );
});
