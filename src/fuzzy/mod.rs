// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy matching: typo tolerance via edit distance.
//!
//! "volunter" should still find "volunteer", and "volunteers" should find
//! "volunteer". Both are one edit away. Similarity is edit distance scaled by
//! the longer word, so one typo in a long word costs less than in a short one.

mod levenshtein;

pub use levenshtein::*;
