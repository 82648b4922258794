// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring: how a document gets its relevance number.
//!
//! Two independent signals, linearly combined:
//!
//! - **TF-IDF cosine** (`tfidf`): rewards terms that are frequent in this
//!   document but rare across the collection.
//! - **Fuzzy keyword overlap** (`keyword`): rewards query words that appear in
//!   the document up to a typo, regardless of collection statistics.
//!
//! The weights live in `combined` together with the defaults for every other
//! tunable of a match call.

mod combined;
mod keyword;
mod tfidf;

pub use combined::*;
pub use keyword::fuzzy_keyword_score;
pub use tfidf::{tfidf_cosine, CorpusStats};
