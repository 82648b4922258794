// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Text handling: normalization and tokenization.
//!
//! Everything downstream (query expansion, scoring, snippets) works on the
//! token stream produced here, so this module is the leaf of the crate.

mod normalize;
mod tokenize;

pub use normalize::normalize;
pub use tokenize::{is_stop_word, tokenize, MIN_TOKEN_CHARS, STOP_WORDS};
