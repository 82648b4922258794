// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Word tokenizer with stop-word removal.
//!
//! Lowercase, turn anything that isn't a word character into a space, split on
//! whitespace, then throw away short tokens and function words. What's left is
//! the content-bearing vocabulary the scorer compares.
//!
//! Question words count as stop words. "What is Wasilah?" is a question about
//! "wasilah", and a page answering it rarely repeats the word "what".

use std::collections::HashSet;
use std::sync::LazyLock;

use super::normalize;

/// Shortest token kept, in characters.
pub const MIN_TOKEN_CHARS: usize = 3;

/// Closed list of English function words excluded from tokenization.
pub const STOP_WORDS: &[&str] = &[
    // Articles
    "the", "a", "an",
    // Conjunctions
    "and", "or", "but", "nor", "so", "yet", "if", "then", "than", "because", "while",
    // Auxiliary verbs
    "is", "am", "are", "was", "were", "be", "been", "being", "have", "has", "had", "do",
    "does", "did", "will", "would", "shall", "should", "can", "could", "may", "might", "must",
    // Prepositions
    "at", "by", "for", "from", "in", "into", "of", "off", "on", "onto", "out", "over", "to",
    "up", "with", "about", "as", "under", "after", "before",
    // Pronouns and determiners
    "i", "me", "my", "we", "our", "you", "your", "he", "him", "his", "she", "her", "it", "its",
    "they", "them", "their", "this", "that", "these", "those",
    // Question words
    "what", "which", "who", "whom", "whose", "when", "where", "why", "how",
];

static STOP_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| STOP_WORDS.iter().copied().collect());

/// Is this (already lowercased) token a stop word?
pub fn is_stop_word(token: &str) -> bool {
    STOP_SET.contains(token)
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Split text into content tokens, in the order they occur.
///
/// Tokens are not deduplicated: repeated words matter for term frequency.
/// Empty input, or input made only of punctuation, short words and stop
/// words, yields an empty vector.
///
/// ```
/// use kbmatch::tokenize;
///
/// assert_eq!(tokenize("How can I volunteer?"), vec!["volunteer"]);
/// assert!(tokenize("it is a").is_empty());
/// ```
pub fn tokenize(text: &str) -> Vec<String> {
    let cleaned: String = normalize(text)
        .chars()
        .map(|c| if is_word_char(c) || c.is_whitespace() { c } else { ' ' })
        .collect();

    cleaned
        .split_whitespace()
        .filter(|token| token.chars().count() >= MIN_TOKEN_CHARS)
        .filter(|token| !is_stop_word(token))
        .map(str::to_string)
        .collect()
}
