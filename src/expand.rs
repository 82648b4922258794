// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query expansion through a static synonym table.
//!
//! Users type "volunteer" where a page says "join", and many type in Roman
//! Urdu ("kaise", "kahan") against pages written in English. The table below
//! bridges both gaps. It is hand-maintained data, not a model.
//!
//! Expansion is one level deep: a synonym pulled in by one entry is never
//! itself looked up again. "volunteer" brings in "help", but "help" does not
//! then bring in "support".

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use crate::text::tokenize;

/// Synonym and bridge table. Keys are in token form (lowercase, longer than
/// two characters, not stop words); values are lowercase single words.
///
/// Some bridge values are question words ("how", "where"). The tokenizer drops
/// those from documents, so they only ever land through fuzzy matching.
pub const SYNONYMS: &[(&str, &[&str])] = &[
    // English
    ("volunteer", &["help", "participate", "contribute", "join"]),
    ("volunteering", &["volunteer", "help", "participate", "contribute"]),
    ("donate", &["donation", "contribute", "give", "support"]),
    ("donation", &["donate", "contribute", "give", "support"]),
    ("join", &["register", "signup", "member", "apply"]),
    ("register", &["signup", "join", "apply", "registration"]),
    ("contact", &["email", "phone", "reach", "address"]),
    ("location", &["address", "office", "where"]),
    ("office", &["location", "address"]),
    ("event", &["events", "program", "activity"]),
    ("project", &["projects", "initiative", "program"]),
    ("membership", &["member", "join", "subscription"]),
    ("subscription", &["membership", "payment", "plan"]),
    ("fee", &["cost", "payment", "price", "subscription"]),
    ("pay", &["payment", "fee", "subscription"]),
    // Roman Urdu bridges
    ("kaise", &["how", "apply", "join", "register"]),
    ("kahan", &["where", "location", "address", "office"]),
    ("kya", &["what"]),
    ("kab", &["when", "date", "time"]),
    ("kyun", &["why"]),
    ("kaun", &["who"]),
    ("madad", &["help", "support", "volunteer"]),
    ("chanda", &["donate", "donation", "contribute"]),
    ("paisay", &["payment", "fee", "donation"]),
    ("rabta", &["contact", "email", "phone"]),
    ("daftar", &["office", "address", "location"]),
    ("shamil", &["join", "member", "register"]),
    ("tanzeem", &["organization", "organisation"]),
    ("kaam", &["work", "project", "projects"]),
    ("waqt", &["time", "timing", "schedule"]),
];

static SYNONYM_MAP: LazyLock<HashMap<&'static str, &'static [&'static str]>> =
    LazyLock::new(|| SYNONYMS.iter().copied().collect());

/// Synonyms for a single token, if it is a key in the table.
pub fn synonyms_for(token: &str) -> Option<&'static [&'static str]> {
    SYNONYM_MAP.get(token).copied()
}

/// Tokenize a query and widen it with synonyms.
///
/// Original tokens come first in their original order, followed by the
/// synonyms of each key token in turn. Duplicates are removed keeping the
/// first occurrence.
///
/// ```
/// use kbmatch::expand_query;
///
/// let expanded = expand_query("kaise volunteer hon");
/// assert!(expanded.iter().any(|t| t == "how"));
/// assert!(expanded.iter().any(|t| t == "register"));
/// ```
pub fn expand_query(query: &str) -> Vec<String> {
    let tokens = tokenize(query);
    let mut expanded = tokens.clone();

    for token in &tokens {
        if let Some(synonyms) = synonyms_for(token) {
            expanded.extend(synonyms.iter().map(|s| (*s).to_string()));
        }
    }

    let mut seen = HashSet::with_capacity(expanded.len());
    expanded.retain(|token| seen.insert(token.clone()));
    expanded
}
