// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Typo-tolerant knowledge-base matching for chat assistants.
//!
//! Given a user's question and a small collection of indexed pages, find the
//! page that best answers it, pull out the most relevant sentence, and say
//! whether a human should take over.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────┐   ┌──────────┐   ┌──────────────┐   ┌──────────┐   ┌──────────┐
//! │  text    │──▶│  expand  │──▶│   scoring    │──▶│ matcher  │──▶│ response │
//! │(tokenize)│   │(synonyms)│   │(tfidf+fuzzy) │   │(best doc)│   │ (reply)  │
//! └──────────┘   └──────────┘   └──────────────┘   └────┬─────┘   └──────────┘
//!                                                        │
//!                                                        ▼
//!                                                   ┌──────────┐
//!                                                   │ snippet  │
//!                                                   └──────────┘
//! ```
//!
//! Documents come in through `corpus` (validated once from loose JSON) and
//! are read-only from then on. Nothing in the matching path allocates shared
//! state or returns an error: bad input is simply "no match", which the reply
//! turns into `needs_admin = true`.
//!
//! # Usage
//!
//! ```
//! use kbmatch::{answer, Document};
//!
//! let docs = vec![
//!     Document::new(
//!         "v",
//!         "Volunteer",
//!         "/volunteer",
//!         "Volunteer with us: join the team, help at weekend drives and participate in tutoring.",
//!     ),
//!     Document::new("d", "Donate", "/donate", "Donate online to support families."),
//!     Document::new("c", "Contact", "/contact", "Email the office in Karachi."),
//! ];
//!
//! let reply = answer("How can I volunteer?", &docs);
//! assert!(!reply.needs_admin);
//! assert_eq!(reply.source_url.as_deref(), Some("/volunteer"));
//! ```

pub mod config;
pub mod corpus;
pub mod error;
pub mod expand;
pub mod fuzzy;
pub mod matcher;
pub mod ratelimit;
pub mod response;
pub mod scoring;
pub mod snippet;
pub mod testing;
pub mod text;
mod types;

pub use config::MatcherConfig;
pub use corpus::KnowledgeBase;
pub use error::{KbError, Result};
pub use expand::{expand_query, SYNONYMS};
pub use fuzzy::{levenshtein_distance, similarity, FUZZY_MATCH_THRESHOLD};
pub use matcher::{answer, find_best_match, Matcher};
pub use ratelimit::{RateLimitStore, SlidingWindowLimiter};
pub use response::{format_response, FormattedResponse, NO_MATCH_MESSAGE};
pub use scoring::{score, CorpusStats, DEFAULT_SNIPPET_MAX_LENGTH, DEFAULT_THRESHOLD};
pub use snippet::extract_snippet;
pub use text::{tokenize, MIN_TOKEN_CHARS, STOP_WORDS};
pub use types::{Document, MatchResult, RawDocument, RawId};
