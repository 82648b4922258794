// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The reply payload handed back to the chat flow.
//!
//! `needs_admin` is the one signal callers act on: when it is set the question
//! goes to a human, whatever the reason the engine came up empty.

use serde::{Deserialize, Serialize};

use crate::types::MatchResult;

/// Reply text used when nothing in the knowledge base matched.
pub const NO_MATCH_MESSAGE: &str = "I couldn't find an answer to that in our knowledge base. \
    I've passed your question on to our team and an admin will get back to you soon.";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattedResponse {
    pub text: String,
    pub source_url: Option<String>,
    /// Title of the page the answer came from.
    pub source_page: Option<String>,
    pub confidence: f64,
    pub needs_admin: bool,
}

impl FormattedResponse {
    /// The "escalate to a human" reply.
    pub fn no_match() -> Self {
        Self {
            text: NO_MATCH_MESSAGE.to_string(),
            source_url: None,
            source_page: None,
            confidence: 0.0,
            needs_admin: true,
        }
    }
}

impl From<Option<&MatchResult<'_>>> for FormattedResponse {
    fn from(result: Option<&MatchResult<'_>>) -> Self {
        format_response(result)
    }
}

/// Turn a match (or the lack of one) into a reply.
pub fn format_response(result: Option<&MatchResult<'_>>) -> FormattedResponse {
    match result {
        None => FormattedResponse::no_match(),
        Some(found) => FormattedResponse {
            text: found.snippet.clone(),
            source_url: Some(found.document.url.clone()),
            source_page: Some(found.document.title.clone()),
            confidence: found.score,
            needs_admin: false,
        },
    }
}
