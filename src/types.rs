// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The value types that flow through a match call.
//!
//! Documents arrive from an external store as loosely typed records
//! ([`RawDocument`]). They are validated and defaulted exactly once, at
//! ingestion, into a [`Document`] whose `tokens` are guaranteed to be present.
//! Past that boundary nothing does runtime shape checks.
//!
//! # Invariants
//!
//! - **Document**: `tokens` is derivable from `content` via [`tokenize`]. The
//!   scorer never re-tokenizes documents, only the query.
//! - **MatchResult**: `score >= threshold` of the call that produced it.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::text::tokenize;

/// A page in the knowledge base.
///
/// Immutable for the duration of a match call. Created and refreshed by an
/// external ingestion process.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: String,
    pub title: String,
    /// Source URL used for attribution in replies.
    pub url: String,
    /// Full raw text; snippets are cut from this.
    pub content: String,
    /// Precomputed content tokens, in occurrence order.
    pub tokens: Vec<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl Document {
    /// Build a document, tokenizing `content`.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        url: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        let content = content.into();
        let tokens = tokenize(&content);
        Self {
            id: id.into(),
            title: title.into(),
            url: url.into(),
            content,
            tokens,
            keywords: Vec::new(),
        }
    }

    /// Attach an optional keyword list.
    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    /// Validate and default a loosely typed record.
    ///
    /// Never fails. Missing strings become empty, a missing id becomes
    /// `doc-{position}`, and missing or empty tokens are computed from the
    /// content. A record with no usable content ends up with no tokens, which
    /// the matcher skips.
    pub fn from_raw(raw: RawDocument, position: usize) -> Self {
        let id = match raw.id {
            Some(id) => id.into_string(),
            None => {
                warn!(position, "document without id, assigning positional id");
                format!("doc-{}", position)
            }
        };

        let content = raw.content.unwrap_or_default();
        if content.trim().is_empty() {
            warn!(%id, "document has no content");
        }

        let tokens = match raw.tokens {
            Some(tokens) if !tokens.is_empty() => tokens,
            _ => tokenize(&content),
        };

        Self {
            id,
            title: raw.title.unwrap_or_default(),
            url: raw.url.unwrap_or_default(),
            content,
            tokens,
            keywords: raw.keywords.unwrap_or_default(),
        }
    }
}

/// Identifier as it appears in the external store: text or a number.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawId {
    Text(String),
    Number(i64),
}

impl RawId {
    pub fn into_string(self) -> String {
        match self {
            RawId::Text(s) => s,
            RawId::Number(n) => n.to_string(),
        }
    }
}

/// A document record before validation. Every field is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawDocument {
    #[serde(default)]
    pub id: Option<RawId>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub tokens: Option<Vec<String>>,
    #[serde(default)]
    pub keywords: Option<Vec<String>>,
}

/// The winning document of a match call.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchResult<'a> {
    pub document: &'a Document,
    /// Combined relevance score. A ranking signal, not a calibrated probability.
    pub score: f64,
    /// Most query-relevant sentence of the document.
    pub snippet: String,
}
