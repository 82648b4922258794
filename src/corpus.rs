// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Loading a knowledge base from the ingestion process's JSON export.
//!
//! Two shapes are accepted:
//!
//! ```json
//! [ { "id": "about", "title": "...", "url": "...", "content": "...", "tokens": [...] } ]
//! { "documents": [ ... ] }
//! ```
//!
//! Every record goes through [`Document::from_raw`], so a sloppy export never
//! makes it past this module.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::{KbError, Result};
use crate::matcher::Matcher;
use crate::response::FormattedResponse;
use crate::types::{Document, MatchResult, RawDocument};

#[derive(Deserialize)]
#[serde(untagged)]
enum CorpusFile {
    Bare(Vec<RawDocument>),
    Wrapped { documents: Vec<RawDocument> },
}

/// A read-only snapshot of the document collection.
#[derive(Debug, Clone, Default)]
pub struct KnowledgeBase {
    documents: Vec<Document>,
}

impl KnowledgeBase {
    pub fn new(documents: Vec<Document>) -> Self {
        Self { documents }
    }

    /// Validate loosely typed records into a knowledge base.
    pub fn from_raw(records: Vec<RawDocument>) -> Self {
        let documents = records
            .into_iter()
            .enumerate()
            .map(|(position, raw)| Document::from_raw(raw, position))
            .collect();
        Self { documents }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let file: CorpusFile = serde_json::from_str(json)?;
        let records = match file {
            CorpusFile::Bare(records) | CorpusFile::Wrapped { documents: records } => records,
        };
        let kb = Self::from_raw(records);
        debug!(documents = kb.len(), "loaded knowledge base");
        Ok(kb)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| KbError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Look a document up by id.
    pub fn get(&self, id: &str) -> Option<&Document> {
        self.documents.iter().find(|doc| doc.id == id)
    }

    pub fn find_best_match(&self, matcher: &Matcher, query: &str) -> Option<MatchResult<'_>> {
        matcher.find_best_match(query, &self.documents)
    }

    pub fn answer(&self, matcher: &Matcher, query: &str) -> FormattedResponse {
        matcher.answer(query, &self.documents)
    }
}

impl From<Vec<Document>> for KnowledgeBase {
    fn from(documents: Vec<Document>) -> Self {
        Self::new(documents)
    }
}
