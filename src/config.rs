// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Tunables for a match call.
//!
//! Defaults reproduce the stock behavior: threshold 0.4, 300-character
//! snippets, 0.6/0.4 weighting and a strict 0.75 fuzzy cutoff. A JSON file may
//! override any subset of them:
//!
//! ```json
//! { "threshold": 0.5, "snippetMaxLength": 200 }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{KbError, Result};
use crate::fuzzy::FUZZY_MATCH_THRESHOLD;
use crate::scoring::{DEFAULT_SNIPPET_MAX_LENGTH, DEFAULT_THRESHOLD, FUZZY_WEIGHT, TFIDF_WEIGHT};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct MatcherConfig {
    /// Minimum combined score (inclusive) for a document to be returned.
    pub threshold: f64,
    /// Snippets are cut to this many characters, plus "...".
    pub snippet_max_length: usize,
    pub tfidf_weight: f64,
    pub fuzzy_weight: f64,
    /// Token similarity must exceed this to count as a fuzzy match.
    pub fuzzy_threshold: f64,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            snippet_max_length: DEFAULT_SNIPPET_MAX_LENGTH,
            tfidf_weight: TFIDF_WEIGHT,
            fuzzy_weight: FUZZY_WEIGHT,
            fuzzy_threshold: FUZZY_MATCH_THRESHOLD,
        }
    }
}

impl MatcherConfig {
    /// Parse and validate a JSON config.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| KbError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("threshold", self.threshold),
            ("fuzzyThreshold", self.fuzzy_threshold),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(KbError::InvalidConfig(format!(
                    "{} must be within [0, 1], got {}",
                    name, value
                )));
            }
        }

        for (name, value) in [
            ("tfidfWeight", self.tfidf_weight),
            ("fuzzyWeight", self.fuzzy_weight),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(KbError::InvalidConfig(format!(
                    "{} must be a finite non-negative number, got {}",
                    name, value
                )));
            }
        }

        if self.snippet_max_length == 0 {
            return Err(KbError::InvalidConfig(
                "snippetMaxLength must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}
