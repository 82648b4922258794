// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Errors at the I/O boundary.
//!
//! Matching itself never fails: a bad query or a malformed collection is just
//! "no match". These variants only come out of loading a corpus or a config.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum KbError {
    /// File could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input was not valid JSON, or not the expected shape.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Config values out of range.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, KbError>;
