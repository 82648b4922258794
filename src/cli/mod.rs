// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the kbmatch command-line interface.
//!
//! Four subcommands: `ask` runs a question against an exported knowledge base,
//! `inspect` lists what the export contains, and `tokenize` / `expand` show
//! what the engine actually sees for a piece of text.

pub mod display;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "kbmatch",
    about = "Typo-tolerant knowledge-base matching for chat assistants",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Answer a question from a knowledge-base export
    Ask {
        /// Knowledge-base JSON (array of documents or {"documents": [...]})
        #[arg(short, long)]
        kb: PathBuf,

        /// Matcher config JSON overriding the defaults
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Print the reply as JSON instead of a formatted box
        #[arg(long)]
        json: bool,

        /// The user's question
        query: String,
    },

    /// List the documents in a knowledge-base export
    Inspect {
        /// Knowledge-base JSON
        #[arg(short, long)]
        kb: PathBuf,
    },

    /// Show the content tokens of a piece of text
    Tokenize {
        text: String,
    },

    /// Show the expanded query tokens, synonyms included
    Expand {
        query: String,
    },
}
