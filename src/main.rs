// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use kbmatch::{expand_query, tokenize, KnowledgeBase, Matcher, MatcherConfig};

mod cli;
use cli::{display, Cli, Commands};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli.command) {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Ask {
            kb,
            config,
            json,
            query,
        } => run_ask(&kb, config.as_deref(), json, &query),
        Commands::Inspect { kb } => {
            let kb = load_kb(&kb)?;
            display::print_documents(kb.documents());
            Ok(())
        }
        Commands::Tokenize { text } => {
            display::print_tokens(&tokenize(&text));
            Ok(())
        }
        Commands::Expand { query } => {
            display::print_tokens(&expand_query(&query));
            Ok(())
        }
    }
}

fn run_ask(kb_path: &Path, config_path: Option<&Path>, json: bool, query: &str) -> Result<()> {
    let kb = load_kb(kb_path)?;
    let config = match config_path {
        Some(path) => MatcherConfig::from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => MatcherConfig::default(),
    };

    let response = kb.answer(&Matcher::new(config), query);

    if json {
        let out = serde_json::to_string_pretty(&response).context("serializing reply")?;
        println!("{}", out);
    } else {
        display::print_response(query, &response);
    }
    Ok(())
}

fn load_kb(path: &Path) -> Result<KnowledgeBase> {
    KnowledgeBase::from_file(path)
        .with_context(|| format!("loading knowledge base {}", path.display()))
}
