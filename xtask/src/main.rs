//! Custom cargo commands for kbmatch.
//!
//! Usage:
//!   cargo xtask verify              - Tests on both feature sets, clippy, docs
//!   cargo xtask test                - Run all tests
//!   cargo xtask check               - Quick check (check + test + clippy)
//!   cargo xtask bench               - Run benchmarks
//!   cargo xtask fuzz <target> [s]   - Run a fuzz target for s seconds (default 60)

use anyhow::{bail, Context, Result};
use std::env;
use std::path::PathBuf;
use std::process::Command;

const FUZZ_TARGETS: &[&str] = &["levenshtein_matching", "match_queries"];

fn main() -> Result<()> {
    let mut args = env::args().skip(1);
    let task = args.next();
    match task.as_deref() {
        Some("verify") => verify()?,
        Some("test") => test()?,
        Some("check") => check()?,
        Some("bench") => bench()?,
        Some("fuzz") => {
            let target = args.next();
            let seconds = args.next();
            fuzz(target.as_deref(), seconds.as_deref())?
        }
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  verify                  Tests with default and no features, clippy, doc build
  test                    Run all Rust tests
  check                   Quick check (cargo check + test + clippy)
  bench                   Run benchmarks
  fuzz <target> [secs]    Run a fuzz target (needs cargo-fuzz and nightly)

Fuzz targets: {}
"#,
        FUZZ_TARGETS.join(", ")
    );
}

/// Full verification suite
fn verify() -> Result<()> {
    println!("==========================================");
    println!("kbmatch Verification Suite");
    println!("==========================================\n");

    println!("[1/4] Running tests (default features)...");
    run_cargo(&["test", "--quiet"])?;
    println!("✓ Tests passed\n");

    println!("[2/4] Running tests (no default features)...");
    run_cargo(&["test", "--quiet", "--no-default-features"])?;
    println!("✓ Tests passed without rayon and unicode-normalization\n");

    println!("[3/4] Running clippy...");
    run_cargo(&["clippy", "--quiet", "--all-targets", "--", "-D", "warnings"])?;
    println!("✓ Clippy passed\n");

    println!("[4/4] Building docs...");
    run_cargo(&["doc", "--quiet", "--no-deps"])?;
    println!("✓ Docs build\n");

    println!("==========================================");
    println!("✓ ALL VERIFICATION CHECKS PASSED");
    println!("==========================================");

    Ok(())
}

/// Run all tests
fn test() -> Result<()> {
    run_cargo(&["test"])
}

/// Quick check
fn check() -> Result<()> {
    println!("Running quick checks...\n");

    println!("[1/3] cargo check...");
    run_cargo(&["check", "--all-targets"])?;

    println!("[2/3] cargo test...");
    run_cargo(&["test", "--quiet"])?;

    println!("[3/3] cargo clippy...");
    run_cargo(&["clippy", "--quiet", "--", "-D", "warnings"])?;

    println!("\n✓ Quick checks passed");
    Ok(())
}

/// Run benchmarks
fn bench() -> Result<()> {
    run_cargo(&["bench"])
}

/// Run one fuzz target from the fuzz/ crate.
fn fuzz(target: Option<&str>, seconds: Option<&str>) -> Result<()> {
    let Some(target) = target else {
        bail!("missing fuzz target, expected one of: {}", FUZZ_TARGETS.join(", "));
    };
    if !FUZZ_TARGETS.contains(&target) {
        bail!(
            "unknown fuzz target {:?}, expected one of: {}",
            target,
            FUZZ_TARGETS.join(", ")
        );
    }
    let seconds: u64 = seconds
        .unwrap_or("60")
        .parse()
        .context("fuzz duration must be a whole number of seconds")?;

    let max_time = format!("-max_total_time={}", seconds);
    run_cargo(&["+nightly", "fuzz", "run", target, "--", &max_time])
}

// ============================================================================
// Helper functions
// ============================================================================

fn project_root() -> Result<PathBuf> {
    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => env::current_dir().context("Failed to read current directory")?,
    };

    // xtask is in project_root/xtask, so go up one level
    let root = manifest_dir.parent().unwrap_or(&manifest_dir);
    Ok(root.to_path_buf())
}

fn run_cargo(args: &[&str]) -> Result<()> {
    let root = project_root()?;

    let status = Command::new("cargo")
        .args(args)
        .current_dir(&root)
        .status()
        .with_context(|| format!("Failed to run cargo {:?}", args))?;

    if !status.success() {
        bail!("cargo {} failed", args.join(" "));
    }

    Ok(())
}
