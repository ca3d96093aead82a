//! Workspace-wide checks.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use owo_colors::OwoColorize;
use xshell::{Shell, cmd};

type Step = fn(&Shell) -> Result<()>;

const STEPS: [(&str, Step); 5] = [
    ("Formatting", run_fmt_check),
    ("Clippy", run_clippy),
    ("Tests", run_tests),
    ("Documentation", run_doc_check),
    ("Safety", run_safety_scan),
];

/// Run every check and summarize. With `ci_mode`, any failure exits non-zero.
pub fn run(ci_mode: bool) -> Result<()> {
    let sh = workspace_shell()?;

    println!();
    println!("{}", "Injury Map Quality Check".bold());
    println!("{}", "========================".bold());
    println!();

    let mut all_passed = true;
    for (name, step) in STEPS {
        println!("{}", format!("{name}...").dimmed());
        match step(&sh) {
            Ok(()) => println!("  {} {name}", "✓".green()),
            Err(e) => {
                println!("  {} {name} - {e:#}", "✗".red());
                all_passed = false;
            }
        }
    }

    println!();
    if all_passed {
        println!("{}", "✓ All checks passed!".green().bold());
        Ok(())
    } else if ci_mode {
        println!("{}", "✗ Some checks failed.".red().bold());
        std::process::exit(1);
    } else {
        println!("{}", "⚠ Some checks failed. Fix before committing.".yellow());
        Ok(())
    }
}

/// Run the CI sequence, collecting every failure before exiting.
pub fn run_ci() -> Result<()> {
    let sh = workspace_shell()?;

    println!();
    println!("{}", "Injury Map CI".bold());
    println!("{}", "=============".bold());
    println!();

    let mut failures = Vec::new();
    for (i, (name, step)) in STEPS.iter().enumerate() {
        println!("{}", format!("Step {}/{}: {name}", i + 1, STEPS.len()).cyan());
        if let Err(e) = step(&sh) {
            println!("  {} {name} failed", "✗".red());
            failures.push(format!("{name}: {e:#}"));
        } else {
            println!("  {} {name} OK", "✓".green());
        }
    }

    println!();
    if failures.is_empty() {
        println!("{}", "  ✓ CI PASSED".green().bold());
        return Ok(());
    }

    println!("{}", "  ✗ CI FAILED".red().bold());
    println!();
    for f in &failures {
        println!("  - {}", f.red());
    }
    std::process::exit(1);
}

fn workspace_shell() -> Result<Shell> {
    let sh = Shell::new()?;
    sh.change_dir(workspace_root());
    Ok(sh)
}

fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .map_or_else(|| PathBuf::from("."), Path::to_path_buf)
}

fn run_fmt_check(sh: &Shell) -> Result<()> {
    cmd!(sh, "cargo fmt --all -- --check")
        .run()
        .context("formatting differs, run `cargo fmt --all`")
}

fn run_clippy(sh: &Shell) -> Result<()> {
    cmd!(sh, "cargo clippy --workspace --all-targets --all-features -- -D warnings")
        .run()
        .context("clippy reported warnings")
}

fn run_tests(sh: &Shell) -> Result<()> {
    cmd!(sh, "cargo test --workspace --all-features")
        .run()
        .context("tests failed")
}

fn run_doc_check(sh: &Shell) -> Result<()> {
    cmd!(sh, "cargo doc --workspace --no-deps --all-features")
        .env("RUSTDOCFLAGS", "-D warnings")
        .run()
        .context("documentation build failed")
}

/// Flag `.unwrap()` / `.expect(` in library sources, ignoring comments and
/// everything from the first `#[cfg(test)]` of a file onwards.
fn run_safety_scan(sh: &Shell) -> Result<()> {
    let mut violations = Vec::new();
    for crate_dir in fs::read_dir(sh.current_dir().join("injury"))? {
        let src = crate_dir?.path().join("src");
        if src.is_dir() {
            scan_dir(&src, &mut violations)?;
        }
    }

    if violations.is_empty() {
        return Ok(());
    }
    for v in &violations {
        println!("    {}", v.dimmed());
    }
    bail!(
        "found {} unwrap/expect calls in library code",
        violations.len()
    )
}

fn scan_dir(dir: &Path, violations: &mut Vec<String>) -> Result<()> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            scan_dir(&path, violations)?;
        } else if path.extension().is_some_and(|ext| ext == "rs") {
            let source = fs::read_to_string(&path)
                .with_context(|| format!("reading {}", path.display()))?;
            for (lineno, line) in source.lines().enumerate() {
                let trimmed = line.trim_start();
                if trimmed.starts_with("#[cfg(test)]") {
                    break;
                }
                if trimmed.starts_with("//") {
                    continue;
                }
                if trimmed.contains(".unwrap()") || trimmed.contains(".expect(") {
                    violations.push(format!("{}:{}", path.display(), lineno + 1));
                }
            }
        }
    }
    Ok(())
}
