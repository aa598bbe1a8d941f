use anyhow::{Context, Result};
use colored::Colorize;
use std::process::Command;
use std::time::Instant;

/// Library crates with public API docs. xtask is a binary and is skipped.
const DOC_CRATES: &[&str] = &["platform", "ads8568"];

pub fn run(open: bool) -> Result<()> {
    println!();
    println!("{}", "📚 Building documentation...".cyan().bold());
    println!();

    let start = Instant::now();

    let mut cmd = Command::new("cargo");
    cmd.args(["doc", "--no-deps"]);
    for krate in DOC_CRATES {
        cmd.args(["-p", krate]);
    }
    // `std` pulls in the recording mocks and the std::error::Error impls.
    cmd.args(["--features", "ads8568/std,platform/std"]);
    if open {
        cmd.arg("--open");
    }

    let output = cmd.output().context("Failed to run cargo doc")?;
    if !output.status.success() {
        eprintln!("{}", "✗ Documentation build failed".red().bold());
        eprintln!();
        eprintln!("{}", String::from_utf8_lossy(&output.stderr));
        anyhow::bail!("Documentation build failed");
    }

    println!(
        "{}",
        format!("✓ Documentation built in {:.2}s", start.elapsed().as_secs_f64()).green()
    );
    if !open {
        println!(
            "   {}",
            "Open target/doc/ads8568/index.html, or run 'cargo run -p xtask -- doc --open'".dimmed()
        );
    }
    println!();

    Ok(())
}
