use anyhow::{Context, Result};
use colored::Colorize;
use std::process::Command;
use std::time::Instant;

pub fn run(unit_only: bool, integration_only: bool) -> Result<()> {
    println!();
    println!("{}", "🧪 Running tests...".cyan().bold());
    println!();

    let total_start = Instant::now();

    if !integration_only {
        suite("unit tests", &["test", "--workspace", "--lib"])?;
    }
    if !unit_only {
        // Every file under crates/*/tests/ is its own test target.
        suite(
            "integration tests",
            &["test", "--workspace", "--exclude", "xtask", "--test", "*"],
        )?;
        suite(
            "integration tests (tracing)",
            &["test", "-p", "ads8568", "--features", "std,tracing", "--test", "*"],
        )?;
    }
    suite("doc tests", &["test", "--workspace", "--doc"])?;

    println!(
        "{}",
        format!(
            "✓ All tests completed in {:.2}s",
            total_start.elapsed().as_secs_f64()
        )
        .green()
        .bold()
    );
    println!();

    Ok(())
}

fn suite(label: &str, args: &[&str]) -> Result<()> {
    println!("{}", format!("  Running {label}...").cyan());
    let start = Instant::now();

    let output = Command::new("cargo")
        .args(args)
        .output()
        .with_context(|| format!("Failed to run {label}"))?;

    let stdout = String::from_utf8_lossy(&output.stdout);
    if !output.status.success() {
        eprintln!("{}", format!("  ✗ {label} failed").red().bold());
        eprintln!();
        for line in stdout.lines() {
            eprintln!("  {line}");
        }
        eprintln!("{}", String::from_utf8_lossy(&output.stderr));
        anyhow::bail!("{label} failed");
    }

    println!(
        "{}",
        format!(
            "  ✓ {label} passed {} in {:.2}s",
            extract_test_summary(&stdout),
            start.elapsed().as_secs_f64()
        )
        .green()
    );
    println!();
    Ok(())
}

/// Sum the "test result:" lines cargo prints once per test target.
fn extract_test_summary(output: &str) -> String {
    let mut passed = 0u64;
    let mut failed = 0u64;
    let mut targets = 0u64;
    for line in output.lines() {
        let Some(result) = line.split("test result:").nth(1) else {
            continue;
        };
        targets = targets.saturating_add(1);
        for part in result.split(';') {
            let mut words = part.split_whitespace().rev();
            let kind = words.next();
            let count = words.next().and_then(|n| n.parse::<u64>().ok());
            match (kind, count) {
                (Some("passed"), Some(n)) => passed = passed.saturating_add(n),
                (Some("failed"), Some(n)) => failed = failed.saturating_add(n),
                _ => {}
            }
        }
    }
    if targets == 0 {
        return "(summary not available)".to_string();
    }
    format!("({passed} passed, {failed} failed across {targets} targets)")
}

#[cfg(test)]
mod tests {
    use super::extract_test_summary;

    #[test]
    fn summary_sums_targets() {
        let output = "\
test result: ok. 5 passed; 0 failed; 0 ignored; 0 measured; 0 filtered out
test result: ok. 3 passed; 1 failed; 0 ignored; 0 measured; 0 filtered out
";
        assert_eq!(
            extract_test_summary(output),
            "(8 passed, 1 failed across 2 targets)"
        );
    }

    #[test]
    fn summary_without_results() {
        assert_eq!(extract_test_summary("nothing"), "(summary not available)");
    }
}
