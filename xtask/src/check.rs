use anyhow::{Context, Result};
use colored::Colorize;
use std::process::Command;
use std::time::Instant;

/// Bare-metal target the driver crates must build for.
const EMBEDDED_TARGET: &str = "thumbv7em-none-eabihf";

struct Step {
    label: &'static str,
    args: &'static [&'static str],
    /// Failures stop the run; advisory steps only report.
    required: bool,
}

const STEPS: &[Step] = &[
    Step {
        label: "platform (no_std)",
        args: &["check", "-p", "platform", "--target", EMBEDDED_TARGET],
        required: true,
    },
    Step {
        label: "ads8568 (no_std)",
        args: &["check", "-p", "ads8568", "--target", EMBEDDED_TARGET],
        required: true,
    },
    Step {
        label: "ads8568 (no_std + defmt)",
        args: &[
            "check",
            "-p",
            "ads8568",
            "--target",
            EMBEDDED_TARGET,
            "--features",
            "defmt",
        ],
        required: true,
    },
    Step {
        label: "ads8568 (host + std + tracing)",
        args: &["check", "-p", "ads8568", "--features", "std,tracing"],
        required: true,
    },
    Step {
        label: "clippy",
        args: &["clippy", "--workspace", "--all-targets", "--", "-D", "warnings"],
        required: false,
    },
    Step {
        label: "formatting",
        args: &["fmt", "--all", "--check"],
        required: false,
    },
];

pub fn run() -> Result<()> {
    println!();
    println!("{}", "🔍 Checking driver builds...".cyan().bold());
    println!();

    let total_start = Instant::now();

    for step in STEPS {
        println!("{}", format!("  Checking {}...", step.label).cyan());
        let start = Instant::now();

        let output = Command::new("cargo")
            .args(step.args)
            .output()
            .with_context(|| format!("Failed to run {}", step.label))?;

        if output.status.success() {
            println!(
                "{}",
                format!(
                    "  ✓ {} passed in {:.2}s",
                    step.label,
                    start.elapsed().as_secs_f64()
                )
                .green()
            );
        } else if step.required {
            eprintln!("{}", format!("  ✗ {} failed", step.label).red().bold());
            eprintln!();
            eprintln!("{}", String::from_utf8_lossy(&output.stderr));
            anyhow::bail!("{} failed", step.label);
        } else {
            eprintln!("{}", format!("  ⚠ {} reported issues", step.label).yellow().bold());
            eprintln!();
            eprintln!("{}", String::from_utf8_lossy(&output.stderr));
        }
        println!();
    }

    println!(
        "{}",
        format!(
            "✓ All checks completed in {:.2}s",
            total_start.elapsed().as_secs_f64()
        )
        .green()
        .bold()
    );
    println!();

    Ok(())
}
