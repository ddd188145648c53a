//! Listing validate command

use clap::Args;
use console::style;
use std::path::PathBuf;
use tracing::info;

use playship_listing::{check_listing, ListingResolver, Report};

use crate::cli::{Cli, OutputFormat};
use crate::exit_codes;

/// Validate a listing directory against store constraints
#[derive(Debug, Args)]
pub struct ValidateCommand {
    /// Path to the listing directory
    #[arg(long, default_value = playship_listing::LISTING_DIR)]
    pub path: PathBuf,

    /// Strict mode - fail on warnings
    #[arg(long)]
    pub strict: bool,
}

impl ValidateCommand {
    /// Execute the validate command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(path = %self.path.display(), strict = self.strict, "executing validate command");

        if !self.path.is_dir() {
            anyhow::bail!(
                "Listing directory not found at '{}'. Run 'playship init' first.",
                self.path.display()
            );
        }

        if !cli.quiet {
            println!(
                "{} listing at {}",
                style("Validating").cyan(),
                style(self.path.display()).bold()
            );
        }

        let resolver = ListingResolver::new(&self.path);
        let report = check_listing(&resolver);

        self.print_report(cli, &report)?;

        if !report.is_valid() {
            eprintln!("Validation failed with {} error(s)", report.error_count());
            std::process::exit(exit_codes::VALIDATION_ERROR);
        }

        if self.strict && report.warning_count() > 0 {
            eprintln!(
                "Validation failed in strict mode with {} warning(s)",
                report.warning_count()
            );
            std::process::exit(exit_codes::VALIDATION_ERROR);
        }

        Ok(())
    }

    fn print_report(&self, cli: &Cli, report: &Report) -> anyhow::Result<()> {
        match cli.format {
            OutputFormat::Json => {
                let output = serde_json::json!({
                    "valid": report.is_valid(),
                    "clean": report.is_clean(),
                    "error_count": report.error_count(),
                    "warning_count": report.warning_count(),
                    "issues": report.issues.iter().map(|i| {
                        serde_json::json!({
                            "severity": format!("{}", i.severity),
                            "field": &i.field,
                            "message": &i.message,
                            "suggestion": &i.suggestion,
                        })
                    }).collect::<Vec<_>>(),
                });
                println!("{}", serde_json::to_string_pretty(&output)?);
            }
            OutputFormat::Text => {
                println!();

                if report.is_clean() {
                    println!("{}", style("All validations passed!").green().bold());
                    return Ok(());
                }

                let errors: Vec<_> = report.errors().collect();
                if !errors.is_empty() {
                    println!("{} ({} found)", style("Errors").red().bold(), errors.len());
                    for issue in errors {
                        println!(
                            "  {} {}: {}",
                            style("x").red(),
                            style(&issue.field).dim(),
                            issue.message
                        );
                    }
                    println!();
                }

                let warnings: Vec<_> = report.warnings().collect();
                if !warnings.is_empty() {
                    println!(
                        "{} ({} found)",
                        style("Warnings").yellow().bold(),
                        warnings.len()
                    );
                    for issue in warnings {
                        println!(
                            "  {} {}: {}",
                            style("!").yellow(),
                            style(&issue.field).dim(),
                            issue.message
                        );
                        if let Some(ref suggestion) = issue.suggestion {
                            println!("    {} {}", style("Suggestion:").dim(), suggestion);
                        }
                    }
                    println!();
                }

                if report.is_valid() {
                    println!("{}", style("Validation passed with warnings.").yellow());
                } else {
                    println!(
                        "{}",
                        style("Validation failed. Please fix the errors above.").red()
                    );
                }
            }
        }

        Ok(())
    }
}
