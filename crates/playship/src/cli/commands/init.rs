//! Listing init command

use clap::Args;
use console::style;
use std::path::PathBuf;
use tracing::info;

use playship_listing::{ImageKind, ListingResolver, Locale};

use crate::cli::{Cli, OutputFormat};

/// Initialize a listing directory skeleton
#[derive(Debug, Args)]
pub struct InitCommand {
    /// Locales to initialize (comma-separated)
    #[arg(long, value_delimiter = ',', default_value = "en-US")]
    pub locales: Vec<String>,

    /// Path to the listing directory
    #[arg(long, default_value = playship_listing::LISTING_DIR)]
    pub path: PathBuf,
}

impl InitCommand {
    /// Execute the init command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(path = %self.path.display(), "executing init command");

        let locales: Vec<Locale> = self
            .locales
            .iter()
            .map(|s| Locale::parse(s))
            .collect::<Result<Vec<_>, _>>()?;

        if locales.is_empty() {
            anyhow::bail!("At least one locale must be specified");
        }

        let resolver = ListingResolver::new(&self.path);

        if !cli.quiet {
            println!("{} listing directory skeleton", style("Initializing").cyan());
            println!("  Path:     {}", style(self.path.display()).dim());
            println!(
                "  Locales:  {}",
                locales
                    .iter()
                    .map(|l| l.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            );
        }

        for locale in &locales {
            for &kind in ImageKind::ALL {
                resolver.ensure_image_folder(locale, kind)?;
            }
        }

        match cli.format {
            OutputFormat::Json => {
                let output = serde_json::json!({
                    "success": true,
                    "path": self.path.display().to_string(),
                    "locales": locales.iter().map(|l| l.as_str()).collect::<Vec<_>>(),
                });
                println!("{}", serde_json::to_string_pretty(&output)?);
            }
            OutputFormat::Text => {
                println!();
                println!(
                    "{}",
                    style("Listing directory initialized successfully!").green().bold()
                );
                println!();
                println!("Next steps:");
                println!(
                    "  1. Write the text fields (title, shortdescription, ...) under {}",
                    self.path.display()
                );
                println!("  2. Drop screenshots into the image subdirectories");
                println!("  3. Run `playship validate --path {}`", self.path.display());
            }
        }

        Ok(())
    }
}
