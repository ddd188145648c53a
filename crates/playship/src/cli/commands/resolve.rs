//! Listing resolve command

use clap::Args;
use console::style;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::info;

use playship_listing::{ListingResolver, ReleaseTrack};

use crate::cli::{Cli, OutputFormat};

/// Resolve a listing directory into publishable assets
#[derive(Debug, Args)]
pub struct ResolveCommand {
    /// Path to the listing directory
    #[arg(long, default_value = playship_listing::LISTING_DIR)]
    pub path: PathBuf,

    /// Release track the assets are being prepared for
    #[arg(long, default_value = "production")]
    pub track: String,
}

impl ResolveCommand {
    /// Execute the resolve command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        // The track does not affect resolution, but an unknown track should
        // fail here rather than in the upload layer.
        let track = ReleaseTrack::from_str(&self.track)?;
        info!(path = %self.path.display(), track = %track, "executing resolve command");

        if !self.path.is_dir() {
            anyhow::bail!(
                "Listing directory not found at '{}'. Run 'playship init' first.",
                self.path.display()
            );
        }

        if !cli.quiet {
            println!(
                "{} listing at {} for the {} track",
                style("Resolving").cyan(),
                style(self.path.display()).bold(),
                style(track).bold()
            );
        }

        let resolver = ListingResolver::new(&self.path);
        let listing = resolver.resolve()?;

        match cli.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&listing)?);
            }
            OutputFormat::Text => {
                println!();
                for locale in &listing.locales {
                    println!("{}", style(&locale.locale).bold());
                    for text in &locale.texts {
                        let preview: String = text.value.chars().take(40).collect();
                        println!("  {:<22} {}", text.kind.to_string(), style(preview).dim());
                    }
                    for set in &locale.images {
                        println!(
                            "  {:<22} {} image(s)",
                            set.kind.to_string(),
                            set.images.len()
                        );
                        if cli.verbose {
                            for img in &set.images {
                                println!(
                                    "    {} ({}x{})",
                                    style(img.path.display()).dim(),
                                    img.width,
                                    img.height
                                );
                            }
                        }
                    }
                }
                println!();
                println!(
                    "{} {} publishable asset(s) across {} locale(s)",
                    style("Resolved").green().bold(),
                    listing.asset_count(),
                    listing.locales.len()
                );
            }
        }

        Ok(())
    }
}
