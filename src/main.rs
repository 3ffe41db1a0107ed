//! WhenIsDue - A static generator for countdown pages with social metadata.

mod cli;
mod config;
mod core;
mod logger;
mod page;
mod render;
mod seo;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands, build::build_site, check::run_check, meta::run_meta};
use config::SiteConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    let config = SiteConfig::load(&cli)?;

    match &cli.command {
        Commands::Build { .. } => {
            config.validate()?;
            build_site(&config).map(|_| ())
        }
        Commands::Meta { slug, pretty } => {
            config.validate()?;
            run_meta(&config, slug, *pretty)
        }
        // Reports config problems itself alongside everything else
        Commands::Check { strict } => run_check(&config, *strict),
    }
}
