//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Static countdown page generator
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Output directory path (relative to project root)
    #[arg(short, long, global = true, value_hint = clap::ValueHint::DirPath)]
    pub output: Option<PathBuf>,

    /// Content directory path (relative to project root)
    #[arg(short, long, global = true, value_hint = clap::ValueHint::DirPath)]
    pub content: Option<PathBuf>,

    /// Config file path (default: whenisdue.toml)
    #[arg(short = 'C', long, global = true, default_value = "whenisdue.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Override the site base URL.
    ///
    /// Takes the place of NEXT_PUBLIC_SITE_URL and is used verbatim,
    /// e.g. --site-url "https://whenisdue.com"
    #[arg(short = 'U', long = "site-url", global = true, value_hint = clap::ValueHint::Url)]
    pub site_url: Option<String>,

    /// Enable verbose output for debugging
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Render every page into the output directory
    #[command(visible_alias = "b")]
    Build {
        #[command(flatten)]
        build_args: BuildArgs,
    },

    /// Print resolved metadata for one page as JSON
    #[command(visible_alias = "m")]
    Meta {
        /// Page slug, e.g. gaming/steam-summer-sale-2026 (use / for the home page)
        slug: String,

        /// Pretty-print JSON output
        #[arg(short, long)]
        pretty: bool,
    },

    /// Check config, manifest and page definitions without writing anything
    Check {
        /// Treat missing manifest entries as errors
        #[arg(long)]
        strict: bool,
    },
}

/// Build command arguments
#[derive(clap::Args, Debug, Clone)]
pub struct BuildArgs {
    /// Remove previously rendered pages before building
    #[arg(long)]
    pub clean: bool,

    /// Minify the HTML content
    #[arg(short, long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub minify: Option<bool>,
}

impl Cli {
    pub const fn build_args(&self) -> Option<&BuildArgs> {
        match &self.command {
            Commands::Build { build_args } => Some(build_args),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_build() {
        let cli = Cli::parse_from([
            "whenisdue",
            "build",
            "--minify",
            "--site-url",
            "https://example.com",
        ]);
        let args = cli.build_args().unwrap();
        assert_eq!(args.minify, Some(true));
        assert!(!args.clean);
        assert_eq!(cli.site_url.as_deref(), Some("https://example.com"));
    }

    #[test]
    fn test_parse_meta() {
        let cli = Cli::parse_from(["whenisdue", "-C", "site.toml", "meta", "gaming/x", "-p"]);
        assert_eq!(cli.config, PathBuf::from("site.toml"));
        assert!(cli.build_args().is_none());
        assert!(matches!(
            cli.command,
            Commands::Meta { ref slug, pretty: true } if slug == "gaming/x"
        ));
    }
}
