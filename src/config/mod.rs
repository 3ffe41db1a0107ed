//! Site configuration management for `whenisdue.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # [site], [og], [build]
//! ├── types/         # ConfigError, ConfigDiagnostics, FieldPath
//! ├── util.rs        # config discovery, path normalization
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! # Sections
//!
//! | Section   | Purpose                                              |
//! |-----------|------------------------------------------------------|
//! | `[site]`  | Site name, fallback base URL, language, footer       |
//! | `[og]`    | Social-card manifest location, fallback image, sizes |
//! | `[build]` | Content/output directories, minification             |
//!
//! A missing config file is not an error: defaults apply and the current
//! directory becomes the site root.

pub mod section;
pub mod types;
mod util;

use util::{find_config_file, normalize_path};

pub use section::{BuildSection, OgSection, SiteSection, check_origin};
pub use types::{ConfigDiagnostics, ConfigError, FieldPath};

use crate::{
    cli::Cli,
    core::{SiteEnv, resolve_base_url_with},
    debug, log,
    seo::FileManifest,
};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing whenisdue.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// `--site-url` from the command line, takes the override's place
    #[serde(skip)]
    pub site_url: Option<String>,

    #[serde(default)]
    pub site: SiteSection,

    #[serde(default)]
    pub og: OgSection,

    #[serde(default)]
    pub build: BuildSection,
}

impl SiteConfig {
    /// Load configuration for a CLI invocation.
    ///
    /// Searches upward from cwd for the config file. The project root is the
    /// config file's parent directory, or cwd when there is none.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;

        let mut config = match find_config_file(&cli.config, &cwd) {
            Some(path) => {
                let mut config = Self::from_path(&path)?;
                let root = path.parent().map(Path::to_path_buf).unwrap_or(cwd);
                config.config_path = path;
                config.finalize(&root);
                debug!("config"; "loaded {}", config.config_path.display());
                config
            }
            None => {
                debug!("config"; "{} not found, using defaults", cli.config.display());
                let mut config = Self::default();
                config.finalize(&cwd);
                config
            }
        };

        config.apply_cli(cli);
        Ok(config)
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Toml)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Read(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Resolve relative paths against `root`.
    pub fn finalize(&mut self, root: &Path) {
        self.root = normalize_path(root, root);
        self.build.content = normalize_path(&self.build.content, &self.root);
        self.build.output = normalize_path(&self.build.output, &self.root);
        self.og.manifest = normalize_path(&self.og.manifest, &self.root);
    }

    /// Apply command-line overrides after paths were finalized.
    fn apply_cli(&mut self, cli: &Cli) {
        crate::logger::set_verbose(cli.verbose);

        if let Some(output) = &cli.output {
            self.build.output = normalize_path(output, &self.root);
        }
        if let Some(content) = &cli.content {
            self.build.content = normalize_path(content, &self.root);
        }
        if let Some(url) = &cli.site_url {
            self.site_url = Some(url.clone());
        }
        if let Some(args) = cli.build_args() {
            self.build.clean = args.clean;
            if let Some(minify) = args.minify {
                self.build.minify = minify;
            }
        }
    }

    /// Get path relative to the site root
    pub fn root_relative(&self, path: impl AsRef<Path>) -> PathBuf {
        path.as_ref()
            .strip_prefix(&self.root)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| path.as_ref().to_path_buf())
    }

    // ========================================================================
    // base URL and manifest
    // ========================================================================

    /// Environment candidates with `--site-url` applied on top.
    pub fn site_env(&self) -> SiteEnv {
        SiteEnv::from_env().with_override(self.site_url.clone())
    }

    /// Resolve the base URL for explicit candidates.
    pub fn base_url_for(&self, env: &SiteEnv) -> String {
        resolve_base_url_with(env, &self.site.fallback_url)
    }

    /// Manifest source for the configured manifest path.
    pub fn manifest(&self) -> FileManifest {
        FileManifest::new(&self.og.manifest)
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate the configuration, collecting all errors at once.
    pub fn validate(&self) -> Result<()> {
        let diag = self.diagnostics();
        diag.print_warnings();
        diag.into_result()
            .map_err(|e| ConfigError::Invalid(e).into())
    }

    /// Run every section check without printing.
    pub fn diagnostics(&self) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();
        self.site.validate(&mut diag);
        self.og.validate(&mut diag);
        self.build.validate(&mut diag);
        diag
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config and root it at `root`.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(content: &str, root: &Path) -> SiteConfig {
    let (mut parsed, ignored) = SiteConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed.finalize(root);
    parsed
}
