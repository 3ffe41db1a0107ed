//! `check` command: validate everything a build depends on, write nothing.
//!
//! | Check                                  | Severity                 |
//! |----------------------------------------|--------------------------|
//! | config sections                        | error                    |
//! | page definitions load                  | error                    |
//! | manifest readable and well-formed      | error                    |
//! | page slug missing from manifest        | warning (error `strict`) |
//! | manifest path without leading `/`      | warning                  |
//! | override URL not a bare http(s) origin | warning                  |

use crate::{
    config::{ConfigDiagnostics, FieldPath, SiteConfig, check_origin},
    core::{BaseUrlSource, ENV_SITE_URL, SiteEnv},
    log, page,
    seo::ManifestSource,
};
use anyhow::{Result, bail};

#[derive(Debug, Default)]
pub struct CheckReport {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl CheckReport {
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }
}

pub fn run_check(config: &SiteConfig, strict: bool) -> Result<()> {
    let env = config.site_env();
    let report = collect(config, &env, strict);

    log!("check"; "base url {} (from {})", config.base_url_for(&env), env.source());
    for warning in &report.warnings {
        log!("warning"; "{}", warning);
    }
    for error in &report.errors {
        log!("error"; "{}", error);
    }

    if !report.is_ok() {
        bail!(
            "check failed with {} error{}",
            report.errors.len(),
            if report.errors.len() == 1 { "" } else { "s" }
        );
    }
    log!("done"; "all checks passed");
    Ok(())
}

/// Run every check and collect the findings.
pub fn collect(config: &SiteConfig, env: &SiteEnv, strict: bool) -> CheckReport {
    let mut report = CheckReport::default();

    let diag = config.diagnostics();
    report
        .errors
        .extend(diag.errors().iter().map(|d| format!("[{}] {}", d.field.as_str(), d.message)));
    report
        .warnings
        .extend(diag.warnings().iter().map(|d| format!("[{}] {}", d.field.as_str(), d.message)));

    // The override is used verbatim; only report what looks wrong
    if env.source() == BaseUrlSource::Override
        && let Some(url) = &env.override_url
    {
        let mut url_diag = ConfigDiagnostics::new();
        check_origin(FieldPath::new(ENV_SITE_URL), url, &mut url_diag);
        report
            .warnings
            .extend(url_diag.errors().iter().map(|d| format!("[{}] {}", d.field.as_str(), d.message)));
    }

    let pages = match page::load_pages(&config.build.content) {
        Ok(pages) => pages,
        Err(e) => {
            report.errors.push(format!("{:#}", anyhow::Error::from(e)));
            Vec::new()
        }
    };

    let manifest = match config.manifest().load() {
        Ok(manifest) => manifest,
        Err(e) => {
            report.errors.push(format!("{:#}", anyhow::Error::from(e)));
            return report;
        }
    };

    for source in &pages {
        let slug = source.page.slug.as_str();
        if !manifest.contains(slug) {
            let message = if config.og.fallback_image.is_some() {
                format!("`{slug}` missing from manifest, fallback image used")
            } else {
                format!("`{slug}` missing from manifest, page has no social image")
            };
            if strict {
                report.errors.push(message);
            } else {
                report.warnings.push(message);
            }
        }
    }

    let mut relative: Vec<_> = manifest
        .iter()
        .filter(|(_, path)| !path.starts_with('/'))
        .map(|(slug, path)| format!("manifest entry `{slug}` = \"{path}\" has no leading `/`"))
        .collect();
    relative.sort();
    report.warnings.extend(relative);

    report
}
