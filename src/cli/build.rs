//! Site building orchestration.
//!
//! Build pipeline phases:
//! - **Collect** - Load page definitions from the content directory
//! - **Resolve** - Base URL from environment / `--site-url` / fallback
//! - **Render** - Parallel page rendering (each render reads the manifest)
//! - **Clean** - Optionally remove pages recorded by earlier builds
//! - **Write** - Write every page, only after all renders succeeded
//!
//! Each build records the slugs it wrote in `RENDERED_RECORD` inside the
//! output directory. `--clean` only ever deletes pages listed there, so
//! hand-written files and generated assets under the output directory stay.

use crate::{
    config::SiteConfig,
    core::Slug,
    debug, log,
    logger::ProgressLine,
    page::{self, PageSource},
    render::{RenderedPage, render_home_page, render_page},
};
use anyhow::{Context, Result};
use rayon::prelude::*;
use std::{collections::BTreeSet, fs, path::Path};

/// Slugs written by previous builds, relative to the output directory.
pub const RENDERED_RECORD: &str = ".whenisdue-rendered.json";

/// Summary of a finished build.
#[derive(Debug)]
pub struct BuildReport {
    pub pages: usize,
    pub without_image: Vec<String>,
}

/// Render every page and write it under the output directory.
pub fn build_site(config: &SiteConfig) -> Result<BuildReport> {
    let sources = page::load_pages(&config.build.content).with_context(|| {
        format!(
            "Failed to load pages from {}",
            config.root_relative(&config.build.content).display()
        )
    })?;

    let env = config.site_env();
    let base_url = config.base_url_for(&env);
    debug!("build"; "base url {} (from {})", base_url, env.source());

    let rendered = render_all(config, &sources, &base_url)?;

    let output = &config.build.output;
    let previous = read_record(output)?;
    if config.build.clean {
        clean_rendered(output, &previous)?;
    }
    for page in &rendered {
        write_page(config, page)?;
    }

    let mut record: BTreeSet<Slug> = rendered.iter().map(|p| p.slug.clone()).collect();
    if !config.build.clean {
        record.extend(previous);
    }
    write_record(output, &record)?;

    let without_image: Vec<String> = rendered
        .iter()
        .filter(|p| p.meta.og_image.is_none() && !p.slug.is_home())
        .map(|p| p.slug.to_string())
        .collect();
    for slug in &without_image {
        log!("warning"; "no social image for `{}` in manifest", slug);
    }

    log!(
        "build";
        "{} page{} written to {}",
        rendered.len(),
        if rendered.len() == 1 { "" } else { "s" },
        config.root_relative(&config.build.output).display()
    );

    Ok(BuildReport {
        pages: rendered.len(),
        without_image,
    })
}

/// Render countdown pages in parallel, then the home page.
///
/// Any manifest failure aborts the whole build before anything is written.
fn render_all(
    config: &SiteConfig,
    sources: &[PageSource],
    base_url: &str,
) -> Result<Vec<RenderedPage>> {
    let manifest = config.manifest();
    debug!("build"; "og manifest {}", config.root_relative(manifest.path()).display());
    let progress = ProgressLine::new("render", sources.len() + 1);

    let mut rendered = sources
        .par_iter()
        .map(|source| {
            let page = render_page(&source.page, config, base_url, &manifest).with_context(|| {
                format!(
                    "Failed to render {}",
                    config.root_relative(&source.path).display()
                )
            });
            progress.inc();
            page
        })
        .collect::<Result<Vec<_>>>()?;

    let pages: Vec<_> = sources.iter().map(|s| &s.page).collect();
    let home = render_home_page(&pages, config, base_url, &manifest)
        .context("Failed to render home page")?;
    progress.inc();
    rendered.push(home);

    progress.finish();
    Ok(rendered)
}

fn write_page(config: &SiteConfig, page: &RenderedPage) -> Result<()> {
    let path = config.build.output.join(page.slug.output_file());
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(&path, &page.html)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    debug!("write"; "{}", config.root_relative(&path).display());
    Ok(())
}

/// Slugs recorded by the last build; empty when there is no record.
fn read_record(output: &Path) -> Result<Vec<Slug>> {
    let path = output.join(RENDERED_RECORD);
    if !path.is_file() {
        return Ok(Vec::new());
    }
    let content =
        fs::read_to_string(&path).with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))
}

fn write_record(output: &Path, slugs: &BTreeSet<Slug>) -> Result<()> {
    let path = output.join(RENDERED_RECORD);
    fs::create_dir_all(output).with_context(|| format!("Failed to create {}", output.display()))?;
    let json = serde_json::to_string_pretty(slugs)?;
    fs::write(&path, json).with_context(|| format!("Failed to write {}", path.display()))
}

/// Remove pages written by earlier builds, then any directories they leave empty.
///
/// The output directory also holds static assets (including the og
/// manifest), so nothing outside the record is touched.
fn clean_rendered(output: &Path, previous: &[Slug]) -> Result<()> {
    let mut removed = 0;

    for slug in previous {
        if slug.has_dot_segment() {
            log!("warning"; "ignoring recorded slug `{}` outside the output directory", slug);
            continue;
        }

        let path = output.join(slug.output_file());
        if !path.is_file() {
            continue;
        }
        fs::remove_file(&path).with_context(|| format!("Failed to remove {}", path.display()))?;
        removed += 1;

        // Stop at the first directory that still has content
        let mut dir = path.parent();
        while let Some(current) = dir {
            if current == output || fs::remove_dir(current).is_err() {
                break;
            }
            dir = current.parent();
        }
    }

    debug!("clean"; "removed {} rendered pages", removed);
    Ok(())
}
