//! `meta` command: print the resolved metadata of one page.

use crate::{
    config::SiteConfig,
    core::{SiteEnv, Slug},
    page,
    render::{home_meta, page_meta},
    seo::PageMeta,
};
use anyhow::{Context, Result, bail};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct MetaOutput {
    #[serde(flatten)]
    meta: PageMeta,
    base_url_source: String,
}

pub fn run_meta(config: &SiteConfig, slug: &str, pretty: bool) -> Result<()> {
    let env = config.site_env();
    let meta = resolve_meta(config, &env, &Slug::new(slug))?;

    let output = MetaOutput {
        meta,
        base_url_source: env.source().to_string(),
    };
    let json = if pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };
    println!("{json}");
    Ok(())
}

/// Resolve metadata for `slug` against explicit environment candidates.
pub fn resolve_meta(config: &SiteConfig, env: &SiteEnv, slug: &Slug) -> Result<PageMeta> {
    let base_url = config.base_url_for(env);
    let manifest = config.manifest();

    if slug.is_home() {
        return Ok(home_meta(config, &base_url, &manifest)?);
    }

    let sources = page::load_pages(&config.build.content)?;
    let Some(source) = sources.iter().find(|s| &s.page.slug == slug) else {
        bail!("no page with slug `{}`", slug);
    };

    page_meta(&source.page, config, &base_url, &manifest)
        .with_context(|| format!("Failed to resolve metadata for `{}`", slug))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use crate::seo::DEFAULT_MANIFEST_PATH;
    use std::fs;
    use tempfile::TempDir;

    fn site() -> TempDir {
        let dir = TempDir::new().unwrap();
        let page = dir.path().join("content/gaming/steam-summer-sale-2026.toml");
        fs::create_dir_all(page.parent().unwrap()).unwrap();
        fs::write(&page, "heading = \"Steam Summer Sale 2026\"\ndescription = \"D\"\n").unwrap();

        let manifest = dir.path().join(DEFAULT_MANIFEST_PATH);
        fs::create_dir_all(manifest.parent().unwrap()).unwrap();
        fs::write(
            manifest,
            r#"{"gaming/steam-summer-sale-2026": "/assets/og/x.png"}"#,
        )
        .unwrap();
        dir
    }

    #[test]
    fn test_resolve_meta_with_platform_host() {
        let dir = site();
        let config = test_parse_config("", dir.path());
        let env = SiteEnv {
            override_url: None,
            platform_hostname: Some("foo.vercel.app".into()),
        };

        let meta = resolve_meta(&config, &env, &Slug::new("/gaming/steam-summer-sale-2026/"))
            .unwrap();
        assert_eq!(
            meta.canonical_url,
            "https://foo.vercel.app/gaming/steam-summer-sale-2026"
        );
        assert_eq!(
            meta.og_image.as_deref(),
            Some("https://foo.vercel.app/assets/og/x.png")
        );
    }

    #[test]
    fn test_resolve_meta_unknown_slug() {
        let dir = site();
        let config = test_parse_config("", dir.path());

        let err = resolve_meta(&config, &SiteEnv::default(), &Slug::new("unknown/slug"))
            .unwrap_err();
        assert!(err.to_string().contains("unknown/slug"));
    }

    #[test]
    fn test_resolve_meta_home() {
        let dir = site();
        let config = test_parse_config("", dir.path());

        let meta = resolve_meta(&config, &SiteEnv::default(), &Slug::new("/")).unwrap();
        assert_eq!(meta.canonical_url, "https://whenisdue.com");
        assert!(meta.og_image.is_none());
    }
}
