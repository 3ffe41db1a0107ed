//! Static page rendering.
//!
//! Each render resolves its own metadata (base URL + fresh manifest read)
//! and produces a complete HTML document. Renders share nothing mutable, so
//! the build runs them in parallel.

mod countdown;
mod home;
mod layout;

pub use countdown::render_countdown;
pub use home::{HOME_DESCRIPTION, render_home};

use crate::config::SiteConfig;
use crate::core::Slug;
use crate::page::CountdownPage;
use crate::seo::{ManifestError, ManifestSource, PageMeta, PageText};
use crate::utils::html::minify;

/// Output of one page render.
#[derive(Debug, Clone)]
pub struct RenderedPage {
    pub slug: Slug,
    pub meta: PageMeta,
    pub html: String,
}

/// Resolve metadata for a countdown page.
pub fn page_meta<S>(
    page: &CountdownPage,
    config: &SiteConfig,
    base_url: &str,
    manifest: &S,
) -> Result<PageMeta, ManifestError>
where
    S: ManifestSource + ?Sized,
{
    let title = page.document_title(&config.site.name);
    let text = PageText {
        slug: &page.slug,
        title: &title,
        og_title: page.social_title(),
        description: &page.description,
    };
    PageMeta::resolve(text, base_url, manifest, config.og.fallback_image.as_deref())
}

/// Resolve metadata for the home page (manifest key is the empty slug).
pub fn home_meta<S>(
    config: &SiteConfig,
    base_url: &str,
    manifest: &S,
) -> Result<PageMeta, ManifestError>
where
    S: ManifestSource + ?Sized,
{
    let slug = Slug::home();
    let text = PageText {
        slug: &slug,
        title: &config.site.name,
        og_title: &config.site.name,
        description: HOME_DESCRIPTION,
    };
    PageMeta::resolve(text, base_url, manifest, config.og.fallback_image.as_deref())
}

/// Render one countdown page. A manifest failure aborts this page.
pub fn render_page<S>(
    page: &CountdownPage,
    config: &SiteConfig,
    base_url: &str,
    manifest: &S,
) -> Result<RenderedPage, ManifestError>
where
    S: ManifestSource + ?Sized,
{
    let meta = page_meta(page, config, base_url, manifest)?;
    let html = finish(render_countdown(page, &meta, config), config);
    Ok(RenderedPage {
        slug: page.slug.clone(),
        meta,
        html,
    })
}

/// Render the home page listing `pages`.
pub fn render_home_page<S>(
    pages: &[&CountdownPage],
    config: &SiteConfig,
    base_url: &str,
    manifest: &S,
) -> Result<RenderedPage, ManifestError>
where
    S: ManifestSource + ?Sized,
{
    let meta = home_meta(config, base_url, manifest)?;
    let html = finish(render_home(pages, &meta, config), config);
    Ok(RenderedPage {
        slug: Slug::home(),
        meta,
        html,
    })
}

fn finish(html: String, config: &SiteConfig) -> String {
    if config.build.minify { minify(&html) } else { html }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use crate::seo::{FileManifest, OgManifest};
    use tempfile::TempDir;

    fn steam() -> CountdownPage {
        toml::from_str(
            "slug = \"gaming/steam-summer-sale-2026\"\nheading = \"Steam Summer Sale 2026\"\ndescription = \"D\"\n",
        )
        .unwrap()
    }

    #[test]
    fn test_page_meta_uses_fallback_image() {
        let dir = TempDir::new().unwrap();
        let config = test_parse_config(
            "[og]\nfallback_image = \"/assets/og/default.png\"\n",
            dir.path(),
        );

        let meta = page_meta(
            &steam(),
            &config,
            "https://whenisdue.com",
            &OgManifest::default(),
        )
        .unwrap();
        assert_eq!(
            meta.og_image.as_deref(),
            Some("https://whenisdue.com/assets/og/default.png")
        );
        assert_eq!(meta.title, "Steam Summer Sale 2026 | WhenIsDue");
    }

    #[test]
    fn test_render_page_fails_without_manifest() {
        let dir = TempDir::new().unwrap();
        let config = test_parse_config("", dir.path());

        let err = render_page(
            &steam(),
            &config,
            "https://whenisdue.com",
            &FileManifest::new(&config.og.manifest),
        )
        .unwrap_err();
        assert!(matches!(err, ManifestError::Io(..)));
    }

    #[test]
    fn test_render_page_minified() {
        let dir = TempDir::new().unwrap();
        let config = test_parse_config("[build]\nminify = true\n", dir.path());

        let rendered = render_page(
            &steam(),
            &config,
            "https://whenisdue.com",
            &OgManifest::default(),
        )
        .unwrap();
        assert!(!rendered.html.contains('\n'));
        assert!(rendered.html.contains("<h1>Steam Summer Sale 2026</h1>"));
    }

    #[test]
    fn test_home_meta() {
        let dir = TempDir::new().unwrap();
        let config = test_parse_config("", dir.path());

        let meta = home_meta(&config, "https://foo.vercel.app", &OgManifest::default()).unwrap();
        assert_eq!(meta.canonical_url, "https://foo.vercel.app");
        assert_eq!(meta.title, "WhenIsDue");
    }
}
