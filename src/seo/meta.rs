//! Resolved page metadata and `<head>` tag rendering.
//!
//! [`PageMeta`] is computed per render from the base URL and the manifest.
//! It is never cached or persisted.

use super::manifest::{ManifestError, ManifestSource, resolve_absolute_og_image};
use crate::config::{OgSection, SiteSection};
use crate::core::Slug;
use crate::utils::html::{escape, escape_attr};
use serde::Serialize;
use std::fmt::Write;

/// Text inputs for metadata resolution.
#[derive(Debug, Clone, Copy)]
pub struct PageText<'a> {
    pub slug: &'a Slug,
    /// Document `<title>`.
    pub title: &'a str,
    /// `og:title` / `twitter:title`.
    pub og_title: &'a str,
    pub description: &'a str,
}

/// Metadata handed to the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageMeta {
    pub slug: Slug,
    pub title: String,
    pub og_title: String,
    pub description: String,
    pub base_url: String,
    pub canonical_url: String,
    /// Absolute social-card URL; `None` when the manifest has no entry.
    pub og_image: Option<String>,
}

impl PageMeta {
    /// Resolve canonical and social-card URLs for a page.
    ///
    /// Fails only when the manifest cannot be loaded.
    pub fn resolve<S>(
        text: PageText<'_>,
        base_url: &str,
        manifest: &S,
        fallback_image: Option<&str>,
    ) -> Result<Self, ManifestError>
    where
        S: ManifestSource + ?Sized,
    {
        let og_image = resolve_absolute_og_image(text.slug, base_url, manifest, fallback_image)?;

        Ok(Self {
            slug: text.slug.clone(),
            title: text.title.to_string(),
            og_title: text.og_title.to_string(),
            description: text.description.to_string(),
            base_url: base_url.to_string(),
            canonical_url: text.slug.canonical_url(base_url),
            og_image,
        })
    }

    /// Render title, description, canonical, Open Graph and Twitter tags.
    pub fn head_tags(&self, site: &SiteSection, og: &OgSection) -> String {
        let mut head = String::with_capacity(1024);

        let _ = writeln!(head, "<title>{}</title>", escape(&self.title));
        meta_name(&mut head, "description", &self.description);
        let _ = writeln!(
            head,
            r#"<link rel="canonical" href="{}">"#,
            escape_attr(&self.canonical_url)
        );

        meta_property(&mut head, "og:type", "website");
        meta_property(&mut head, "og:site_name", &site.name);
        if !site.language.is_empty() {
            meta_property(&mut head, "og:locale", &site.language);
        }
        meta_property(&mut head, "og:title", &self.og_title);
        meta_property(&mut head, "og:description", &self.description);
        meta_property(&mut head, "og:url", &self.canonical_url);
        if let Some(image) = &self.og_image {
            meta_property(&mut head, "og:image", image);
            meta_property(&mut head, "og:image:width", &og.width.to_string());
            meta_property(&mut head, "og:image:height", &og.height.to_string());
        }

        meta_name(&mut head, "twitter:card", &og.twitter_card);
        meta_name(&mut head, "twitter:title", &self.og_title);
        meta_name(&mut head, "twitter:description", &self.description);
        if let Some(image) = &self.og_image {
            meta_name(&mut head, "twitter:image", image);
        }

        head
    }
}

fn meta_name(head: &mut String, name: &str, content: &str) {
    let _ = writeln!(
        head,
        r#"<meta name="{}" content="{}">"#,
        name,
        escape_attr(content)
    );
}

fn meta_property(head: &mut String, property: &str, content: &str) {
    let _ = writeln!(
        head,
        r#"<meta property="{}" content="{}">"#,
        property,
        escape_attr(content)
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seo::OgManifest;

    const BASE: &str = "https://whenisdue.com";

    fn manifest() -> OgManifest {
        [(
            "gaming/steam-summer-sale-2026".to_string(),
            "/assets/og/x.png".to_string(),
        )]
        .into_iter()
        .collect()
    }

    fn resolve(slug: &Slug) -> PageMeta {
        let text = PageText {
            slug,
            title: "Steam Summer Sale 2026 | WhenIsDue",
            og_title: "Steam Summer Sale 2026",
            description: "Confirmed date details & a live countdown.",
        };
        PageMeta::resolve(text, BASE, &manifest(), None).unwrap()
    }

    #[test]
    fn test_resolve_urls() {
        let meta = resolve(&Slug::new("gaming/steam-summer-sale-2026"));
        assert_eq!(
            meta.canonical_url,
            "https://whenisdue.com/gaming/steam-summer-sale-2026"
        );
        assert_eq!(
            meta.og_image.as_deref(),
            Some("https://whenisdue.com/assets/og/x.png")
        );
    }

    #[test]
    fn test_head_tags() {
        let meta = resolve(&Slug::new("gaming/steam-summer-sale-2026"));
        let head = meta.head_tags(&SiteSection::default(), &OgSection::default());

        assert!(head.contains("<title>Steam Summer Sale 2026 | WhenIsDue</title>"));
        assert!(head.contains(
            r#"<link rel="canonical" href="https://whenisdue.com/gaming/steam-summer-sale-2026">"#
        ));
        assert!(head.contains(
            r#"<meta property="og:image" content="https://whenisdue.com/assets/og/x.png">"#
        ));
        assert!(head.contains(r#"<meta property="og:image:width" content="1200">"#));
        assert!(head.contains(r#"<meta property="og:image:height" content="630">"#));
        assert!(head.contains(r#"<meta name="twitter:card" content="summary_large_image">"#));
        assert!(head.contains(r#"<meta name="twitter:title" content="Steam Summer Sale 2026">"#));
        // Attribute values are escaped
        assert!(head.contains("details &amp; a live countdown"));
    }

    #[test]
    fn test_head_tags_without_image() {
        let meta = resolve(&Slug::new("unknown/slug"));
        assert!(meta.og_image.is_none());

        let head = meta.head_tags(&SiteSection::default(), &OgSection::default());
        assert!(!head.contains("og:image"));
        assert!(!head.contains("twitter:image"));
        assert!(head.contains(r#"<meta property="og:url""#));
    }

    #[test]
    fn test_resolve_propagates_manifest_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let source = crate::seo::FileManifest::under_root(dir.path());
        let slug = Slug::new("gaming/steam-summer-sale-2026");
        let text = PageText {
            slug: &slug,
            title: "t",
            og_title: "t",
            description: "d",
        };

        assert!(PageMeta::resolve(text, BASE, &source, None).is_err());
    }
}
