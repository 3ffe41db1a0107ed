//! Home page: site intro plus a link to every countdown page.

use super::layout::document;
use crate::config::SiteConfig;
use crate::page::CountdownPage;
use crate::seo::{PageMeta, jsonld};
use crate::utils::html::{escape, escape_attr};
use std::fmt::Write;

pub const HOME_DESCRIPTION: &str =
    "Simple countdown pages for upcoming events, releases, launches, and seasonal sales.";

const FEATURES: [(&str, &str); 4] = [
    ("Fast", "Minimal UI, minimal JavaScript, maximum crawlability."),
    ("Accurate", "One source of truth per page, with clear timezone behavior."),
    ("Shareable", "Clean titles and social cards for every page."),
    ("Expandable", "Easy to add more categories and pages without redesigning everything."),
];

pub fn render_home(pages: &[&CountdownPage], meta: &PageMeta, config: &SiteConfig) -> String {
    let website = jsonld::script_tag(
        "jsonld-website",
        &serde_json::json!({
            "@context": "https://schema.org",
            "@type": "WebSite",
            "name": config.site.name,
            "url": meta.base_url,
        }),
    );

    let mut body = String::with_capacity(2048);
    let _ = writeln!(
        body,
        "<header>\n<div class=\"eyebrow\">{}</div>\n<h1>Find out when something is due.</h1>\n<p class=\"muted\">{}</p>\n</header>",
        escape(&config.site.name.to_uppercase()),
        escape(&meta.description)
    );

    if !pages.is_empty() {
        body.push_str("<section class=\"card\" aria-label=\"Countdown pages\">\n<h2>Try a page</h2>\n<ul>\n");
        for page in pages {
            let _ = writeln!(
                body,
                "<li><a href=\"{}\">{}</a></li>",
                escape_attr(&page.slug.url_path()),
                escape(&page.heading)
            );
        }
        body.push_str("</ul>\n</section>\n");
    }

    body.push_str("<section aria-label=\"What you can expect\">\n<h2>What you can expect</h2>\n<div class=\"grid\">\n");
    for (title, text) in FEATURES {
        let _ = writeln!(
            body,
            "<div class=\"card\">\n<strong>{title}</strong>\n<p class=\"muted\">{text}</p>\n</div>"
        );
    }
    body.push_str("</div>\n</section>\n");

    document(config, meta, &format!("{website}\n"), &body)
}
