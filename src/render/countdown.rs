//! Countdown landing page body.
//!
//! Sections, top to bottom: hero, countdown slot, key details, what to
//! expect, FAQ, related pages. Empty sections are left out. The countdown
//! widget itself is client-side and mounts into `#countdown`.

use super::layout::document;
use crate::config::SiteConfig;
use crate::page::CountdownPage;
use crate::seo::{PageMeta, jsonld};
use crate::utils::html::{escape, escape_attr};
use std::fmt::Write;

/// Render a complete countdown page.
pub fn render_countdown(page: &CountdownPage, meta: &PageMeta, config: &SiteConfig) -> String {
    let head = structured_data(page, meta, config);
    let body = body(page, meta, config);
    document(config, meta, &head, &body)
}

fn structured_data(page: &CountdownPage, meta: &PageMeta, config: &SiteConfig) -> String {
    let id = page.slug.to_id();
    let mut head = String::new();

    let web_page = jsonld::web_page(
        page.social_title(),
        &meta.canonical_url,
        &page.description,
        &config.site.name,
        &meta.base_url,
    );
    head.push_str(&jsonld::script_tag(&format!("jsonld-webpage-{id}"), &web_page));
    head.push('\n');

    if !page.faq.is_empty() {
        let faq = jsonld::faq_page(
            page.faq
                .iter()
                .map(|item| (item.question.as_str(), item.answer.as_str())),
        );
        head.push_str(&jsonld::script_tag(&format!("jsonld-faq-{id}"), &faq));
        head.push('\n');
    }

    head
}

fn body(page: &CountdownPage, meta: &PageMeta, config: &SiteConfig) -> String {
    let mut html = String::with_capacity(4096);

    // Hero
    let _ = writeln!(
        html,
        "<header>\n<div class=\"eyebrow\">{}</div>\n<h1>{}</h1>\n<p class=\"muted\">{}</p>\n</header>",
        escape(&config.site.name.to_uppercase()),
        escape(&page.heading),
        escape(page.hero_text())
    );

    // Countdown slot
    let _ = writeln!(
        html,
        r#"<section class="card" aria-label="Countdown">
<h2>Countdown</h2>
<div id="countdown">
<div class="muted">Status</div>
<div>{status}</div>
</div>
<p class="muted">Canonical URL: <a href="{href}">{text}</a></p>
</section>"#,
        status = escape(&page.status),
        href = escape_attr(&meta.canonical_url),
        text = escape(&meta.canonical_url)
    );

    if !page.details.is_empty() {
        html.push_str("<section aria-label=\"Key information\">\n<h2>Key details</h2>\n<div class=\"grid\">\n");
        for card in &page.details {
            let _ = writeln!(
                html,
                "<div class=\"card\">\n<strong>{}</strong>\n<p class=\"muted\">{}</p>\n</div>",
                escape(&card.title),
                escape(&card.body)
            );
        }
        html.push_str("</div>\n</section>\n");
    }

    if !page.expectations.is_empty() {
        html.push_str("<section aria-label=\"What to expect\">\n<h2>What to expect</h2>\n<ul>\n");
        for item in &page.expectations {
            let _ = writeln!(html, "<li>{}</li>", escape(item));
        }
        html.push_str("</ul>\n</section>\n");
    }

    if !page.faq.is_empty() {
        html.push_str("<section aria-label=\"Frequently asked questions\">\n<h2>FAQ</h2>\n");
        for item in &page.faq {
            let _ = writeln!(
                html,
                "<details class=\"card\">\n<summary>{}</summary>\n<p>{}</p>\n</details>",
                escape(&item.question),
                escape(&item.answer)
            );
        }
        html.push_str("</section>\n");
    }

    if !page.related.is_empty() {
        html.push_str("<section aria-label=\"More countdown pages\">\n<h2>More countdown pages</h2>\n<div class=\"grid\">\n");
        for link in &page.related {
            let _ = writeln!(
                html,
                "<a class=\"card\" href=\"{}\">{} →</a>",
                escape_attr(&link.href),
                escape(&link.title)
            );
        }
        html.push_str("</div>\n</section>\n");
    }

    html
}
