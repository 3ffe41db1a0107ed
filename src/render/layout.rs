//! Shared document shell.

use crate::config::SiteConfig;
use crate::seo::PageMeta;
use crate::utils::html::{escape, escape_attr};
use std::fmt::Write;

const STYLE: &str = r#"
:root { color-scheme: dark; }
* { box-sizing: border-box; }
body { margin: 0; background: #000; color: #fff; font-family: system-ui, -apple-system, "Segoe UI", sans-serif; line-height: 1.5; }
a { color: inherit; }
.container { margin: 0 auto; max-width: 56rem; padding: 3rem 1.5rem; }
.eyebrow { font-size: .75rem; letter-spacing: .25em; color: #9ca3af; }
.muted { color: #9ca3af; font-size: .875rem; }
.card { border: 1px solid rgba(255,255,255,.1); background: rgba(255,255,255,.05); border-radius: 1rem; padding: 1.25rem; }
.grid { display: grid; gap: 1rem; }
@media (min-width: 640px) { .grid { grid-template-columns: 1fr 1fr; } }
section { margin-bottom: 3rem; }
#countdown { margin-top: 1.25rem; border: 1px solid rgba(255,255,255,.1); background: rgba(0,0,0,.4); border-radius: .75rem; padding: 1.25rem; }
summary { cursor: pointer; font-weight: 600; }
footer { border-top: 1px solid rgba(255,255,255,.1); padding-top: 2rem; font-size: .75rem; color: #6b7280; }
"#;

/// Wrap `body` in a complete HTML document.
///
/// `head_extra` is inserted verbatim after the metadata tags (JSON-LD).
pub fn document(config: &SiteConfig, meta: &PageMeta, head_extra: &str, body: &str) -> String {
    let mut html = String::with_capacity(body.len() + 4096);

    html.push_str("<!DOCTYPE html>\n");
    if config.site.language.is_empty() {
        html.push_str("<html>\n");
    } else {
        let _ = writeln!(html, r#"<html lang="{}">"#, escape_attr(&config.site.language));
    }

    html.push_str("<head>\n<meta charset=\"utf-8\">\n");
    html.push_str(r#"<meta name="viewport" content="width=device-width, initial-scale=1">"#);
    html.push('\n');
    html.push_str(&meta.head_tags(&config.site, &config.og));
    html.push_str(head_extra);
    let _ = writeln!(html, "<style>{}</style>", STYLE.trim());
    html.push_str("</head>\n<body>\n<main>\n<div class=\"container\">\n");

    html.push_str(body);

    let _ = writeln!(
        html,
        "<footer>© {} {}. {}</footer>",
        config.site.copyright_year,
        escape(&config.site.name),
        escape(&config.site.tagline)
    );
    html.push_str("</div>\n</main>\n</body>\n</html>\n");

    html
}
