//! schema.org structured data (JSON-LD).

use serde_json::{Value, json};

const SCHEMA_CONTEXT: &str = "https://schema.org";

/// `WebPage` belonging to the site's `WebSite`.
pub fn web_page(
    name: &str,
    url: &str,
    description: &str,
    site_name: &str,
    site_url: &str,
) -> Value {
    json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "WebPage",
        "name": name,
        "url": url,
        "description": description,
        "isPartOf": {
            "@type": "WebSite",
            "name": site_name,
            "url": site_url,
        },
    })
}

/// `FAQPage` from question/answer pairs.
pub fn faq_page<'a>(items: impl IntoIterator<Item = (&'a str, &'a str)>) -> Value {
    let entities: Vec<Value> = items
        .into_iter()
        .map(|(question, answer)| {
            json!({
                "@type": "Question",
                "name": question,
                "acceptedAnswer": {
                    "@type": "Answer",
                    "text": answer,
                },
            })
        })
        .collect();

    json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "FAQPage",
        "mainEntity": entities,
    })
}

/// Render a `<script type="application/ld+json">` block.
///
/// `<` is emitted as `\u003c` so text content can never close the script
/// element early.
pub fn script_tag(id: &str, data: &Value) -> String {
    let json = data.to_string().replace('<', "\\u003c");
    format!(
        r#"<script id="{}" type="application/ld+json">{}</script>"#,
        crate::utils::html::escape_attr(id),
        json
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_web_page() {
        let value = web_page(
            "Steam Summer Sale 2026",
            "https://whenisdue.com/gaming/steam-summer-sale-2026",
            "Live countdown.",
            "WhenIsDue",
            "https://whenisdue.com",
        );
        assert_eq!(value["@type"], "WebPage");
        assert_eq!(value["isPartOf"]["@type"], "WebSite");
        assert_eq!(value["isPartOf"]["url"], "https://whenisdue.com");
        // preserve_order keeps @context first
        assert!(value.to_string().starts_with(r#"{"@context":"https://schema.org""#));
    }

    #[test]
    fn test_faq_page() {
        let value = faq_page([("Q1?", "A1."), ("Q2?", "A2.")]);
        assert_eq!(value["@type"], "FAQPage");
        assert_eq!(value["mainEntity"].as_array().unwrap().len(), 2);
        assert_eq!(value["mainEntity"][1]["name"], "Q2?");
        assert_eq!(value["mainEntity"][1]["acceptedAnswer"]["text"], "A2.");
    }

    #[test]
    fn test_faq_page_empty() {
        let value = faq_page(std::iter::empty());
        assert_eq!(value["mainEntity"], json!([]));
    }

    #[test]
    fn test_script_tag_escapes_closing_tag() {
        let value = faq_page([("</script><b>", "ok")]);
        let tag = script_tag("jsonld-faq", &value);

        assert!(tag.starts_with(r#"<script id="jsonld-faq" type="application/ld+json">"#));
        assert_eq!(tag.matches("</script>").count(), 1);
        assert!(tag.contains(r"\u003c/script>"));

        // Still valid JSON after escaping
        let inner = tag
            .trim_start_matches(r#"<script id="jsonld-faq" type="application/ld+json">"#)
            .trim_end_matches("</script>");
        let parsed: Value = serde_json::from_str(inner).unwrap();
        assert_eq!(parsed["mainEntity"][0]["name"], "</script><b>");
    }
}
