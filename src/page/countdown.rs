//! Countdown page definition.
//!
//! One `content/**/*.toml` file describes one landing page:
//!
//! ```toml
//! heading = "Steam Summer Sale 2026"
//! description = "Confirmed date details and a live countdown to the Steam Summer Sale 2026."
//!
//! [[faq]]
//! question = "When does the Steam Summer Sale 2026 start?"
//! answer = "This page tracks the confirmed start date once it's published."
//! ```

use crate::core::Slug;
use serde::{Deserialize, Serialize};

pub const DEFAULT_STATUS: &str = "Confirmed date and live countdown.";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountdownPage {
    /// Page slug; derived from the file path when omitted.
    #[serde(default = "Slug::home")]
    pub slug: Slug,

    /// Visible `<h1>` and default social title.
    pub heading: String,

    /// Document `<title>`; defaults to `"{heading} | {site name}"`.
    #[serde(default)]
    pub title: Option<String>,

    /// `og:title` / `twitter:title`; defaults to `heading`.
    #[serde(default)]
    pub og_title: Option<String>,

    /// Meta description, also used for social tags and JSON-LD.
    pub description: String,

    /// Hero paragraph; defaults to `description`.
    #[serde(default)]
    pub tagline: Option<String>,

    /// Text inside the countdown slot.
    #[serde(default = "default_status")]
    pub status: String,

    /// "Key details" cards.
    #[serde(default)]
    pub details: Vec<DetailCard>,

    /// "What to expect" bullet points.
    #[serde(default)]
    pub expectations: Vec<String>,

    #[serde(default)]
    pub faq: Vec<FaqItem>,

    /// "More countdown pages" links.
    #[serde(default)]
    pub related: Vec<RelatedLink>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailCard {
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqItem {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelatedLink {
    pub title: String,
    pub href: String,
}

fn default_status() -> String {
    DEFAULT_STATUS.to_string()
}

impl CountdownPage {
    /// Document title, falling back to `"{heading} | {site_name}"`.
    pub fn document_title(&self, site_name: &str) -> String {
        self.title
            .clone()
            .unwrap_or_else(|| format!("{} | {}", self.heading, site_name))
    }

    pub fn social_title(&self) -> &str {
        self.og_title.as_deref().unwrap_or(&self.heading)
    }

    pub fn hero_text(&self) -> &str {
        self.tagline.as_deref().unwrap_or(&self.description)
    }
}
