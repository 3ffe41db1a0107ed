//! `[og]` configuration: social-card manifest and tag defaults.

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::seo::DEFAULT_MANIFEST_PATH;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OgSection {
    /// Manifest path, relative to the site root.
    pub manifest: PathBuf,

    /// Site-relative image used for slugs missing from the manifest.
    /// Unset means such pages have no social image.
    pub fallback_image: Option<String>,

    /// Declared `og:image:width`.
    pub width: u32,

    /// Declared `og:image:height`.
    pub height: u32,

    /// `twitter:card` value.
    pub twitter_card: String,
}

pub struct OgFields {
    pub fallback_image: FieldPath,
    pub width: FieldPath,
    pub height: FieldPath,
    pub twitter_card: FieldPath,
}

impl Default for OgSection {
    fn default() -> Self {
        Self {
            manifest: DEFAULT_MANIFEST_PATH.into(),
            fallback_image: None,
            width: 1200,
            height: 630,
            twitter_card: "summary_large_image".into(),
        }
    }
}

impl OgSection {
    pub const FIELDS: OgFields = OgFields {
        fallback_image: FieldPath::new("og.fallback_image"),
        width: FieldPath::new("og.width"),
        height: FieldPath::new("og.height"),
        twitter_card: FieldPath::new("og.twitter_card"),
    };

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.width == 0 {
            diag.error(Self::FIELDS.width, "image width must be greater than 0");
        }
        if self.height == 0 {
            diag.error(Self::FIELDS.height, "image height must be greater than 0");
        }

        if let Some(image) = &self.fallback_image
            && !image.starts_with('/')
        {
            diag.error_with_hint(
                Self::FIELDS.fallback_image,
                "fallback image must be a site-relative path",
                format!("use \"/{}\"", image.trim_start_matches("./")),
            );
        }

        if !matches!(
            self.twitter_card.as_str(),
            "summary" | "summary_large_image" | "app" | "player"
        ) {
            diag.error_with_hint(
                Self::FIELDS.twitter_card,
                format!("unknown card type '{}'", self.twitter_card),
                "use summary or summary_large_image",
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let og = OgSection::default();
        assert_eq!(og.manifest, PathBuf::from(DEFAULT_MANIFEST_PATH));
        assert_eq!((og.width, og.height), (1200, 630));
        assert!(og.fallback_image.is_none());

        let mut diag = ConfigDiagnostics::new();
        og.validate(&mut diag);
        assert!(!diag.has_errors());
    }

    #[test]
    fn test_relative_fallback_rejected() {
        let og = OgSection {
            fallback_image: Some("assets/og/default.png".into()),
            ..Default::default()
        };
        let mut diag = ConfigDiagnostics::new();
        og.validate(&mut diag);
        assert_eq!(diag.len(), 1);
        assert_eq!(
            diag.errors()[0].hint.as_deref(),
            Some("use \"/assets/og/default.png\"")
        );
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        let og = OgSection {
            width: 0,
            height: 0,
            ..Default::default()
        };
        let mut diag = ConfigDiagnostics::new();
        og.validate(&mut diag);
        assert_eq!(diag.len(), 2);
    }

    #[test]
    fn test_unknown_twitter_card_rejected() {
        let og = OgSection {
            twitter_card: "huge".into(),
            ..Default::default()
        };
        let mut diag = ConfigDiagnostics::new();
        og.validate(&mut diag);
        assert!(diag.errors()[0].message.contains("huge"));
    }
}
