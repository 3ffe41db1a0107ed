//! `[site]` configuration.
//!
//! Site identity and the last-resort base URL.

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::core::DEFAULT_BASE_URL;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSection {
    /// Site name, shown in the hero eyebrow, footer and `og:site_name`.
    pub name: String,

    /// Base URL used when neither the override nor a platform hostname is set.
    pub fallback_url: String,

    /// Language code for `<html lang>` and `og:locale`.
    pub language: String,

    /// Footer tagline after the copyright year.
    pub tagline: String,

    /// Copyright year shown in the footer.
    pub copyright_year: u16,
}

pub struct SiteFields {
    pub name: FieldPath,
    pub fallback_url: FieldPath,
    pub language: FieldPath,
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            name: "WhenIsDue".into(),
            fallback_url: DEFAULT_BASE_URL.into(),
            language: "en".into(),
            tagline: "Built for speed and clarity.".into(),
            copyright_year: 2026,
        }
    }
}

impl SiteSection {
    pub const FIELDS: SiteFields = SiteFields {
        name: FieldPath::new("site.name"),
        fallback_url: FieldPath::new("site.fallback_url"),
        language: FieldPath::new("site.language"),
    };

    /// Validate `[site]`.
    ///
    /// # Checks
    /// - `name` is not empty
    /// - `fallback_url` is an absolute http(s) URL with a host
    /// - `fallback_url` has no path, so `base + "/" + slug` stays well-formed
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.name.trim().is_empty() {
            diag.error(Self::FIELDS.name, "site name must not be empty");
        }

        if self.language.trim().is_empty() {
            diag.warn(Self::FIELDS.language, "empty language, `lang` attribute omitted");
        }

        check_origin(Self::FIELDS.fallback_url, &self.fallback_url, diag);
    }
}

/// Report problems with an origin URL (`https://host[:port]`).
pub fn check_origin(field: FieldPath, value: &str, diag: &mut ConfigDiagnostics) {
    const HINT: &str = "use format like https://example.com";

    let parsed = match url::Url::parse(value) {
        Ok(parsed) => parsed,
        Err(e) => {
            diag.error_with_hint(field, format!("invalid URL: {e}"), HINT);
            return;
        }
    };

    if !matches!(parsed.scheme(), "http" | "https") {
        diag.error_with_hint(
            field,
            format!(
                "scheme '{}' not supported, must be http or https",
                parsed.scheme()
            ),
            HINT,
        );
    }

    if parsed.host_str().is_none() {
        diag.error_with_hint(field, "URL must have a valid host", HINT);
    }

    if value.ends_with('/') {
        diag.error_with_hint(
            field,
            "URL must not end with `/`",
            format!("use \"{}\"", value.trim_end_matches('/')),
        );
    } else if parsed.path() != "/" {
        diag.error_with_hint(field, "URL must not contain a path", HINT);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validate(url: &str) -> ConfigDiagnostics {
        let site = SiteSection {
            fallback_url: url.into(),
            ..Default::default()
        };
        let mut diag = ConfigDiagnostics::new();
        site.validate(&mut diag);
        diag
    }

    #[test]
    fn test_default_is_valid() {
        assert!(!validate(DEFAULT_BASE_URL).has_errors());
    }

    #[test]
    fn test_port_is_allowed() {
        assert!(!validate("http://localhost:3000").has_errors());
    }

    #[test]
    fn test_trailing_slash_rejected() {
        let diag = validate("https://whenisdue.com/");
        assert_eq!(diag.len(), 1);
        assert!(diag.errors()[0].message.contains("must not end with"));
    }

    #[test]
    fn test_path_rejected() {
        let diag = validate("https://example.github.io/site");
        assert!(diag.errors()[0].message.contains("path"));
    }

    #[test]
    fn test_scheme_rejected() {
        let diag = validate("ftp://whenisdue.com");
        assert!(diag.errors()[0].message.contains("ftp"));
    }

    #[test]
    fn test_schemeless_rejected() {
        let diag = validate("whenisdue.com");
        assert!(diag.errors()[0].message.contains("invalid URL"));
    }

    #[test]
    fn test_empty_name_rejected() {
        let site = SiteSection {
            name: "  ".into(),
            ..Default::default()
        };
        let mut diag = ConfigDiagnostics::new();
        site.validate(&mut diag);
        assert_eq!(diag.errors()[0].field.as_str(), "site.name");
    }
}
