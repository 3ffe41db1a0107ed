//! Page slug type.
//!
//! A slug is the path-like identifier of a page, e.g.
//! `gaming/steam-summer-sale-2026`. It is both the manifest key and the URL
//! path under the base URL.

use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Normalized page slug.
///
/// Invariants:
/// - No leading or trailing `/`
/// - Segments separated by a single `/`
/// - Empty only for the home page
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Slug(Arc<str>);

impl Slug {
    /// Create from a user-provided string, normalizing slashes.
    ///
    /// Query strings and fragments are not part of a slug and are dropped.
    pub fn new(raw: &str) -> Self {
        let path = raw.trim().split(['?', '#']).next().unwrap_or_default();
        let normalized = path
            .split(['/', '\\'])
            .filter(|segment| !segment.is_empty())
            .collect::<Vec<_>>()
            .join("/");
        Self(Arc::from(normalized))
    }

    /// Slug of the home page.
    pub fn home() -> Self {
        Self(Arc::from(""))
    }

    /// Derive a slug from a content file path relative to the content root.
    ///
    /// `gaming/steam-summer-sale-2026.toml` -> `gaming/steam-summer-sale-2026`
    pub fn from_relative_path(path: &Path) -> Self {
        let without_ext = path.with_extension("");
        let segments: Vec<_> = without_ext
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect();
        Self::new(&segments.join("/"))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn is_home(&self) -> bool {
        self.0.is_empty()
    }

    /// Site-relative URL path (`/gaming/steam-summer-sale-2026`).
    pub fn url_path(&self) -> String {
        format!("/{}", self.0)
    }

    /// Absolute URL under `base_url`.
    ///
    /// The home page maps to the bare base URL.
    pub fn canonical_url(&self, base_url: &str) -> String {
        if self.is_home() {
            base_url.to_string()
        } else {
            format!("{}/{}", base_url, self.0)
        }
    }

    /// Whether any segment is `.` or `..`.
    ///
    /// Such a slug would leave the output directory and produce a
    /// non-canonical URL, so pages must not use one.
    pub fn has_dot_segment(&self) -> bool {
        self.0.split('/').any(|segment| matches!(segment, "." | ".."))
    }

    /// Output file path relative to the output directory.
    pub fn output_file(&self) -> std::path::PathBuf {
        let mut path = std::path::PathBuf::new();
        for segment in self.0.split('/').filter(|s| !s.is_empty()) {
            path.push(segment);
        }
        path.join("index.html")
    }

    /// Filesystem/id-safe form (`gaming-steam-summer-sale-2026`).
    pub fn to_id(&self) -> String {
        self.0.replace('/', "-")
    }
}

impl std::fmt::Display for Slug {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for Slug {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Slug {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Self::new(&s))
    }
}
