//! Social-card (Open Graph image) manifest.
//!
//! The manifest is a JSON object produced by the image generation step:
//!
//! ```json
//! { "gaming/steam-summer-sale-2026": "/assets/og/steam-summer-sale-2026.png" }
//! ```
//!
//! It is read fresh on every lookup. A missing or malformed manifest is an
//! error for the page being rendered; a missing key is not.

use crate::core::Slug;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Manifest location relative to the site root.
pub const DEFAULT_MANIFEST_PATH: &str = "public/assets/og/generated/manifest.json";

/// Failure to load the manifest artifact.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("failed to read og manifest `{}`", .0.display())]
    Io(PathBuf, #[source] std::io::Error),

    #[error("og manifest `{}` is not a flat string map", .0.display())]
    Parse(PathBuf, #[source] serde_json::Error),
}

/// Anything that can produce a manifest on demand.
pub trait ManifestSource {
    fn load(&self) -> Result<OgManifest, ManifestError>;
}

/// Slug to site-relative image path mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OgManifest(FxHashMap<String, String>);

impl OgManifest {
    /// Parse manifest JSON. `origin` is only used for error reporting.
    pub fn parse(content: &str, origin: &Path) -> Result<Self, ManifestError> {
        serde_json::from_str(content).map_err(|e| ManifestError::Parse(origin.to_path_buf(), e))
    }

    /// Relative image path for `slug`.
    #[inline]
    pub fn get(&self, slug: &str) -> Option<&str> {
        self.0.get(slug).map(String::as_str)
    }

    #[inline]
    pub fn contains(&self, slug: &str) -> bool {
        self.0.contains_key(slug)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate entries in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl FromIterator<(String, String)> for OgManifest {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// An already loaded manifest is its own source.
impl ManifestSource for OgManifest {
    fn load(&self) -> Result<OgManifest, ManifestError> {
        Ok(self.clone())
    }
}

/// Manifest read from disk on every [`ManifestSource::load`].
#[derive(Debug, Clone)]
pub struct FileManifest {
    path: PathBuf,
}

impl FileManifest {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Manifest at its default location under `root`.
    pub fn under_root(root: &Path) -> Self {
        Self::new(root.join(DEFAULT_MANIFEST_PATH))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ManifestSource for FileManifest {
    fn load(&self) -> Result<OgManifest, ManifestError> {
        let content = fs::read_to_string(&self.path)
            .map_err(|e| ManifestError::Io(self.path.clone(), e))?;
        OgManifest::parse(&content, &self.path)
    }
}

/// Resolve the absolute social-card URL for `slug`.
///
/// Loads the manifest from `source`, looks up `slug` and appends the
/// relative path to `base_url` verbatim. When the slug is absent,
/// `fallback` (a site-relative path) is used instead; with no fallback the
/// result is `Ok(None)` and the page simply has no image.
pub fn resolve_absolute_og_image<S>(
    slug: &Slug,
    base_url: &str,
    source: &S,
    fallback: Option<&str>,
) -> Result<Option<String>, ManifestError>
where
    S: ManifestSource + ?Sized,
{
    let manifest = source.load()?;

    let path = manifest.get(slug.as_str()).or(fallback);
    Ok(path.map(|p| format!("{base_url}{p}")))
}
