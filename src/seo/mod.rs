//! SEO metadata: social-card manifest, head tags and structured data.

pub mod jsonld;
mod manifest;
mod meta;

pub use manifest::{
    DEFAULT_MANIFEST_PATH, FileManifest, ManifestError, ManifestSource, OgManifest,
    resolve_absolute_og_image,
};
pub use meta::{PageMeta, PageText};
