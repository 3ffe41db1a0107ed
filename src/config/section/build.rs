//! `[build]` configuration.

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildSection {
    /// Directory holding page definitions (`*.toml`).
    pub content: PathBuf,

    /// Output directory for rendered HTML.
    pub output: PathBuf,

    /// Collapse inter-tag whitespace in rendered HTML.
    pub minify: bool,

    /// Remove rendered pages from the output directory before building.
    #[serde(skip)]
    pub clean: bool,
}

pub struct BuildFields {
    pub content: FieldPath,
    pub output: FieldPath,
}

impl Default for BuildSection {
    fn default() -> Self {
        Self {
            content: "content".into(),
            output: "public".into(),
            minify: false,
            clean: false,
        }
    }
}

impl BuildSection {
    pub const FIELDS: BuildFields = BuildFields {
        content: FieldPath::new("build.content"),
        output: FieldPath::new("build.output"),
    };

    /// Validate paths after they were resolved against the site root.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if !self.content.is_dir() {
            diag.warn(
                Self::FIELDS.content,
                format!("{} does not exist, only the home page will be built", self.content.display()),
            );
        }

        if self.output == self.content {
            diag.error(
                Self::FIELDS.output,
                "output directory must differ from the content directory",
            );
        }
    }
}
