//! Config field path used in diagnostics.

/// Dotted path of a config field (e.g. `site.fallback_url`).
///
/// Each section exposes its paths through a `FIELDS` constant so
/// diagnostics never spell field names by hand:
///
/// ```ignore
/// diag.error(SiteSection::FIELDS.fallback_url, "must use http or https");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPath(&'static str);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(path)
    }

    #[inline]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}
