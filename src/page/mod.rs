//! Page definitions and content discovery.
//!
//! Every `*.toml` file under the content directory is one countdown page.
//! The file path relative to the content root is the default slug.

mod countdown;

pub use countdown::{CountdownPage, DEFAULT_STATUS, DetailCard, FaqItem, RelatedLink};

use crate::{core::Slug, log};
use jwalk::WalkDir;
use rustc_hash::FxHashMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

const PAGE_EXTENSION: &str = "toml";

#[derive(Debug, Error)]
pub enum PageError {
    #[error("failed to read page `{}`", .0.display())]
    Io(PathBuf, #[source] std::io::Error),

    #[error("invalid page definition `{}`", .0.display())]
    Parse(PathBuf, #[source] toml::de::Error),

    #[error("slug `{slug}` is defined by both `{}` and `{}`", .first.display(), .second.display())]
    DuplicateSlug {
        slug: Slug,
        first: PathBuf,
        second: PathBuf,
    },

    #[error("page `{}` resolves to the home page slug", .0.display())]
    HomeSlug(PathBuf),

    #[error("slug `{slug}` in `{}` contains a `.` or `..` segment", .path.display())]
    InvalidSlug { slug: Slug, path: PathBuf },
}

/// A page together with the file it came from.
#[derive(Debug, Clone)]
pub struct PageSource {
    pub path: PathBuf,
    pub page: CountdownPage,
}

/// Load one page file. `content_root` is used to derive the slug.
pub fn load_page(path: &Path, content_root: &Path) -> Result<PageSource, PageError> {
    let content = fs::read_to_string(path).map_err(|e| PageError::Io(path.to_path_buf(), e))?;
    let mut page: CountdownPage =
        toml::from_str(&content).map_err(|e| PageError::Parse(path.to_path_buf(), e))?;

    if page.slug.is_home() {
        let relative = path.strip_prefix(content_root).unwrap_or(path);
        page.slug = Slug::from_relative_path(relative);
    }
    if page.slug.is_home() {
        return Err(PageError::HomeSlug(path.to_path_buf()));
    }
    if page.slug.has_dot_segment() {
        return Err(PageError::InvalidSlug {
            slug: page.slug,
            path: path.to_path_buf(),
        });
    }

    Ok(PageSource {
        path: path.to_path_buf(),
        page,
    })
}

/// Collect page files under `dir`, sorted for stable output.
///
/// Entries the walker cannot read are skipped with a warning.
pub fn collect_page_files(dir: &Path) -> Vec<PathBuf> {
    if !dir.is_dir() {
        return Vec::new();
    }

    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .into_iter()
        .filter_map(|entry| {
            entry
                .map_err(|err| log!("warning"; "skipping unreadable content entry: {}", err))
                .ok()
        })
        .filter(|e| e.file_type().is_file())
        .map(|e| e.path())
        .filter(|p| p.extension().is_some_and(|ext| ext == PAGE_EXTENSION))
        .collect();
    files.sort();
    files
}

/// Load every page under `dir`, sorted by slug.
///
/// Stops at the first unreadable or invalid file. Two files claiming the
/// same slug is an error.
pub fn load_pages(dir: &Path) -> Result<Vec<PageSource>, PageError> {
    let mut seen: FxHashMap<Slug, PathBuf> = FxHashMap::default();
    let mut pages = Vec::new();

    for path in collect_page_files(dir) {
        let source = load_page(&path, dir)?;
        if let Some(first) = seen.insert(source.page.slug.clone(), path.clone()) {
            return Err(PageError::DuplicateSlug {
                slug: source.page.slug,
                first,
                second: path,
            });
        }
        pages.push(source);
    }

    pages.sort_by(|a, b| a.page.slug.cmp(&b.page.slug));
    Ok(pages)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const PAGE: &str = "heading = \"H\"\ndescription = \"D\"\n";

    fn write(dir: &Path, rel: &str, content: &str) -> PathBuf {
        let path = dir.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_slug_from_path() {
        let dir = TempDir::new().unwrap();
        let path = write(dir.path(), "gaming/steam-summer-sale-2026.toml", PAGE);

        let source = load_page(&path, dir.path()).unwrap();
        assert_eq!(source.page.slug.as_str(), "gaming/steam-summer-sale-2026");
    }

    #[test]
    fn test_explicit_slug_wins() {
        let dir = TempDir::new().unwrap();
        let path = write(
            dir.path(),
            "steam.toml",
            &format!("slug = \"gaming/steam-summer-sale-2026\"\n{PAGE}"),
        );

        let source = load_page(&path, dir.path()).unwrap();
        assert_eq!(source.page.slug.as_str(), "gaming/steam-summer-sale-2026");
    }

    #[test]
    fn test_load_pages_sorted_and_filtered() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "shopping/black-friday-2026.toml", PAGE);
        write(dir.path(), "gaming/steam-summer-sale-2026.toml", PAGE);
        write(dir.path(), "gaming/notes.md", "ignored");

        let pages = load_pages(dir.path()).unwrap();
        let slugs: Vec<_> = pages.iter().map(|p| p.page.slug.as_str()).collect();
        assert_eq!(
            slugs,
            ["gaming/steam-summer-sale-2026", "shopping/black-friday-2026"]
        );
    }

    #[test]
    fn test_duplicate_slug() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "gaming/steam.toml", PAGE);
        write(dir.path(), "other.toml", &format!("slug = \"gaming/steam\"\n{PAGE}"));

        let err = load_pages(dir.path()).unwrap_err();
        assert!(matches!(err, PageError::DuplicateSlug { .. }));
    }

    #[test]
    fn test_invalid_page() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "broken.toml", "heading = ");

        let err = load_pages(dir.path()).unwrap_err();
        assert!(matches!(err, PageError::Parse(..)));
        assert!(err.to_string().contains("broken.toml"));
    }

    #[test]
    fn test_dot_segment_slug_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write(dir.path(), "escape.toml", &format!("slug = \"../escaped\"\n{PAGE}"));

        let err = load_page(&path, dir.path()).unwrap_err();
        assert!(matches!(err, PageError::InvalidSlug { ref slug, .. } if slug.as_str() == "../escaped"));

        let err = load_pages(dir.path()).unwrap_err();
        assert!(err.to_string().contains("escape.toml"));
    }

    #[cfg(unix)]
    #[test]
    fn test_unreadable_subdir_skipped() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        write(dir.path(), "gaming/steam.toml", PAGE);
        let locked = dir.path().join("locked");
        write(dir.path(), "locked/hidden.toml", PAGE);
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        let files = collect_page_files(dir.path());
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

        assert!(files.contains(&dir.path().join("gaming/steam.toml")));
    }

    #[test]
    fn test_missing_content_dir() {
        let dir = TempDir::new().unwrap();
        assert!(load_pages(&dir.path().join("content")).unwrap().is_empty());
    }
}
