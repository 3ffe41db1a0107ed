//! Configuration utility functions.

use std::path::{Path, PathBuf};

/// Find config file by searching upward from `start`
///
/// Walks up parent directories until finding `config_name`.
/// Returns the absolute path to the config file if found.
///
/// # Example
/// ```text
/// /home/user/site/content/gaming/  ← start
/// /home/user/site/whenisdue.toml   ← found!
/// ```
pub fn find_config_file(config_name: &Path, start: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    let mut current = start;
    loop {
        let candidate = current.join(config_name);
        if candidate.exists() {
            return Some(candidate);
        }

        match current.parent() {
            Some(parent) => current = parent,
            None => return None, // Reached filesystem root
        }
    }
}

/// Make `path` absolute without requiring it to exist.
///
/// Existing paths are canonicalized; others are joined onto `base`.
pub fn normalize_path(path: &Path, base: &Path) -> PathBuf {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    };
    joined.canonicalize().unwrap_or(joined)
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_find_config_file_walks_up() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("content").join("gaming");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(dir.path().join("whenisdue.toml"), "").unwrap();

        let found = find_config_file(Path::new("whenisdue.toml"), &nested).unwrap();
        assert_eq!(found, dir.path().join("whenisdue.toml"));
    }

    #[test]
    fn test_find_config_file_missing() {
        let dir = TempDir::new().unwrap();
        assert!(find_config_file(Path::new("no-such-config-file.toml"), dir.path()).is_none());
    }

    #[test]
    fn test_find_config_file_absolute() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("site.toml");
        assert!(find_config_file(&path, dir.path()).is_none());

        std::fs::write(&path, "").unwrap();
        assert_eq!(find_config_file(&path, Path::new("/")), Some(path));
    }

    #[test]
    fn test_normalize_path_missing_target() {
        let base = Path::new("/srv/site");
        assert_eq!(
            normalize_path(Path::new("does-not-exist"), base),
            PathBuf::from("/srv/site/does-not-exist")
        );
        assert_eq!(
            normalize_path(Path::new("/abs/out"), base),
            PathBuf::from("/abs/out")
        );
    }
}
