//! Path normalization utilities.

use std::path::{Path, PathBuf};

/// Normalize a file system path to absolute form.
///
/// Tries `canonicalize()` first (resolves symlinks, `.`, `..`).
/// Falls back to:
/// - Return as-is if already absolute
/// - Join with current directory if relative
///
/// # Example
/// ```ignore
/// let abs = normalize_path(Path::new("./docsite.toml"));
/// ```
#[inline]
pub fn normalize_path(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir().map_or_else(|_| path.to_path_buf(), |cwd| cwd.join(path))
        }
    })
}

/// Display `path` relative to `root` when it lies inside it.
pub fn relative_display(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .display()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_normalize_existing_path() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("a");
        std::fs::create_dir(&nested).unwrap();

        let normalized = normalize_path(&nested.join("..").join("a"));
        assert_eq!(normalized, nested.canonicalize().unwrap());
    }

    #[test]
    fn test_normalize_missing_absolute_path() {
        let path = Path::new("/definitely/not/here/docsite.toml");
        assert_eq!(normalize_path(path), path);
    }

    #[test]
    fn test_normalize_missing_relative_path() {
        let normalized = normalize_path(Path::new("missing-docsite.toml"));
        assert!(normalized.is_absolute());
        assert!(normalized.ends_with("missing-docsite.toml"));
    }

    #[test]
    fn test_relative_display() {
        let root = Path::new("/project");
        assert_eq!(
            relative_display(Path::new("/project/web/docs/index.md"), root),
            "web/docs/index.md"
        );
        assert_eq!(relative_display(Path::new("/elsewhere/x"), root), "/elsewhere/x");
    }
}
