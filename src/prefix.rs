//! Directory containment test.
//!
//! Decides whether one path lies inside the directory subtree rooted at
//! another. This is a hierarchy test, never a string-prefix test:
//! `/dir/ab` is not inside `/dir/a`, even though the string is.

use std::fs;
use std::path::{Path, PathBuf};

/// Check whether `path` is equal to `prefix` or nested somewhere below it.
///
/// Inputs that exist on disk are canonicalized first, so a path reached
/// through a symlinked ancestor compares equal to the real location. Inputs
/// that do not exist are normalized lexically from their nearest existing
/// ancestor.
///
/// The comparison is component-wise, so it respects path-segment boundaries
/// and never splits a multi-byte character: a name ending in `⌘` is not
/// confused with a similar ASCII name.
///
/// Read-only: probes the filesystem but never mutates it.
///
/// # Example
///
/// ```
/// use std::path::Path;
/// use fsprim::has_filepath_prefix;
///
/// assert!(has_filepath_prefix(Path::new("/dir/a/b"), Path::new("/dir/a")));
/// assert!(!has_filepath_prefix(Path::new("/dir/ab"), Path::new("/dir/a")));
/// ```
pub fn has_filepath_prefix(path: &Path, prefix: &Path) -> bool {
    resolve(path).starts_with(resolve(prefix))
}

/// Canonicalize as much of `path` as exists, appending the remainder
/// lexically.
fn resolve(path: &Path) -> PathBuf {
    if let Ok(canonical) = fs::canonicalize(path) {
        return canonical;
    }

    // Missing leaf: resolve the parent and re-append the final component,
    // walking up until something exists.
    if let (Some(parent), Some(name)) = (path.parent(), path.file_name()) {
        return resolve(parent).join(name);
    }

    // Nothing on disk to anchor against; normalize lexically.
    path.components().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_prefix_hierarchy() {
        let dir = tempdir().unwrap();
        let base = dir.path();

        let cases = [
            ("a/b", "", true),
            ("a/b", "a", true),
            ("a/b", "a/b", true),
            ("a/b", "c", false),
            ("a/b", "a/d/b", false),
            ("a/b", "a/b2", false),
            ("", "a/b", false),
            ("ab", "a/b", false),
            ("ab", "a", false),
            ("123", "123", true),
            ("123", "1", false),
        ];

        for (path, prefix, want) in cases {
            let path = base.join(path);
            let prefix = base.join(prefix);
            fs::create_dir_all(&path).unwrap();
            fs::create_dir_all(&prefix).unwrap();

            assert_eq!(
                has_filepath_prefix(&path, &prefix),
                want,
                "path: {:?}, prefix: {:?}",
                path,
                prefix
            );
        }
    }

    #[test]
    fn test_prefix_multibyte_names() {
        let dir = tempdir().unwrap();
        let base = dir.path();

        let cases = [
            ("⌘", "⌘", true),
            ("a", "⌘", false),
            ("⌘", "a", false),
            ("⌘/nested", "⌘", true),
        ];

        for (path, prefix, want) in cases {
            let path = base.join(path);
            let prefix = base.join(prefix);
            fs::create_dir_all(&path).unwrap();
            fs::create_dir_all(&prefix).unwrap();

            assert_eq!(
                has_filepath_prefix(&path, &prefix),
                want,
                "path: {:?}, prefix: {:?}",
                path,
                prefix
            );
        }
    }

    #[test]
    fn test_prefix_nonexistent_paths_compare_lexically() {
        let dir = tempdir().unwrap();
        let base = dir.path();

        // Neither leaf exists; segment boundaries still hold.
        assert!(has_filepath_prefix(
            &base.join("ghost/child"),
            &base.join("ghost")
        ));
        assert!(!has_filepath_prefix(
            &base.join("ghostly"),
            &base.join("ghost")
        ));
    }

    #[test]
    fn test_prefix_existing_file_under_directory() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("exists");
        fs::write(&file, "").unwrap();

        assert!(has_filepath_prefix(&file, dir.path()));
        assert!(has_filepath_prefix(&file, &file));
        assert!(!has_filepath_prefix(dir.path(), &file));
    }

    #[test]
    fn test_prefix_self_is_true() {
        let dir = tempdir().unwrap();

        assert!(has_filepath_prefix(dir.path(), dir.path()));
    }

    #[test]
    fn test_prefix_reversed_nesting_is_false() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();

        assert!(has_filepath_prefix(&nested, dir.path()));
        assert!(!has_filepath_prefix(dir.path(), &nested));
    }

    #[cfg(unix)]
    #[test]
    fn test_prefix_through_symlinked_ancestor() {
        use std::os::unix::fs::symlink;

        let dir = tempdir().unwrap();
        let real = dir.path().join("real");
        fs::create_dir_all(real.join("child")).unwrap();

        let alias = dir.path().join("alias");
        symlink(&real, &alias).unwrap();

        // The aliased route canonicalizes to the real location.
        assert!(has_filepath_prefix(&alias.join("child"), &real));
        assert!(has_filepath_prefix(&real.join("child"), &alias));
    }
}
