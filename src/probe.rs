//! Path classification probes.
//!
//! Each probe answers one question about a path and has its own
//! existence/error contract, and the contracts are deliberately not uniform:
//!
//! | Probe | Missing path | Exists, wrong type |
//! |-------|--------------|--------------------|
//! | [`is_regular_file`] | `Ok(false)` | `Ok(false)` |
//! | [`is_dir`] | `Err` | `Ok(false)` |
//! | [`is_symlink`] | `Err` | `Ok(false)` |
//! | [`is_non_empty_dir`] | `Ok(false)` | `Err` |
//!
//! A missing regular file is a normal probe outcome (optional files are
//! probed all the time); a missing directory usually signals a caller bug
//! and is surfaced as an error. Callers depend on this split; keep it.
//!
//! All probes stat fresh on every call; nothing is cached.

use crate::error::{Error, Result};
use std::fs;
use std::io;
use std::path::Path;

/// Check whether `path` names an existing regular file.
///
/// Returns `Ok(false)` both when the path does not exist and when it exists
/// as something other than a regular file (directory, symlink target, ...).
/// A stat failure for any other reason (e.g. permission denied on an
/// ancestor) is an error.
pub fn is_regular_file(path: &Path) -> Result<bool> {
    match fs::metadata(path) {
        Ok(meta) => Ok(meta.is_file()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e.into()),
    }
}

/// Check whether `path` names an existing directory.
///
/// Unlike [`is_regular_file`], a missing path is an error here: callers
/// probing for directories expect them to exist.
pub fn is_dir(path: &Path) -> Result<bool> {
    match fs::metadata(path) {
        Ok(meta) => Ok(meta.is_dir()),
        Err(e) => Err(e.into()),
    }
}

/// Check whether `path` itself is a symbolic link.
///
/// Uses a non-following stat, so the answer is about the link entry, never
/// about what it points at. A path that cannot be lstat'd (missing or
/// inaccessible) is an error.
pub fn is_symlink(path: &Path) -> Result<bool> {
    match fs::symlink_metadata(path) {
        Ok(meta) => Ok(meta.file_type().is_symlink()),
        Err(e) => Err(e.into()),
    }
}

/// Check whether `path` is a directory containing at least one entry.
///
/// A missing path is a normal `Ok(false)`; an existing non-directory is
/// [`Error::NotADirectory`]. At most one directory entry is read, and the
/// listing handle is released on every exit path.
pub fn is_non_empty_dir(path: &Path) -> Result<bool> {
    match fs::metadata(path) {
        Ok(meta) if meta.is_dir() => {
            let mut entries = fs::read_dir(path)?;
            Ok(entries.next().transpose()?.is_some())
        }
        Ok(_) => Err(Error::NotADirectory(path.to_path_buf())),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e.into()),
    }
}
