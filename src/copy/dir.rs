//! Recursive directory copy.

use crate::error::{Error, Result};
use std::fs;
use std::io;
use std::path::Path;

use super::file::copy_file;

/// Copy the directory tree rooted at `src` to a freshly created `dst`.
///
/// Preconditions, checked in order:
///
/// 1. `src` exists ([`Error::SourceNotFound`]) and is a directory
///    ([`Error::SourceNotDirectory`]).
/// 2. `dst` does not exist, whatever its type ([`Error::DestinationExists`]).
///    An existing destination is never merged into.
///
/// Every created directory receives its source directory's permission mode;
/// files and symlinks go through the [`copy_file`] contract, so symlinks are
/// reproduced as links and never followed. Nesting depth and non-ASCII
/// names need no special handling.
///
/// The walk aborts on the first failing entry and surfaces that error.
/// Partially written destination content is left in place for the caller to
/// inspect or remove; there is no rollback.
pub fn copy_dir(src: &Path, dst: &Path) -> Result<()> {
    let src_meta = match fs::metadata(src) {
        Ok(meta) => meta,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(Error::SourceNotFound(src.to_path_buf()));
        }
        Err(e) => return Err(e.into()),
    };

    if !src_meta.is_dir() {
        return Err(Error::SourceNotDirectory(src.to_path_buf()));
    }

    match fs::symlink_metadata(dst) {
        Ok(_) => return Err(Error::DestinationExists(dst.to_path_buf())),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => return Err(e.into()),
    }

    fs::create_dir_all(dst)?;
    // create_dir_all is subject to the umask; set the source mode explicitly
    // so the trees match mode-for-mode.
    fs::set_permissions(dst, src_meta.permissions())?;

    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        // DirEntry::file_type does not follow symlinks, so a link to a
        // directory stays a link and goes through copy_file.
        if entry.file_type()?.is_dir() {
            copy_dir(&src_path, &dst_path)?;
        } else {
            copy_file(&src_path, &dst_path)?;
        }
    }

    Ok(())
}
