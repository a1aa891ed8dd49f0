//! Single file and symlink copy.

use crate::error::{Error, Result};
use std::fs::{self, File};
use std::io::{self, BufReader};
use std::path::Path;

use super::utils::symlink;

/// Copy a single file or symlink from `src` to `dst`.
///
/// A symlink source is recreated as a new link at `dst` with the identical
/// target string; the referent is never read or dereferenced, so dangling
/// links copy fine. A regular file source is streamed byte-for-byte into a
/// freshly created `dst`, which then receives the source's permission mode.
///
/// All file handles are scoped and released on every exit path, success or
/// failure.
///
/// # Errors
///
/// - Source is a directory ([`Error::IsADirectory`]); use
///   [`copy_dir`](crate::copy_dir) for directory trees.
/// - Source missing or unreadable, or destination parent inaccessible
///   ([`Error::Io`]).
/// - Platforms without symlink support report
///   [`io::ErrorKind::Unsupported`] for symlink sources.
pub fn copy_file(src: &Path, dst: &Path) -> Result<()> {
    // Non-following stat: classify the link itself, not its referent.
    let src_meta = fs::symlink_metadata(src)?;

    if src_meta.file_type().is_symlink() {
        let target = fs::read_link(src)?;
        symlink(&target, dst)?;
        return Ok(());
    }

    if src_meta.is_dir() {
        return Err(Error::IsADirectory(src.to_path_buf()));
    }

    {
        let src_file = File::open(src)?;
        let mut dst_file = File::create(dst)?;
        io::copy(&mut BufReader::new(src_file), &mut dst_file)?;
    }

    fs::set_permissions(dst, src_meta.permissions())?;

    Ok(())
}
