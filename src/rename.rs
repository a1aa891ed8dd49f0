//! Rename with copy + delete fallback.

use crate::copy::{copy_dir, copy_file};
use crate::error::{Error, Result, is_cross_device_error};
use std::fs;
use std::io;
use std::path::Path;

/// Move `src` to `dst`, falling back to copy + delete when a direct rename
/// cannot work.
///
/// The primary strategy is [`fs::rename`], which is atomic within a storage
/// volume. When the rename fails with a cross-device condition (see
/// [`is_cross_device_error`](crate::is_cross_device_error)), the source is
/// copied to the destination via the [`copy_dir`](crate::copy_dir) /
/// [`copy_file`](crate::copy_file) contracts and removed only after the copy
/// fully succeeds. If the copy fails, the partial destination is removed
/// best-effort and the source is left intact, so the destination is either a
/// complete copy or absent.
///
/// The fallback path is not atomic: both paths exist during the window
/// between copy and delete. Callers needing cross-device atomicity must
/// layer their own locking.
///
/// # Errors
///
/// - `src` does not exist ([`Error::SourceNotFound`]). A dangling symlink
///   source still counts as present and is moved as a link.
/// - `dst` is an existing directory ([`Error::DestinationExists`]); a move
///   never merges into a directory.
/// - Any rename failure that is not a cross-device condition, and any
///   failure inside the fallback copy ([`Error::Io`] or the copy sentinels).
pub fn rename_with_fallback(src: &Path, dst: &Path) -> Result<()> {
    // Non-following stat so a dangling symlink source is still movable.
    let src_meta = match fs::symlink_metadata(src) {
        Ok(meta) => meta,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(Error::SourceNotFound(src.to_path_buf()));
        }
        Err(e) => return Err(e.into()),
    };

    if fs::metadata(dst).map(|m| m.is_dir()).unwrap_or(false) {
        return Err(Error::DestinationExists(dst.to_path_buf()));
    }

    let rename_err = match fs::rename(src, dst) {
        Ok(()) => return Ok(()),
        Err(e) => e,
    };

    if !is_cross_device_error(&rename_err) {
        return Err(rename_err.into());
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(
        src = %src.display(),
        dst = %dst.display(),
        "rename crossed a device boundary, copying instead"
    );

    rename_fallback(src, dst, src_meta.is_dir())
}

/// Copy `src` to `dst`, then remove the source.
///
/// The source stays authoritative until the copy has fully succeeded; on a
/// failed copy the half-written destination is removed so callers never see
/// an ambiguous state.
fn rename_fallback(src: &Path, dst: &Path, src_is_dir: bool) -> Result<()> {
    let copied = if src_is_dir {
        copy_dir(src, dst)
    } else {
        copy_file(src, dst)
    };

    if let Err(copy_err) = copied {
        if let Err(cleanup_err) = remove_any(dst, src_is_dir) {
            #[cfg(feature = "tracing")]
            tracing::warn!(
                dst = %dst.display(),
                error = %cleanup_err,
                "failed to remove partial destination after copy failure"
            );
            let _ = cleanup_err;
        }
        return Err(copy_err);
    }

    remove_any(src, src_is_dir)?;

    Ok(())
}

/// Remove a path of known shape; an already-absent path is fine.
fn remove_any(path: &Path, is_dir: bool) -> io::Result<()> {
    let result = if is_dir {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    };

    match result {
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        other => other,
    }
}
