//! Error types for fsprim.
//!
//! This module provides the [`Error`] enum containing all possible errors
//! that can occur during filesystem operations, and the [`Result`] type alias.
//!
//! # Error Categories
//!
//! | Category | Errors |
//! |----------|--------|
//! | IO | [`Error::Io`] |
//! | Precondition | [`Error::SourceNotDirectory`], [`Error::DestinationExists`], [`Error::IsADirectory`] |
//! | Validation | [`Error::SourceNotFound`], [`Error::NotADirectory`] |
//!
//! Precondition variants are stable sentinels: callers branch on them by
//! identity (`matches!`), never by message text.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for fsprim operations.
///
/// This is a type alias for `std::result::Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;

/// Raw OS error codes that mean a rename crossed a storage-device boundary
/// and should be retried as copy + delete.
///
/// | Platform | Codes |
/// |----------|-------|
/// | Unix | `EXDEV` |
/// | Windows | `ERROR_NOT_SAME_DEVICE` (17), `ERROR_ACCESS_DENIED` (5) |
///
/// Windows reports cross-volume renames as access denied in several
/// configurations, so that code is treated as retriable there.
#[cfg(unix)]
pub(crate) const CROSS_DEVICE_CODES: &[i32] = &[libc::EXDEV];

#[cfg(windows)]
pub(crate) const CROSS_DEVICE_CODES: &[i32] = &[
    windows::Win32::Foundation::ERROR_NOT_SAME_DEVICE.0 as i32,
    windows::Win32::Foundation::ERROR_ACCESS_DENIED.0 as i32,
];

#[cfg(not(any(unix, windows)))]
pub(crate) const CROSS_DEVICE_CODES: &[i32] = &[];

/// Check if an IO error indicates a rename across storage-device boundaries.
///
/// [`rename_with_fallback`](crate::rename_with_fallback) uses this to decide
/// between propagating a rename failure and retrying via copy + delete.
///
/// # Example
///
/// ```no_run
/// use std::io;
/// use fsprim::is_cross_device_error;
///
/// let error = io::Error::new(io::ErrorKind::CrossesDevices, "invalid cross-device link");
/// if is_cross_device_error(&error) {
///     println!("rename cannot work here, copy instead");
/// }
/// ```
pub fn is_cross_device_error(error: &io::Error) -> bool {
    // Check the standard CrossesDevices kind first
    if error.kind() == io::ErrorKind::CrossesDevices {
        return true;
    }

    // The raw OS error might be available even when kind() is Other
    if let Some(raw_error) = error.raw_os_error() {
        return CROSS_DEVICE_CODES.contains(&raw_error);
    }

    false
}

/// Errors that can occur during fsprim operations.
///
/// All errors include relevant path information to aid debugging.
/// Use the [`std::error::Error`] trait methods to access underlying
/// causes where applicable.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// IO error during file operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Source path does not exist
    #[error("Source path does not exist: {0}")]
    SourceNotFound(PathBuf),

    /// Directory-copy source is not a directory
    #[error("Source is not a directory: {0}")]
    SourceNotDirectory(PathBuf),

    /// Destination already exists
    #[error("Destination already exists: {0}")]
    DestinationExists(PathBuf),

    /// Path exists but is not a directory
    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),

    /// Source is a directory, use `copy_dir` instead
    #[error("Source is a directory, use copy_dir instead: {0}")]
    IsADirectory(PathBuf),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_cross_device_error_kind() {
        let error = io::Error::new(io::ErrorKind::CrossesDevices, "cross-device link");
        assert!(is_cross_device_error(&error));
    }

    #[test]
    fn test_is_cross_device_error_other_kind() {
        let error = io::Error::new(io::ErrorKind::NotFound, "not found");
        assert!(!is_cross_device_error(&error));
    }

    #[cfg(unix)]
    #[test]
    fn test_is_cross_device_error_exdev() {
        let error = io::Error::from_raw_os_error(libc::EXDEV);
        assert!(is_cross_device_error(&error));
    }

    #[cfg(unix)]
    #[test]
    fn test_is_cross_device_error_other_errno() {
        let error = io::Error::from_raw_os_error(libc::ENOENT);
        assert!(!is_cross_device_error(&error));
    }

    #[cfg(windows)]
    #[test]
    fn test_is_cross_device_error_not_same_device() {
        let error = io::Error::from_raw_os_error(17); // ERROR_NOT_SAME_DEVICE
        assert!(is_cross_device_error(&error));
    }

    #[cfg(windows)]
    #[test]
    fn test_is_cross_device_error_access_denied() {
        let error = io::Error::from_raw_os_error(5); // ERROR_ACCESS_DENIED
        assert!(is_cross_device_error(&error));
    }

    #[test]
    fn test_sentinel_display() {
        let error = Error::DestinationExists(PathBuf::from("/dest"));
        assert!(format!("{}", error).contains("already exists"));

        let error = Error::SourceNotDirectory(PathBuf::from("/src"));
        assert!(format!("{}", error).contains("not a directory"));
    }
}
