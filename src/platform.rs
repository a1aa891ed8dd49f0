//! Platform capability checks.
//!
//! POSIX mode bits are the primary permission model. Platforms without them
//! get reduced guarantees; callers and tests branch on these checks instead
//! of scattering `cfg` conditionals through core logic.

/// Whether this platform enforces POSIX file permission bits.
///
/// On Windows, `std::fs::Permissions` only models the read-only flag, so
/// the permission-preservation and inaccessible-path behaviors hold in
/// reduced form there. That divergence is an accepted platform limitation.
pub fn enforces_file_modes() -> bool {
    cfg!(unix)
}

/// True when a test can actually observe a permission-denied failure.
///
/// Requires enforced mode bits and a non-root user: root bypasses mode
/// checks entirely, so denial tests are meaningless under it.
#[cfg(test)]
pub(crate) fn can_test_permission_denial() -> bool {
    #[cfg(unix)]
    {
        enforces_file_modes() && unsafe { libc::geteuid() } != 0
    }

    #[cfg(not(unix))]
    {
        false
    }
}
