//! # fsprim
//!
//! Safe local file-system primitives for higher-level tooling: move, copy,
//! and classify files and directories across platforms.
//!
//! No single call here is hard; the value is accumulated edge-case
//! correctness:
//!
//! - **Containment**: [`has_filepath_prefix`] tests directory nesting on
//!   path-segment boundaries, never as a string prefix, with canonicalization
//!   for symlinked ancestors and Unicode-safe comparison.
//! - **Classification**: [`is_regular_file`], [`is_dir`], [`is_symlink`], and
//!   [`is_non_empty_dir`] each carry a precise existence/error contract,
//!   distinguishing "does not exist" from "exists but wrong type" from
//!   "inaccessible".
//! - **Moving**: [`rename_with_fallback`] renames atomically within a volume
//!   and falls back to copy + delete across volumes, keeping the source
//!   authoritative until the copy fully succeeds.
//! - **Copying**: [`copy_file`] and [`copy_dir`] preserve permission modes
//!   and reproduce symlinks as links with identical target strings; the
//!   referent is never followed.
//!
//! ## Quick start
//!
//! ```no_run
//! use std::path::Path;
//!
//! let src = Path::new("vendor/pkg");
//! let dst = Path::new("cache/pkg");
//!
//! if fsprim::is_non_empty_dir(src)? {
//!     fsprim::copy_dir(src, dst)?;
//! }
//!
//! assert!(fsprim::has_filepath_prefix(&dst.join("Cargo.toml"), dst));
//! # Ok::<(), fsprim::Error>(())
//! ```
//!
//! ## Error model
//!
//! Precondition violations are named, identity-comparable variants
//! ([`Error::SourceNotDirectory`], [`Error::DestinationExists`], ...);
//! underlying I/O failures are wrapped in [`Error::Io`]. Expected absences (a
//! missing file probed by [`is_regular_file`], a missing directory probed
//! by [`is_non_empty_dir`]) are normal `false` results, not errors. There
//! are no internal retries; every failure surfaces immediately.
//!
//! ## Concurrency
//!
//! All operations are synchronous and hold no shared mutable state.
//! Concurrent calls on disjoint paths are safe; calls overlapping on the
//! same paths are unspecified; no internal locking is provided. Every file
//! and directory-listing handle is scoped, so repeated failure paths do not
//! leak descriptors.
//!
//! ## Platform notes
//!
//! Permission semantics are POSIX mode bits. Platforms without them
//! (notably Windows) get reduced guarantees; see
//! [`enforces_file_modes`] for the capability check.
//!
//! ## Optional Features
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `tracing` | Structured logging of rename-fallback transitions |

#![cfg_attr(docsrs, feature(doc_cfg))]

mod copy;
mod error;
mod platform;
mod prefix;
mod probe;
mod rename;

pub use copy::{copy_dir, copy_file};
pub use error::{Error, Result, is_cross_device_error};
pub use platform::enforces_file_modes;
pub use prefix::has_filepath_prefix;
pub use probe::{is_dir, is_non_empty_dir, is_regular_file, is_symlink};
pub use rename::rename_with_fallback;
