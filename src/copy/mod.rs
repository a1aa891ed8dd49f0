//! Core copy operations.
//!
//! This module provides permission-preserving, symlink-aware copies of
//! single files and whole directory trees. Symlinks are reproduced as
//! links with the same target string; they are never followed.

mod dir;
mod file;
mod utils;

// Re-export public API
pub use dir::copy_dir;
pub use file::copy_file;
