//! Core copy operations.
//!
//! This module provides the byte-copy primitive and the two operations built
//! on it: copying several files into a directory, and copying the entries of
//! one directory into another.

mod dir;
mod file;
mod multi;
mod utils;

// Re-export public API
pub use dir::{CopyStats, copy_dir};
pub use file::copy_file;
pub use multi::copy_files;
