//! Directory copy operations.
//!
//! This module copies the immediate entries of one directory into another.
//! Traversal is a single level: subdirectories are not descended into.

use crate::error::{Error, Result};
use crate::options::{CopyEvent, CopyOptions};
use std::fs;
use std::io;
use std::path::Path;
use std::time::Instant;

use super::file::copy_file;
use super::utils::ensure_dir;

/// Statistics from a copy operation.
///
/// Returned by [`copy_dir`] and [`copy_files`](crate::copy_files).
///
/// # Example
///
/// ```no_run
/// use copyfile::{copy_dir, CopyOptions};
/// use std::path::Path;
///
/// let stats = copy_dir(Path::new("src"), Path::new("dst"), &CopyOptions::default())?;
/// println!("Copied {} files ({} bytes)", stats.files_copied, stats.bytes_copied);
/// # Ok::<(), copyfile::Error>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CopyStats {
    /// Number of files successfully copied
    pub files_copied: u64,
    /// Number of directories created (the target, if it did not exist)
    pub dirs_created: u64,
    /// Total bytes copied
    pub bytes_copied: u64,
    /// Duration of the copy operation
    pub duration: std::time::Duration,
}

impl CopyStats {
    pub(crate) fn record_file(&mut self, bytes: u64) {
        self.files_copied += 1;
        self.bytes_copied += bytes;
    }
}

/// Copy every entry of a directory into another directory
///
/// # Strategy
///
/// 1. Open the source directory for enumeration
/// 2. Create the target directory (an existing one is reused)
/// 3. Copy each entry with [`copy_file`](crate::copy_file), in enumeration order
///
/// Entries that are themselves directories are not descended into; they are
/// handed to the file copy, which rejects them.
///
/// # Arguments
///
/// * `src` - Source directory path
/// * `dst` - Destination directory path
/// * `options` - Copy options
///
/// # Errors
///
/// Returns an error if:
/// - Source cannot be opened or enumerated ([`Error::ReadDirectory`]);
///   the target is not created when opening fails
/// - Target cannot be created ([`Error::CreateDirectory`])
/// - An entry is a directory ([`Error::IsADirectory`])
/// - Any file copy fails (see [`copy_file`](crate::copy_file))
///
/// The operation stops at the first error. Files copied before it remain.
pub fn copy_dir(src: &Path, dst: &Path, options: &CopyOptions) -> Result<CopyStats> {
    let start_time = Instant::now();

    let read_dir_err = |source: io::Error| Error::ReadDirectory {
        path: src.to_path_buf(),
        source,
    };

    let entries = fs::read_dir(src).map_err(read_dir_err)?;

    let mut stats = CopyStats::default();
    if ensure_dir(dst, options.dir_mode)? {
        stats.dirs_created += 1;
    }

    // read_dir never yields "." or ".."
    for entry in entries {
        let entry = entry.map_err(read_dir_err)?;
        let name = entry.file_name();

        let bytes = copy_file(&src.join(&name), &dst.join(&name), options)?;
        stats.record_file(bytes);
    }

    stats.duration = start_time.elapsed();

    #[cfg(feature = "tracing")]
    tracing::debug!(
        src = %src.display(),
        dst = %dst.display(),
        files = stats.files_copied,
        bytes = stats.bytes_copied,
        "directory copied"
    );

    options.report(CopyEvent::Directory {
        src: src.to_path_buf(),
        dst: dst.to_path_buf(),
        files: stats.files_copied,
    });

    Ok(stats)
}

// =============================================================================
// Tests
// =============================================================================
