//! Multi-file copy operations.
//!
//! Copies an ordered list of files into one target directory, naming each
//! copy after its source's base name.

use crate::error::Result;
use crate::options::CopyOptions;
use crate::utils::path::target_in_dir;
use std::path::Path;
use std::time::Instant;

use super::dir::CopyStats;
use super::file::copy_file;
use super::utils::ensure_dir;

/// Copy several files into a directory
///
/// The target directory is created if missing and reused if present. Sources
/// are copied in order to `target_dir/<base name>`; when two sources share a
/// base name the later one wins.
///
/// # Errors
///
/// Returns an error if:
/// - Target directory cannot be created ([`Error::CreateDirectory`](crate::Error::CreateDirectory))
/// - A source has no base name ([`Error::NoFileName`](crate::Error::NoFileName))
/// - Any file copy fails (see [`copy_file`](crate::copy_file))
///
/// The operation stops at the first error. Files copied before it remain.
///
/// # Example
///
/// ```no_run
/// use copyfile::{copy_files, CopyOptions};
/// use std::path::Path;
///
/// let sources = [Path::new("a/x.txt"), Path::new("c/y.txt")];
/// let stats = copy_files(&sources, Path::new("out"), &CopyOptions::default())?;
/// assert_eq!(stats.files_copied, 2);
/// # Ok::<(), copyfile::Error>(())
/// ```
pub fn copy_files<P: AsRef<Path>>(
    sources: &[P],
    target_dir: &Path,
    options: &CopyOptions,
) -> Result<CopyStats> {
    let start_time = Instant::now();

    let mut stats = CopyStats::default();
    if ensure_dir(target_dir, options.dir_mode)? {
        stats.dirs_created += 1;
    }

    for src in sources {
        let src = src.as_ref();
        let dst = target_in_dir(src, target_dir)?;
        let bytes = copy_file(src, &dst, options)?;
        stats.record_file(bytes);
    }

    stats.duration = start_time.elapsed();
    Ok(stats)
}
