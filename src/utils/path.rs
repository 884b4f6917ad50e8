//! Path utilities for naming copy targets.

use crate::error::{Error, Result};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Return the base name of `path`: its final component.
///
/// A path without any separator is its own base name. Paths that end in a
/// component with no name (`..`, `/`) have no base name.
pub(crate) fn base_name(path: &Path) -> Result<&OsStr> {
    path.file_name()
        .ok_or_else(|| Error::NoFileName(path.to_path_buf()))
}

/// Build `dir/<base name of src>`.
pub(crate) fn target_in_dir(src: &Path, dir: &Path) -> Result<PathBuf> {
    Ok(dir.join(base_name(src)?))
}
