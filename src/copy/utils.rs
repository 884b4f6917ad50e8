//! Utility functions for file copy operations.
//!
//! Directory creation and permission helpers shared by the file, multi-file
//! and directory copy operations.

use crate::error::{Error, Result};
use std::fs::{self, File};
use std::io;
use std::path::Path;

/// Create `dir` if it does not exist.
///
/// Returns `Ok(true)` if the directory was created and `Ok(false)` if
/// something already existed at that path. Any other failure is
/// [`Error::CreateDirectory`].
pub(crate) fn ensure_dir(dir: &Path, mode: u32) -> Result<bool> {
    let mut builder = fs::DirBuilder::new();

    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(mode);
    }
    #[cfg(not(unix))]
    let _ = mode;

    match builder.create(dir) {
        Ok(()) => {
            #[cfg(feature = "tracing")]
            tracing::debug!(path = %dir.display(), "created directory");
            Ok(true)
        }
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => Ok(false),
        Err(source) => Err(Error::CreateDirectory {
            path: dir.to_path_buf(),
            source,
        }),
    }
}

/// Set the permission bits of an open file.
///
/// Setting them on the handle (fchmod) rather than at open time keeps the
/// result independent of the umask. Only the file's owner may do this.
pub(crate) fn set_file_mode(file: &File, mode: u32) -> io::Result<()> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        file.set_permissions(fs::Permissions::from_mode(mode))
    }
    #[cfg(not(unix))]
    {
        let _ = (file, mode);
        Ok(())
    }
}
