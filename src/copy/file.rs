//! Single file copy operations.
//!
//! This module provides the byte-copy primitive: open the source, create or
//! truncate the target, and move bytes through a fixed-size buffer until the
//! source is exhausted.

use crate::error::{Error, Result};
use crate::options::{CopyEvent, CopyOptions};
use std::fs::{File, OpenOptions};
use std::io::{self, Read, Write};
use std::path::Path;

use super::utils::set_file_mode;

/// Copy a single file
///
/// The target is created if missing and truncated if present, then receives
/// every byte of the source. A newly created target gets
/// [`CopyOptions::file_mode`] regardless of the source's permissions; an
/// existing target keeps its own mode.
///
/// # Arguments
///
/// * `src` - Source file path
/// * `dst` - Destination file path
/// * `options` - Copy options
///
/// # Returns
///
/// Returns the number of bytes copied.
///
/// # Errors
///
/// Returns an error if:
/// - Source cannot be opened ([`Error::OpenSource`])
/// - Source is a directory ([`Error::IsADirectory`])
/// - Target cannot be created or truncated ([`Error::CreateTarget`])
/// - A read or write fails ([`Error::Read`], [`Error::Write`])
/// - A write accepts fewer bytes than were read ([`Error::ShortWrite`])
///
/// # Example
///
/// ```no_run
/// use copyfile::{copy_file, CopyOptions};
/// use std::path::Path;
///
/// let bytes = copy_file(Path::new("notes.txt"), Path::new("notes.bak"), &CopyOptions::default())?;
/// println!("Copied {} bytes", bytes);
/// # Ok::<(), copyfile::Error>(())
/// ```
pub fn copy_file(src: &Path, dst: &Path, options: &CopyOptions) -> Result<u64> {
    let mut src_file = File::open(src).map_err(|source| Error::OpenSource {
        path: src.to_path_buf(),
        source,
    })?;

    // A directory opens fine on Unix and only fails on the first read, after
    // the target has already been created. Reject it up front.
    let src_meta = src_file.metadata().map_err(|source| Error::OpenSource {
        path: src.to_path_buf(),
        source,
    })?;
    if src_meta.is_dir() {
        return Err(Error::IsADirectory(src.to_path_buf()));
    }

    let mut dst_file = create_target(dst, options.file_mode)?;

    let bytes = copy_contents(
        &mut src_file,
        &mut dst_file,
        options.buffer_size,
        src,
        dst,
    )?;

    drop(src_file);
    drop(dst_file);

    #[cfg(feature = "tracing")]
    tracing::debug!(src = %src.display(), dst = %dst.display(), bytes, "file copied");

    options.report(CopyEvent::File {
        src: src.to_path_buf(),
        dst: dst.to_path_buf(),
        bytes,
    });

    Ok(bytes)
}

/// Open `dst` for writing. A new file gets `mode`; an existing one is truncated as is.
fn create_target(dst: &Path, mode: u32) -> Result<File> {
    let create_err = |source: io::Error| Error::CreateTarget {
        path: dst.to_path_buf(),
        source,
    };

    let mut create = OpenOptions::new();
    create.write(true).create_new(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        create.mode(mode);
    }

    match create.open(dst) {
        Ok(file) => {
            // We own the new file, so chmod cannot fail for lack of ownership.
            set_file_mode(&file, mode).map_err(create_err)?;
            Ok(file)
        }
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
            // Existing targets keep their mode; writable is enough, owning is not required.
            OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(dst)
                .map_err(create_err)
        }
        Err(source) => Err(create_err(source)),
    }
}

/// Move every byte from `reader` to `writer` in chunks of `buffer_size`.
///
/// Each chunk is handed to a single `write` call; a write that accepts fewer
/// bytes than the chunk holds is an error rather than a reason to loop.
fn copy_contents<R: Read, W: Write>(
    reader: &mut R,
    writer: &mut W,
    buffer_size: usize,
    src: &Path,
    dst: &Path,
) -> Result<u64> {
    let mut buffer = vec![0u8; buffer_size.max(1)];
    let mut copied: u64 = 0;

    loop {
        let read = match reader.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(source) => {
                return Err(Error::Read {
                    path: src.to_path_buf(),
                    source,
                });
            }
        };

        let written = loop {
            match writer.write(&buffer[..read]) {
                Ok(n) => break n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(source) => {
                    return Err(Error::Write {
                        path: dst.to_path_buf(),
                        source,
                    });
                }
            }
        };

        if written != read {
            return Err(Error::ShortWrite {
                path: dst.to_path_buf(),
                expected: read,
                written,
            });
        }

        copied += read as u64;
    }

    Ok(copied)
}

// =============================================================================
// Tests
// =============================================================================
