//! Error types for copyfile.
//!
//! This module provides the [`Error`] enum containing all possible errors
//! that can occur during copy operations, the [`Result`] type alias, and
//! [`ErrorCode`] for stable, machine-readable classification.
//!
//! # Error Categories
//!
//! | Category | Errors |
//! |----------|--------|
//! | Source | [`Error::OpenSource`], [`Error::Read`], [`Error::ReadDirectory`], [`Error::IsADirectory`], [`Error::NoFileName`] |
//! | Target | [`Error::CreateTarget`], [`Error::Write`], [`Error::ShortWrite`], [`Error::CreateDirectory`] |
//!
//! Every I/O failure is fatal to the operation that hit it. Files copied
//! before the failure are left in place.

use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for copyfile operations.
///
/// This is a type alias for `std::result::Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;

/// Check if an IO error indicates "no space left on device".
///
/// # Platform Support
///
/// | Platform | Error Detection |
/// |----------|-----------------|
/// | Unix | `ENOSPC` (errno 28) |
/// | Windows | `ERROR_DISK_FULL` (0x70) |
///
/// # Example
///
/// ```
/// use std::io;
/// use copyfile::is_no_space_error;
///
/// let error = io::Error::new(io::ErrorKind::StorageFull, "disk full");
/// assert!(is_no_space_error(&error));
/// ```
pub fn is_no_space_error(error: &io::Error) -> bool {
    if error.kind() == io::ErrorKind::StorageFull {
        return true;
    }

    #[cfg(unix)]
    {
        if let Some(raw_error) = error.raw_os_error() {
            const ENOSPC: i32 = 28;
            return raw_error == ENOSPC;
        }
    }

    #[cfg(windows)]
    {
        if let Some(raw_error) = error.raw_os_error() {
            const ERROR_DISK_FULL: i32 = 112;
            return raw_error == ERROR_DISK_FULL;
        }
    }

    false
}

/// Stable classification of an [`Error`].
///
/// The string form (see [`ErrorCode::as_str`]) is what the command-line
/// front end prints in `error[CODE]: ...` diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorCode {
    /// Source path does not exist
    SourceNotFound,
    /// The OS refused access to a source or target
    PermissionDenied,
    /// A directory was found where a regular file was expected
    IsADirectory,
    /// Destination storage is full
    NoSpace,
    /// Malformed input (for example a path without a final component)
    InvalidInput,
    /// Any other I/O failure
    IoError,
}

impl ErrorCode {
    /// Snake-case identifier for this code.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SourceNotFound => "source_not_found",
            Self::PermissionDenied => "permission_denied",
            Self::IsADirectory => "is_a_directory",
            Self::NoSpace => "no_space",
            Self::InvalidInput => "invalid_input",
            Self::IoError => "io_error",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that can occur during copy operations.
///
/// All errors include the path involved. I/O variants keep the underlying
/// [`io::Error`] as their source, and its OS description is part of the
/// display message.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Source file could not be opened for reading
    #[error("Error opening source file {path}: {source}")]
    OpenSource {
        /// Source path
        path: PathBuf,
        /// Underlying error
        source: io::Error,
    },

    /// Target file could not be created or truncated
    #[error("Error opening target file {path}: {source}")]
    CreateTarget {
        /// Target path
        path: PathBuf,
        /// Underlying error
        source: io::Error,
    },

    /// Reading from the source failed
    #[error("Error reading source file {path}: {source}")]
    Read {
        /// Source path
        path: PathBuf,
        /// Underlying error
        source: io::Error,
    },

    /// Writing to the target failed
    #[error("Error writing to target file {path}: {source}")]
    Write {
        /// Target path
        path: PathBuf,
        /// Underlying error
        source: io::Error,
    },

    /// A write accepted fewer bytes than were read
    #[error("Error writing to target file {path}: wrote {written} of {expected} bytes")]
    ShortWrite {
        /// Target path
        path: PathBuf,
        /// Bytes read from the source for this chunk
        expected: usize,
        /// Bytes the target accepted
        written: usize,
    },

    /// Source is a directory, not a regular file
    #[error("Source is a directory: {0}")]
    IsADirectory(PathBuf),

    /// Source directory could not be opened or enumerated
    #[error("Error opening source directory {path}: {source}")]
    ReadDirectory {
        /// Source directory path
        path: PathBuf,
        /// Underlying error
        source: io::Error,
    },

    /// Target directory could not be created
    #[error("Error creating target directory {path}: {source}")]
    CreateDirectory {
        /// Target directory path
        path: PathBuf,
        /// Underlying error
        source: io::Error,
    },

    /// Source path has no final component to name the copy after
    #[error("Source has no file name: {0}")]
    NoFileName(PathBuf),
}

impl Error {
    /// Classify this error.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::IsADirectory(_) => ErrorCode::IsADirectory,
            Self::NoFileName(_) => ErrorCode::InvalidInput,
            Self::ShortWrite { .. } => ErrorCode::IoError,
            Self::OpenSource { source, .. } | Self::ReadDirectory { source, .. }
                if source.kind() == io::ErrorKind::NotFound =>
            {
                ErrorCode::SourceNotFound
            }
            Self::OpenSource { source, .. }
            | Self::CreateTarget { source, .. }
            | Self::Read { source, .. }
            | Self::Write { source, .. }
            | Self::ReadDirectory { source, .. }
            | Self::CreateDirectory { source, .. } => io_error_code(source),
        }
    }
}

fn io_error_code(error: &io::Error) -> ErrorCode {
    if is_no_space_error(error) {
        return ErrorCode::NoSpace;
    }
    match error.kind() {
        io::ErrorKind::PermissionDenied => ErrorCode::PermissionDenied,
        io::ErrorKind::IsADirectory => ErrorCode::IsADirectory,
        _ => ErrorCode::IoError,
    }
}
