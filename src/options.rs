//! Configuration options for copy operations.
//!
//! This module provides [`CopyOptions`] for configuring copy behavior and
//! [`CopyEvent`] for observing completed copies.
//!
//! # Example
//!
//! ```
//! use copyfile::CopyOptions;
//!
//! let options = CopyOptions::default()
//!     .with_verbose(true)
//!     .with_buffer_size(64 * 1024);
//! ```

use std::path::PathBuf;

/// Size of the read/write buffer used by the byte-copy loop.
pub const DEFAULT_BUFFER_SIZE: usize = 4096;

/// Mode for newly created target files (`rw-r--r--`).
pub const DEFAULT_FILE_MODE: u32 = 0o644;

/// Mode for newly created target directories, before the umask is applied.
pub const DEFAULT_DIR_MODE: u32 = 0o777;

/// A completed unit of work, reported when [`CopyOptions::verbose`] is set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyEvent {
    /// A single file was copied.
    File {
        /// Source file path
        src: PathBuf,
        /// Target file path
        dst: PathBuf,
        /// Number of bytes copied
        bytes: u64,
    },
    /// Every entry of a directory was copied.
    Directory {
        /// Source directory path
        src: PathBuf,
        /// Target directory path
        dst: PathBuf,
        /// Number of files copied
        files: u64,
    },
}

/// Options for copy operations.
///
/// Use [`Default::default()`] to get sensible defaults, then customize
/// using the builder methods.
///
/// # Default Values
///
/// | Field | Default | Description |
/// |-------|---------|-------------|
/// | `verbose` | `false` | Report each completed copy |
/// | `buffer_size` | 4096 | Bytes moved per read/write |
/// | `file_mode` | `0o644` | Mode of new target files (Unix) |
/// | `dir_mode` | `0o777` | Mode of created directories, umask applies (Unix) |
/// | `report_handler` | `None` | Receiver for [`CopyEvent`]s |
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CopyOptions {
    /// Report every copied file and completed directory (default: false)
    pub verbose: bool,

    /// Size of the copy buffer in bytes (default: 4096)
    pub buffer_size: usize,

    /// Permission bits for newly created target files (default: `0o644`)
    ///
    /// Applied to the new file's handle, so the result does not depend on
    /// the process umask or on the source's permissions. Existing targets
    /// keep their mode. Ignored on non-Unix platforms.
    pub file_mode: u32,

    /// Permission bits requested for created directories (default: `0o777`)
    ///
    /// The process umask still applies. Ignored on non-Unix platforms.
    pub dir_mode: u32,

    /// Callback for copy events (optional)
    ///
    /// Only invoked when `verbose` is set. If not set and the `tracing`
    /// feature is enabled, events are logged via tracing instead.
    #[cfg_attr(feature = "serde", serde(skip))]
    pub report_handler: Option<fn(&CopyEvent)>,
}

impl Default for CopyOptions {
    fn default() -> Self {
        Self {
            verbose: false,
            buffer_size: DEFAULT_BUFFER_SIZE,
            file_mode: DEFAULT_FILE_MODE,
            dir_mode: DEFAULT_DIR_MODE,
            report_handler: None,
        }
    }
}

impl CopyOptions {
    /// Enable or disable verbose reporting
    #[must_use]
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Set the copy buffer size
    ///
    /// Value is clamped to at least 1 so the copy loop always makes progress.
    #[must_use]
    pub fn with_buffer_size(mut self, size: usize) -> Self {
        self.buffer_size = size.max(1);
        self
    }

    /// Set the permission bits for target files
    #[must_use]
    pub fn with_file_mode(mut self, mode: u32) -> Self {
        self.file_mode = mode;
        self
    }

    /// Set the permission bits for created directories
    #[must_use]
    pub fn with_dir_mode(mut self, mode: u32) -> Self {
        self.dir_mode = mode;
        self
    }

    /// Install a receiver for copy events
    #[must_use]
    pub fn with_report_handler(mut self, handler: fn(&CopyEvent)) -> Self {
        self.report_handler = Some(handler);
        self
    }

    pub(crate) fn report(&self, event: CopyEvent) {
        if !self.verbose {
            return;
        }
        if let Some(handler) = self.report_handler {
            handler(&event);
        } else {
            #[cfg(feature = "tracing")]
            match &event {
                CopyEvent::File { src, dst, bytes } => {
                    tracing::info!(src = %src.display(), dst = %dst.display(), bytes, "copied file");
                }
                CopyEvent::Directory { src, dst, files } => {
                    tracing::info!(src = %src.display(), dst = %dst.display(), files, "copied directory");
                }
            };
        }
    }
}
