//! # copyfile
//!
//! Plain, buffered file copying: one file, several files into a directory, or
//! the immediate entries of one directory into another.
//!
//! ## Operations
//!
//! - [`copy_file`]: create or truncate the target and stream every byte of
//!   the source into it through a 4096-byte buffer
//! - [`copy_files`]: copy an ordered list of files into a directory under
//!   their base names
//! - [`copy_dir`]: copy each entry of a directory into another directory,
//!   one level deep
//!
//! ## Quick Start
//!
//! ```no_run
//! use copyfile::{copy_dir, CopyOptions};
//! use std::path::Path;
//!
//! let options = CopyOptions::default().with_verbose(true);
//! let stats = copy_dir(Path::new("photos"), Path::new("backup"), &options)?;
//! println!("Copied {} files ({} bytes)", stats.files_copied, stats.bytes_copied);
//! # Ok::<(), copyfile::Error>(())
//! ```
//!
//! ## Behavior
//!
//! - Targets are always truncated, never appended to or skipped
//! - New target files get mode `0o644` (see [`CopyOptions::file_mode`]);
//!   created directories request `0o777` minus the umask
//! - The first failure ends the operation; nothing is rolled back
//! - Directory copies do not recurse; a nested directory is an error
//!
//! ## Optional Features
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `tracing` | Structured logging with tracing crate |
//! | `serde` | Serialize/Deserialize for [`CopyOptions`] |
//! | `full` | Enable all optional features |

#![cfg_attr(docsrs, feature(doc_cfg))]

mod copy;
mod error;
mod options;
mod utils;

pub use copy::{CopyStats, copy_dir, copy_file, copy_files};
pub use error::{Error, ErrorCode, Result, is_no_space_error};
pub use options::{
    CopyEvent, CopyOptions, DEFAULT_BUFFER_SIZE, DEFAULT_DIR_MODE, DEFAULT_FILE_MODE,
};
