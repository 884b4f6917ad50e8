//! copyfile - copy a file, several files, or a flat directory
//!
//! Command-line front end for the copyfile library.

use clap::{ArgGroup, CommandFactory, Parser};
use copyfile::{
    CopyEvent, CopyOptions, Error as CopyError, ErrorCode, copy_dir, copy_file, copy_files,
};
use std::io::{self, Write};
use std::path::PathBuf;
use thiserror::Error;

/// copyfile - copy files with a plain buffered read/write loop
///
/// Exactly one of -f, -m or -d selects the mode. Flags may appear anywhere
/// on the command line.
#[derive(Parser, Debug)]
#[command(
    name = "copyfile",
    version,
    about,
    long_about = None,
    override_usage = "copyfile -f [-v] SOURCE_FILE TARGET_FILE\n       \
                      copyfile -m [-v] SOURCE_FILE... TARGET_DIR\n       \
                      copyfile -d [-v] SOURCE_DIR TARGET_DIR",
    group(ArgGroup::new("mode").required(true).args(["file", "multiple", "directory"]))
)]
struct Args {
    /// Copy one file: SOURCE_FILE TARGET_FILE
    #[arg(short = 'f', long)]
    file: bool,

    /// Copy several files into a directory: SOURCE_FILE... TARGET_DIR
    #[arg(short = 'm', long)]
    multiple: bool,

    /// Copy the entries of a directory (not recursive): SOURCE_DIR TARGET_DIR
    #[arg(short = 'd', long)]
    directory: bool,

    /// Print a line for every copied file
    #[arg(short = 'v', long)]
    verbose: bool,

    /// Source path(s) followed by the target path
    #[arg(value_name = "PATH")]
    paths: Vec<PathBuf>,
}

/// What to copy, resolved from the command line.
#[derive(Debug, PartialEq, Eq)]
enum Mode {
    File { src: PathBuf, dst: PathBuf },
    Multiple { sources: Vec<PathBuf>, target_dir: PathBuf },
    Directory { src: PathBuf, dst: PathBuf },
}

/// Fully parsed invocation.
#[derive(Debug, PartialEq, Eq)]
struct Config {
    mode: Mode,
    verbose: bool,
}

impl Config {
    fn from_args(args: Args) -> CliResult<Self> {
        let Args {
            file,
            multiple,
            directory,
            verbose,
            mut paths,
        } = args;

        let mode = if file {
            let [src, dst] = exactly_two(paths, "-f", "SOURCE_FILE TARGET_FILE")?;
            Mode::File { src, dst }
        } else if multiple {
            if paths.len() < 2 {
                return Err(CliError::Usage {
                    message: format!(
                        "-m expects SOURCE_FILE... TARGET_DIR (got {} path(s))",
                        paths.len()
                    ),
                });
            }
            let target_dir = paths.pop().ok_or_else(|| CliError::Usage {
                message: "-m is missing TARGET_DIR".to_owned(),
            })?;
            Mode::Multiple {
                sources: paths,
                target_dir,
            }
        } else if directory {
            let [src, dst] = exactly_two(paths, "-d", "SOURCE_DIR TARGET_DIR")?;
            Mode::Directory { src, dst }
        } else {
            return Err(CliError::Usage {
                message: "one of -f, -m or -d is required".to_owned(),
            });
        };

        Ok(Self { mode, verbose })
    }
}

fn exactly_two(paths: Vec<PathBuf>, flag: &str, operands: &str) -> CliResult<[PathBuf; 2]> {
    let count = paths.len();
    <[PathBuf; 2]>::try_from(paths).map_err(|_| CliError::Usage {
        message: format!("{flag} expects {operands} (got {count} path(s))"),
    })
}

type CliResult<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
enum CliError {
    #[error("{message}")]
    Usage { message: String },

    #[error(transparent)]
    Copy(#[from] CopyError),
}

impl CliError {
    fn code(&self) -> ErrorCode {
        match self {
            Self::Usage { .. } => ErrorCode::InvalidInput,
            Self::Copy(source) => source.code(),
        }
    }
}

fn exit_code_for(error: &CliError) -> i32 {
    match error {
        CliError::Usage { .. } => 2,
        CliError::Copy(_) => 1,
    }
}

fn main() {
    if let Err(error) = run() {
        eprintln!("error[{}]: {}", error.code(), error);
        if matches!(error, CliError::Usage { .. }) {
            eprintln!();
            eprintln!("{}", Args::command().render_usage());
        }
        std::process::exit(exit_code_for(&error));
    }
}

fn run() -> CliResult<()> {
    let config = Config::from_args(Args::parse())?;

    let options = CopyOptions::default()
        .with_verbose(config.verbose)
        .with_report_handler(print_event);

    match config.mode {
        Mode::File { src, dst } => {
            copy_file(&src, &dst, &options)?;
        }
        Mode::Multiple {
            sources,
            target_dir,
        } => {
            copy_files(&sources, &target_dir, &options)?;
        }
        Mode::Directory { src, dst } => {
            copy_dir(&src, &dst, &options)?;
        }
    }

    Ok(())
}

fn print_event(event: &CopyEvent) {
    if let Err(e) = write_event(&mut io::stdout().lock(), event) {
        eprintln!("warning: failed to write to stdout: {e}");
    }
}

/// Write the verbose line for `event`. A reader that went away is not an error.
fn write_event<W: Write>(out: &mut W, event: &CopyEvent) -> io::Result<()> {
    let result = match event {
        CopyEvent::File { src, dst, .. } => {
            writeln!(out, "Copied {} to {}", src.display(), dst.display())
        }
        CopyEvent::Directory { src, dst, files } => writeln!(
            out,
            "Copied directory {} to {} ({} files)",
            src.display(),
            dst.display(),
            files
        ),
    };

    match result {
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        other => other,
    }
}
