//! Types for errors that can occur while detecting or converting a property list.
use std::path::PathBuf;

use thiserror::Error;

use crate::{enums::PlistFormat, process::ToolStatus};

/// Exit code reported when the target path doesn't refer to a regular file.
pub const EXIT_NOT_FOUND: u8 = 2;
/// Exit code reported when the detected type matches neither encoding.
pub const EXIT_UNSUPPORTED_FORMAT: u8 = 3;
/// Exit code reported for I/O failures and detector failures.
pub const EXIT_INTERNAL: u8 = 1;

/// An error that can occur while flipping a property list.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The wrong number of paths was passed on the command line.
    #[error("Usage: {program} <plist-file>")]
    Usage {
        /// The name the program was invoked as.
        program: String,
    },
    /// The target path doesn't exist or isn't a regular file.
    #[error("Error: File {} not found!", .path.display())]
    NotFound {
        /// The path as given by the caller.
        path: PathBuf,
    },
    /// The detector's description matched neither recognized encoding.
    #[error("Error: Unsupported file format\nDetected type: {detected}")]
    UnsupportedFormat {
        /// The raw, trimmed output of the detector.
        detected: String,
    },
    /// The converter ran but reported failure.
    #[error("Error: Conversion to {target} failed ({status})")]
    Conversion {
        /// The encoding that was requested.
        target: PlistFormat,
        /// How the converter exited.
        status: ToolStatus,
    },
    /// The detector ran but reported failure.
    #[error("Error: Unable to detect file type with '{program}' ({status})")]
    Detection {
        /// The detection program.
        program: String,
        /// How the detector exited.
        status: ToolStatus,
    },
    /// An I/O error while spawning a tool or touching file metadata.
    #[error("Error: IO error: {source} while {context}")]
    Io {
        /// The original error.
        #[source]
        source: std::io::Error,
        /// The context in which the error occurred.
        context: String,
    },
}
/// An alias for a `Result` with [`plistflip::Error`](crate::Error) as the error type.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Creates a new I/O [`plistflip::Error`](crate::Error).
    pub fn io(error: std::io::Error, context: impl ToString) -> Self {
        Self::Io {
            source: error,
            context: context.to_string(),
        }
    }

    /// Creates a new usage [`plistflip::Error`](crate::Error).
    pub fn usage(program: impl ToString) -> Self {
        Self::Usage {
            program: program.to_string(),
        }
    }

    /// Returns the process exit code this error should be reported with.
    ///
    /// A usage error exits successfully. This mirrors the long-standing behavior of
    /// the tool even though most command-line programs would exit non-zero.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Usage { .. } => 0,
            Self::NotFound { .. } => EXIT_NOT_FOUND,
            Self::UnsupportedFormat { .. } => EXIT_UNSUPPORTED_FORMAT,
            Self::Conversion { status, .. } => status.exit_code(),
            Self::Detection { .. } | Self::Io { .. } => EXIT_INTERNAL,
        }
    }
}
