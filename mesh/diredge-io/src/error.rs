//! Error types for mesh file I/O.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for mesh I/O operations.
pub type IoResult<T> = Result<T, IoError>;

/// Errors that can occur while reading or writing mesh files.
///
/// Line numbers are 1-based and count every physical line, comments
/// included.
#[derive(Debug, Error)]
pub enum IoError {
    /// File not found.
    #[error("file not found: {path}")]
    FileNotFound {
        /// Path that was not found.
        path: PathBuf,
    },

    /// Unknown file format (unrecognized extension).
    #[error("unknown file format: .{extension}")]
    UnknownFormat {
        /// The unrecognized extension.
        extension: String,
    },

    /// A line starts with a keyword this format does not know.
    #[error("line {line}: unrecognized record '{keyword}'")]
    UnrecognizedRecord {
        /// Line number.
        line: usize,
        /// The offending keyword.
        keyword: String,
    },

    /// A known record has the wrong number of values, an unparsable value or
    /// an out-of-sequence id.
    #[error("line {line}: {message}")]
    MalformedRecord {
        /// Line number.
        line: usize,
        /// What was wrong.
        message: String,
    },

    /// A triangle soup holds a different number of triangles than declared.
    #[error("invalid triangle count: expected {expected}, got {got}")]
    InvalidFaceCount {
        /// Declared number of triangles.
        expected: usize,
        /// Number of complete triangles found.
        got: usize,
    },

    /// Invalid file content.
    #[error("invalid file content: {message}")]
    InvalidContent {
        /// Description of what was invalid.
        message: String,
    },

    /// I/O error from the standard library.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Float parsing error.
    #[error("float parsing error: {0}")]
    ParseFloat(#[from] std::num::ParseFloatError),

    /// Integer parsing error.
    #[error("integer parsing error: {0}")]
    ParseInt(#[from] std::num::ParseIntError),
}

impl IoError {
    /// Create an `InvalidContent` error with the given message.
    #[must_use]
    pub fn invalid_content(message: impl Into<String>) -> Self {
        Self::InvalidContent {
            message: message.into(),
        }
    }

    /// Create a `MalformedRecord` error for a line.
    #[must_use]
    pub fn malformed(line: usize, message: impl Into<String>) -> Self {
        Self::MalformedRecord {
            line,
            message: message.into(),
        }
    }
}
