//! Shared error types for the application

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for errwrap operations
#[derive(Debug, Error)]
pub enum Error {
    /// File system related errors
    #[error("File system error: {message}")]
    FileSystem {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    /// Parsing errors
    #[error("Parse error in {file}:{line}:{column}: {message}")]
    Parse {
        file: PathBuf,
        line: usize,
        column: usize,
        message: String,
    },

    /// A file needs an import added but declares no imports at all
    #[error("{file}: expected to find an import declaration to extend with {library:?}")]
    MissingImportDeclaration { file: PathBuf, library: String },

    /// Two edits of one fix set touch the same bytes
    #[error("Overlapping edits at {first_start}..{first_end} and {second_start}..{second_end}")]
    OverlappingEdits {
        first_start: usize,
        first_end: usize,
        second_start: usize,
        second_end: usize,
    },

    /// An edit range that does not fit the text it is applied to
    #[error("Invalid edit range {start}..{end} for text of length {len}")]
    InvalidEdit { start: usize, end: usize, len: usize },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Unsupported feature errors
    #[error("Unsupported: {0}")]
    Unsupported(String),

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Directory walking errors
    #[error(transparent)]
    Walk(#[from] ignore::Error),
}

impl Error {
    /// Create a file system error with path context
    pub fn file_system(
        message: impl Into<String>,
        path: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::FileSystem {
            message: message.into(),
            path: Some(path.into()),
            source: Some(source),
        }
    }

    /// Create a parse error with location
    pub fn parse(
        file: impl Into<PathBuf>,
        line: usize,
        column: usize,
        message: impl Into<String>,
    ) -> Self {
        Self::Parse {
            file: file.into(),
            line,
            column,
            message: message.into(),
        }
    }

    /// Errors that leave a single file unanalyzed but say nothing about the others
    pub fn is_per_file(&self) -> bool {
        matches!(
            self,
            Self::FileSystem { .. }
                | Self::Parse { .. }
                | Self::MissingImportDeclaration { .. }
                | Self::Unsupported(_)
        )
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;
