//! Error types for the retrodoc library.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for retrodoc operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during report generation.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The Markdown source file does not exist.
    #[error("Source file not found: {}", path.display())]
    SourceMissing {
        /// Path that was checked
        path: PathBuf,
    },

    /// The source file is not valid UTF-8.
    #[error("Source encoding error: {0}")]
    Encoding(String),

    /// Error packing the DOCX container.
    #[error("DOCX packing error: {0}")]
    Pack(String),

    /// Error during rendering (DOCX, text, JSON).
    #[error("Rendering error: {0}")]
    Render(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::SourceMissing {
            path: PathBuf::from("retrospective_assignment.md"),
        };
        assert_eq!(
            err.to_string(),
            "Source file not found: retrospective_assignment.md"
        );

        let err = Error::Pack("zip write failed".to_string());
        assert_eq!(err.to_string(), "DOCX packing error: zip write failed");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
