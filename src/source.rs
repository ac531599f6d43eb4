//! Markdown source file handling.
//!
//! The report prose is hardcoded in [`crate::report`]; the Markdown source
//! is read only to confirm it exists and to surface basic statistics. Its
//! content never feeds the generated document.

use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Default relative path of the Markdown source.
pub const DEFAULT_SOURCE: &str = "retrospective_assignment.md";

/// Contents of the Markdown source file.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceText {
    /// Path the source was read from
    pub path: PathBuf,

    /// Raw UTF-8 contents
    pub text: String,
}

impl SourceText {
    /// Read the Markdown source from a path.
    ///
    /// Fails with [`Error::SourceMissing`] when the file does not exist and
    /// [`Error::Encoding`] when the bytes are not valid UTF-8. Other I/O
    /// failures propagate as [`Error::Io`].
    pub fn read<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(Error::SourceMissing {
                path: path.to_path_buf(),
            });
        }

        let bytes = fs::read(path)?;
        let text = String::from_utf8(bytes)
            .map_err(|e| Error::Encoding(format!("{}: {}", path.display(), e)))?;

        log::debug!(
            "read source {} ({} bytes)",
            path.display(),
            text.len()
        );

        Ok(Self {
            path: path.to_path_buf(),
            text,
        })
    }

    /// Number of whitespace-separated words in the source.
    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }

    /// Number of characters in the source.
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// Number of lines in the source.
    pub fn line_count(&self) -> usize {
        self.text.lines().count()
    }
}
