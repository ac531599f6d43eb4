//! # retrodoc
//!
//! Styled DOCX generation for the Sprint 3 review & retrospective report.
//!
//! The report prose is fixed and carried by the crate itself; the Markdown
//! source file on disk is read only to confirm it exists before anything is
//! generated. Assembly is strictly sequential: build the block sequence,
//! render it, write the output file once.
//!
//! ## Quick Start
//!
//! ```no_run
//! use retrodoc::Generator;
//!
//! fn main() -> retrodoc::Result<()> {
//!     let output = Generator::new().run()?;
//!     println!("Generated {}", output.display());
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod model;
pub mod render;
pub mod report;
pub mod source;

// Re-export commonly used types
pub use error::{Error, Result};
pub use model::{Alignment, Document, ListInfo, Metadata, Paragraph, ParagraphStyle, TextRun, TextStyle};
pub use render::{to_docx, to_json, to_text, write_docx, DocxRenderer, JsonFormat, RenderOptions};
pub use report::{sprint3_report, ReportBuilder, REPORT_TITLE};
pub use source::{SourceText, DEFAULT_SOURCE};

use std::path::{Path, PathBuf};

/// Default relative path of the generated DOCX.
pub const DEFAULT_OUTPUT: &str = "Sprint3_Review_Retrospective.docx";

/// Build the fixed report document.
///
/// Shorthand for [`report::sprint3_report`].
pub fn build_report() -> Document {
    report::sprint3_report()
}

/// Generate the report DOCX from a source path to an output path.
///
/// Runs the full fixed sequence: read the Markdown source (existence-wise
/// only), assemble the report blocks in order, render, and write the output
/// file once, overwriting any previous run.
pub fn generate<P: AsRef<Path>, Q: AsRef<Path>>(source: P, output: Q) -> Result<PathBuf> {
    Generator::new()
        .with_source(source.as_ref())
        .with_output(output.as_ref())
        .run()
}

/// Builder for report generation.
///
/// # Example
///
/// ```no_run
/// use retrodoc::{Generator, RenderOptions};
///
/// let output = Generator::new()
///     .with_source("retrospective_assignment.md")
///     .with_output("Sprint3_Review_Retrospective.docx")
///     .with_options(RenderOptions::new().with_bullet_marker('-'))
///     .run()?;
/// # Ok::<(), retrodoc::Error>(())
/// ```
pub struct Generator {
    source: PathBuf,
    output: PathBuf,
    options: RenderOptions,
}

impl Generator {
    /// Create a new generator with the default fixed paths.
    pub fn new() -> Self {
        Self {
            source: PathBuf::from(DEFAULT_SOURCE),
            output: PathBuf::from(DEFAULT_OUTPUT),
            options: RenderOptions::default(),
        }
    }

    /// Set the Markdown source path.
    pub fn with_source(mut self, path: impl Into<PathBuf>) -> Self {
        self.source = path.into();
        self
    }

    /// Set the output DOCX path.
    pub fn with_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.output = path.into();
        self
    }

    /// Set the render options.
    pub fn with_options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    /// Run the generation sequence and return the output path.
    pub fn run(self) -> Result<PathBuf> {
        let source = SourceText::read(&self.source)?;
        log::debug!(
            "source {} present ({} words); prose is fixed, content is not derived from it",
            source.path.display(),
            source.word_count()
        );

        let mut doc = build_report();
        doc.metadata.source_path = Some(source.path.display().to_string());

        write_docx(&doc, &self.options, &self.output)?;
        Ok(self.output)
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generator_defaults() {
        let gen = Generator::new();
        assert_eq!(gen.source, PathBuf::from(DEFAULT_SOURCE));
        assert_eq!(gen.output, PathBuf::from(DEFAULT_OUTPUT));
    }

    #[test]
    fn test_generator_overrides() {
        let gen = Generator::new()
            .with_source("notes.md")
            .with_output("out.docx");
        assert_eq!(gen.source, PathBuf::from("notes.md"));
        assert_eq!(gen.output, PathBuf::from("out.docx"));
    }

    #[test]
    fn test_build_report_has_title() {
        let doc = build_report();
        assert_eq!(doc.metadata.title.as_deref(), Some(REPORT_TITLE));
        assert!(!doc.is_empty());
    }

    #[test]
    fn test_generate_missing_source() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("absent.md");
        let output = dir.path().join("out.docx");

        let result = generate(&source, &output);
        assert!(matches!(result, Err(Error::SourceMissing { .. })));
        assert!(!output.exists());
    }
}
