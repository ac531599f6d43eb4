//! Document model types for report content representation.
//!
//! This module defines the intermediate representation (IR) that bridges
//! report assembly and rendering. The model is format-agnostic: the same
//! block sequence can be rendered to DOCX, plain text, or JSON.

mod document;
mod paragraph;

pub use document::{Document, Metadata};
pub use paragraph::{Alignment, ListInfo, Paragraph, ParagraphStyle, TextRun, TextStyle};
