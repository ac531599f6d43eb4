//! Document-level types.

use super::Paragraph;
use serde::{Deserialize, Serialize};

/// An assembled report document.
///
/// Blocks are appended in order during assembly and rendered in the same
/// order; the model never reorders them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Document metadata (title, source path, etc.)
    pub metadata: Metadata,

    /// Ordered content blocks
    pub blocks: Vec<Paragraph>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self {
            metadata: Metadata::default(),
            blocks: Vec::new(),
        }
    }

    /// Append a block to the document.
    pub fn add_block(&mut self, block: Paragraph) {
        self.blocks.push(block);
    }

    /// Get the number of blocks in the document.
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Check if the document has any blocks.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Iterate over heading blocks at the given level.
    pub fn headings(&self, level: u8) -> impl Iterator<Item = &Paragraph> {
        self.blocks
            .iter()
            .filter(move |b| b.heading_level() == Some(level))
    }

    /// Iterate over bulleted list blocks.
    pub fn bullets(&self) -> impl Iterator<Item = &Paragraph> {
        self.blocks.iter().filter(|b| b.is_list_item())
    }

    /// Get plain text content of the entire document.
    ///
    /// Blank spacer blocks are skipped; remaining blocks join with blank
    /// lines.
    pub fn plain_text(&self) -> String {
        self.blocks
            .iter()
            .filter(|b| !b.is_blank())
            .map(|b| b.plain_text())
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

/// Document metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    /// Document title
    pub title: Option<String>,

    /// Path of the Markdown source the report was generated alongside
    pub source_path: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_new() {
        let doc = Document::new();
        assert!(doc.is_empty());
        assert_eq!(doc.block_count(), 0);
    }

    #[test]
    fn test_heading_filter() {
        let mut doc = Document::new();
        doc.add_block(Paragraph::heading("Title", 1));
        doc.add_block(Paragraph::with_text("Body"));
        doc.add_block(Paragraph::heading("Section", 2));

        assert_eq!(doc.headings(1).count(), 1);
        assert_eq!(doc.headings(2).count(), 1);
        assert_eq!(doc.headings(3).count(), 0);
    }

    #[test]
    fn test_plain_text_skips_spacers() {
        let mut doc = Document::new();
        doc.add_block(Paragraph::with_text("First"));
        doc.add_block(Paragraph::new());
        doc.add_block(Paragraph::with_text("Second"));

        assert_eq!(doc.plain_text(), "First\n\nSecond");
    }
}
