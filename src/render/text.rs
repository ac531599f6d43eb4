//! Plain text rendering for report documents.

use crate::error::Result;
use crate::model::Document;

/// Convert a document to plain text.
///
/// Headings and paragraphs become lines separated by blank lines; bullets
/// gain a `- ` prefix. Spacer blocks are dropped.
pub fn to_text(doc: &Document) -> Result<String> {
    let mut parts = Vec::new();

    for block in &doc.blocks {
        if block.is_blank() {
            continue;
        }
        if block.is_list_item() {
            parts.push(format!("- {}", block.plain_text()));
        } else {
            parts.push(block.plain_text());
        }
    }

    Ok(parts.join("\n\n").trim().to_string())
}
