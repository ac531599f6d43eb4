//! DOCX rendering for report documents.

use std::io::Cursor;
use std::path::Path;

use docx_rs::{
    AbstractNumbering, AlignmentType, Docx, IndentLevel, Level, LevelJc, LevelText, LineSpacing,
    NumberFormat, Numbering, NumberingId, SpecialIndentType, Start, Style, StyleType,
};

use crate::error::{Error, Result};
use crate::model::{Alignment, Document, Paragraph, TextRun};

use super::RenderOptions;

/// Numbering definition shared by all bullet items.
const BULLET_NUMBERING_ID: usize = 1;

/// Render a document to DOCX bytes.
pub fn to_docx(doc: &Document, options: &RenderOptions) -> Result<Vec<u8>> {
    DocxRenderer::new(options.clone()).render(doc)
}

/// Render a document and write it to a file.
///
/// The file is written once, after the whole container has been assembled
/// in memory; an assembly failure leaves no file behind.
pub fn write_docx<P: AsRef<Path>>(doc: &Document, options: &RenderOptions, path: P) -> Result<()> {
    let path = path.as_ref();
    let bytes = to_docx(doc, options)?;
    std::fs::write(path, bytes)?;
    log::info!("wrote {}", path.display());
    Ok(())
}

/// DOCX renderer.
pub struct DocxRenderer {
    options: RenderOptions,
}

impl DocxRenderer {
    /// Create a new DOCX renderer.
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Render a document to DOCX bytes.
    pub fn render(&self, doc: &Document) -> Result<Vec<u8>> {
        let mut docx = Docx::new();

        if self.options.heading_styles {
            docx = docx
                .add_style(self.heading_style("Heading1", "Heading 1", crate::report::TITLE_SIZE_PT))
                .add_style(self.heading_style(
                    "Heading2",
                    "Heading 2",
                    crate::report::HEADING_SIZE_PT,
                ));
        }

        docx = docx
            .add_abstract_numbering(self.bullet_numbering())
            .add_numbering(Numbering::new(BULLET_NUMBERING_ID, BULLET_NUMBERING_ID));

        for block in &doc.blocks {
            docx = docx.add_paragraph(self.render_block(block));
        }

        let mut buf = Cursor::new(Vec::new());
        docx.build()
            .pack(&mut buf)
            .map_err(|e| Error::Pack(e.to_string()))?;

        Ok(buf.into_inner())
    }

    fn heading_style(&self, id: &str, name: &str, size_pt: f32) -> Style {
        Style::new(id, StyleType::Paragraph)
            .name(name)
            .size(half_points(size_pt))
            .bold()
    }

    fn bullet_numbering(&self) -> AbstractNumbering {
        AbstractNumbering::new(BULLET_NUMBERING_ID).add_level(
            Level::new(
                0,
                Start::new(1),
                NumberFormat::new("bullet"),
                LevelText::new(self.options.bullet_marker.to_string()),
                LevelJc::new("left"),
            )
            .indent(
                Some(self.options.bullet_indent_twips),
                Some(SpecialIndentType::Hanging(self.options.bullet_hanging_twips)),
                None,
                None,
            ),
        )
    }

    fn render_block(&self, block: &Paragraph) -> docx_rs::Paragraph {
        let mut p = docx_rs::Paragraph::new();

        for run in &block.runs {
            p = p.add_run(self.render_run(run));
        }

        if let Some(level) = block.heading_level() {
            if self.options.heading_styles {
                p = p.style(&format!("Heading{}", level));
            }
        }

        p = match block.style.alignment {
            Alignment::Left => p,
            Alignment::Center => p.align(AlignmentType::Center),
            Alignment::Right => p.align(AlignmentType::Right),
        };

        if let Some(space_after) = block.style.space_after {
            p = p.line_spacing(LineSpacing::new().after(twips(space_after)));
        }

        if block.is_list_item() {
            p = p.numbering(NumberingId::new(BULLET_NUMBERING_ID), IndentLevel::new(0));
        }

        p
    }

    fn render_run(&self, run: &TextRun) -> docx_rs::Run {
        let size = run.style.font_size.unwrap_or(self.options.default_font_size);
        let mut r = docx_rs::Run::new()
            .add_text(run.text.as_str())
            .size(half_points(size));
        if run.style.bold {
            r = r.bold();
        }
        r
    }
}

/// Convert points to the half-point units DOCX run sizes use.
fn half_points(points: f32) -> usize {
    (points * 2.0).round() as usize
}

/// Convert points to twips (20ths of a point).
fn twips(points: f32) -> u32 {
    (points * 20.0).round() as u32
}
