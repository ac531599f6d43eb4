//! Rendering module for converting report documents to output formats.

mod docx;
mod json;
mod options;
mod text;

pub use docx::{to_docx, write_docx, DocxRenderer};
pub use json::{to_json, JsonFormat};
pub use options::RenderOptions;
pub use text::to_text;
