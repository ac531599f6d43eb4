//! Rendering options and configuration.

/// Options for rendering report documents.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Font size in points for runs that carry no explicit size
    pub default_font_size: f32,

    /// Character used for bullet markers
    pub bullet_marker: char,

    /// Left indent of bullet items, in twips
    pub bullet_indent_twips: i32,

    /// Hanging indent of the bullet marker, in twips
    pub bullet_hanging_twips: i32,

    /// Register Heading1/Heading2 paragraph styles on the DOCX
    pub heading_styles: bool,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the default font size in points.
    pub fn with_default_font_size(mut self, points: f32) -> Self {
        self.default_font_size = points;
        self
    }

    /// Set the bullet marker character.
    pub fn with_bullet_marker(mut self, marker: char) -> Self {
        self.bullet_marker = marker;
        self
    }

    /// Set the bullet indents in twips.
    pub fn with_bullet_indent(mut self, indent: i32, hanging: i32) -> Self {
        self.bullet_indent_twips = indent;
        self.bullet_hanging_twips = hanging;
        self
    }

    /// Enable or disable heading style registration.
    pub fn with_heading_styles(mut self, enabled: bool) -> Self {
        self.heading_styles = enabled;
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            default_font_size: crate::report::BODY_SIZE_PT,
            bullet_marker: '\u{2022}',
            bullet_indent_twips: 720,
            bullet_hanging_twips: 360,
            heading_styles: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = RenderOptions::default();
        assert_eq!(options.default_font_size, 12.0);
        assert_eq!(options.bullet_marker, '\u{2022}');
        assert!(options.heading_styles);
    }

    #[test]
    fn test_builder() {
        let options = RenderOptions::new()
            .with_default_font_size(11.0)
            .with_bullet_indent(600, 300)
            .with_heading_styles(false);

        assert_eq!(options.default_font_size, 11.0);
        assert_eq!(options.bullet_indent_twips, 600);
        assert_eq!(options.bullet_hanging_twips, 300);
        assert!(!options.heading_styles);
    }
}
