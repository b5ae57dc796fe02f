//! Layout and output settings for the generators.

use std::path::PathBuf;

/// Points per millimetre.
const MM: f64 = 72.0 / 25.4;

/// Page layout used by the PDF generator. Units are PDF points.
#[derive(Debug, Clone, PartialEq)]
pub struct PdfLayout {
    /// Maximum characters per line.
    pub wrap_width: usize,
    pub font_size: f64,
    pub row_height: f64,
    pub page_width: f64,
    pub page_height: f64,
    pub margin_left: f64,
    pub margin_top: f64,
    /// Rows stop here; further rows go on a new page.
    pub margin_bottom: f64,
}

impl Default for PdfLayout {
    fn default() -> Self {
        Self {
            wrap_width: 80,
            font_size: 12.0,
            row_height: 10.0 * MM,
            page_width: 595.0,
            page_height: 842.0,
            margin_left: 10.0 * MM,
            margin_top: 10.0 * MM,
            margin_bottom: 20.0 * MM,
        }
    }
}

impl PdfLayout {
    /// Number of rows that fit between the top and bottom margins.
    pub fn rows_per_page(&self) -> usize {
        let usable = self.page_height - self.margin_top - self.margin_bottom;
        ((usable / self.row_height).floor() as usize).max(1)
    }
}

/// Canvas layout used by the image generator. Units are pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageLayout {
    pub width: u32,
    pub height: u32,
    /// Maximum characters per line.
    pub wrap_width: usize,
    /// Pixel height for TrueType fonts.
    pub font_size: f32,
    /// First baseline row, and the space kept free at the bottom.
    pub margin: u32,
    /// Extra pixels between stacked lines.
    pub line_spacing: u32,
}

impl Default for ImageLayout {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            wrap_width: 40,
            font_size: 20.0,
            margin: 50,
            line_spacing: 5,
        }
    }
}

/// Settings shared by all generators.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorOptions {
    pub output_dir: PathBuf,
    /// Font files tried before the default font chain.
    pub fonts: Vec<PathBuf>,
    /// Search the working directory and system font directories for the
    /// preferred fonts. When off, images use the built-in bitmap font unless
    /// one of `fonts` loads.
    pub system_fonts: bool,
    pub pdf: PdfLayout,
    pub image: ImageLayout,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            fonts: Vec::new(),
            system_fonts: true,
            pdf: PdfLayout::default(),
            image: ImageLayout::default(),
        }
    }
}

impl GeneratorOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    pub fn with_font(mut self, path: impl Into<PathBuf>) -> Self {
        self.fonts.push(path.into());
        self
    }

    pub fn with_fonts<I, P>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.fonts.extend(paths.into_iter().map(Into::into));
        self
    }

    pub fn without_system_fonts(mut self) -> Self {
        self.system_fonts = false;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = GeneratorOptions::default();
        assert_eq!(options.output_dir, PathBuf::from("."));
        assert!(options.fonts.is_empty());
        assert!(options.system_fonts);
        assert_eq!(options.pdf.wrap_width, 80);
        assert_eq!(options.image.wrap_width, 40);
        assert_eq!((options.image.width, options.image.height), (800, 600));
    }

    #[test]
    fn test_pdf_rows_per_page() {
        let layout = PdfLayout::default();
        // 297mm page, 10mm top, 20mm bottom, 10mm rows.
        assert_eq!(layout.rows_per_page(), 26);
    }

    #[test]
    fn test_builder() {
        let options = GeneratorOptions::new()
            .with_output_dir("/tmp/out")
            .with_font("a.ttf")
            .with_fonts(["b.ttf", "c.ttf"])
            .without_system_fonts();
        assert_eq!(options.output_dir, PathBuf::from("/tmp/out"));
        assert!(!options.system_fonts);
        assert_eq!(
            options.fonts,
            vec![
                PathBuf::from("a.ttf"),
                PathBuf::from("b.ttf"),
                PathBuf::from("c.ttf")
            ]
        );
    }
}
