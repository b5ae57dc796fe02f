//! Extension normalization and classification.

use std::fmt;

/// Extensions written verbatim as UTF-8 text.
pub const TEXT_EXTENSIONS: &[&str] = &["txt", "md", "csv", "json", "html", "css", "js", "py"];

/// Extensions rendered as raster images.
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "bmp", "gif"];

/// Raster encodings the image generator can write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RasterFormat {
    Jpeg,
    Png,
    Bmp,
    Gif,
}

/// Which generator handles an extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileKind {
    Text,
    Pdf,
    Image(RasterFormat),
}

/// A normalized, lower-case extension without leading dots.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Extension(String);

impl Extension {
    /// Normalizes raw user input: `".PNG"` becomes `"png"`.
    pub fn parse(raw: &str) -> Self {
        Extension(raw.trim().trim_start_matches('.').to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `None` for extensions no generator supports.
    pub fn kind(&self) -> Option<FileKind> {
        let ext = self.as_str();
        if TEXT_EXTENSIONS.contains(&ext) {
            return Some(FileKind::Text);
        }
        let kind = match ext {
            "pdf" => FileKind::Pdf,
            "jpg" | "jpeg" => FileKind::Image(RasterFormat::Jpeg),
            "png" => FileKind::Image(RasterFormat::Png),
            "bmp" => FileKind::Image(RasterFormat::Bmp),
            "gif" => FileKind::Image(RasterFormat::Gif),
            _ => return None,
        };
        Some(kind)
    }
}

impl fmt::Display for Extension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Extension {
    fn from(raw: &str) -> Self {
        Extension::parse(raw)
    }
}
