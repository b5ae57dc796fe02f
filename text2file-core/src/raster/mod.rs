//! Raster image output: wrapped text centred on a white canvas.

#[cfg(feature = "images")]
pub mod fonts;

use crate::error::Result;
use crate::extension::RasterFormat;
use crate::options::GeneratorOptions;
use std::path::{Path, PathBuf};

#[cfg(feature = "images")]
use crate::{naming, options::ImageLayout, wrap::wrap};
#[cfg(feature = "images")]
use fonts::TextFont;
#[cfg(feature = "images")]
use image::{ImageFormat, Rgb, RgbImage};

#[cfg(feature = "images")]
const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);
#[cfg(feature = "images")]
const FOREGROUND: Rgb<u8> = Rgb([0, 0, 0]);

#[cfg(feature = "images")]
impl From<RasterFormat> for ImageFormat {
    fn from(format: RasterFormat) -> Self {
        match format {
            RasterFormat::Jpeg => ImageFormat::Jpeg,
            RasterFormat::Png => ImageFormat::Png,
            RasterFormat::Bmp => ImageFormat::Bmp,
            RasterFormat::Gif => ImageFormat::Gif,
        }
    }
}

/// Renders `content` onto a canvas and saves it in `dir` as `extension`.
///
/// Canvas layout and the font chain come from `options`. Lines that would
/// start below the bottom margin are dropped.
#[cfg(feature = "images")]
pub fn generate_image(
    dir: &Path,
    content: &str,
    extension: &str,
    format: RasterFormat,
    options: &GeneratorOptions,
) -> Result<PathBuf> {
    let layout = &options.image;
    let font = TextFont::resolve(&options.fonts, options.system_fonts, layout.font_size);
    let canvas = render(content, layout, &font);

    let path = naming::next_path(dir, extension);
    canvas.save_with_format(&path, format.into())?;
    tracing::debug!(
        path = %path.display(),
        ?format,
        builtin_font = font.is_builtin(),
        "wrote image"
    );
    Ok(path)
}

#[cfg(not(feature = "images"))]
pub fn generate_image(
    _dir: &Path,
    _content: &str,
    _extension: &str,
    _format: RasterFormat,
    _options: &GeneratorOptions,
) -> Result<PathBuf> {
    Err(crate::error::GenerateError::Unavailable(
        crate::error::Capability::Images,
    ))
}

/// Draws the wrapped lines of `content`, each centred horizontally.
#[cfg(feature = "images")]
pub fn render(content: &str, layout: &ImageLayout, font: &TextFont) -> RgbImage {
    let mut canvas = RgbImage::from_pixel(layout.width, layout.height, BACKGROUND);
    let lines = wrap(content, layout.wrap_width);
    let limit = layout.height.saturating_sub(layout.margin);

    let mut y = layout.margin;
    let mut drawn = 0;
    for line in &lines {
        let (text_width, text_height) = font.measure(line);
        let x = (layout.width as i32 - text_width as i32) / 2;
        font.draw(&mut canvas, x, y as i32, line, FOREGROUND);
        drawn += 1;

        y += text_height + layout.line_spacing;
        if y > limit {
            break;
        }
    }

    if drawn < lines.len() {
        tracing::debug!(drawn, total = lines.len(), "canvas full, truncating text");
    }
    canvas
}
