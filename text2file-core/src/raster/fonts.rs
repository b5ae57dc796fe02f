//! Font resolution for the image generator.
//!
//! Candidates are tried in order: caller-supplied files, then the preferred
//! system fonts (unless disabled), then a built-in bitmap font that cannot
//! fail to load.

use ab_glyph::{FontVec, PxScale};
use font8x8::UnicodeFonts;
use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_text_mut, text_size};
use std::fs;
use std::path::{Path, PathBuf};

/// Preferred TrueType fonts, most preferred first.
pub const PREFERRED_FONTS: &[&str] = &["DejaVuSans.ttf", "Arial.ttf"];

/// Directories searched for a bare font file name.
const FONT_DIRS: &[&str] = &[
    ".",
    "/usr/share/fonts/truetype/dejavu",
    "/usr/share/fonts/dejavu",
    "/usr/share/fonts/TTF",
    "/usr/share/fonts/truetype/msttcorefonts",
    "/usr/share/fonts/truetype",
    "/Library/Fonts",
    "/System/Library/Fonts/Supplemental",
    "C:\\Windows\\Fonts",
];

/// Built-in glyphs are 8x8 cells drawn at this magnification.
const BUILTIN_SCALE: u32 = 2;
const BUILTIN_CELL: u32 = 8;

/// A font ready to measure and draw text.
pub enum TextFont {
    TrueType { font: FontVec, scale: PxScale },
    Builtin,
}

impl TextFont {
    /// Walks the fallback chain. Always returns a usable font.
    ///
    /// With `system_fonts` off only the `extra` files are tried before the
    /// built-in font.
    pub fn resolve(extra: &[PathBuf], system_fonts: bool, size: f32) -> TextFont {
        let preferred: &[&str] = if system_fonts { PREFERRED_FONTS } else { &[] };
        let candidates = extra
            .iter()
            .cloned()
            .chain(preferred.iter().flat_map(|name| search_paths(name)));

        for path in candidates {
            if !path.is_file() {
                continue;
            }
            match load_truetype(&path) {
                Ok(font) => {
                    tracing::debug!(path = %path.display(), "using TrueType font");
                    return TextFont::TrueType {
                        font,
                        scale: PxScale::from(size),
                    };
                }
                Err(reason) => {
                    tracing::warn!(path = %path.display(), %reason, "could not load font");
                }
            }
        }

        tracing::warn!("no preferred font found, using built-in bitmap font");
        TextFont::Builtin
    }

    pub fn is_builtin(&self) -> bool {
        matches!(self, TextFont::Builtin)
    }

    /// Width and height in pixels of `text` rendered on one line.
    pub fn measure(&self, text: &str) -> (u32, u32) {
        match self {
            TextFont::TrueType { font, scale } => text_size(*scale, font, text),
            TextFont::Builtin => {
                let cell = BUILTIN_CELL * BUILTIN_SCALE;
                (text.chars().count() as u32 * cell, cell)
            }
        }
    }

    /// Draws `text` with its top-left corner at (`x`, `y`).
    pub fn draw(&self, canvas: &mut RgbImage, x: i32, y: i32, text: &str, color: Rgb<u8>) {
        match self {
            TextFont::TrueType { font, scale } => {
                draw_text_mut(canvas, color, x, y, *scale, font, text);
            }
            TextFont::Builtin => draw_builtin(canvas, x, y, text, color),
        }
    }
}

/// Expands a font name into the paths to try. Paths with a directory
/// component are used as given.
fn search_paths(name: &str) -> Vec<PathBuf> {
    let path = Path::new(name);
    if path.components().count() > 1 {
        return vec![path.to_path_buf()];
    }
    FONT_DIRS.iter().map(|dir| Path::new(dir).join(name)).collect()
}

fn load_truetype(path: &Path) -> Result<FontVec, String> {
    let bytes = fs::read(path).map_err(|e| e.to_string())?;
    FontVec::try_from_vec(bytes).map_err(|e| e.to_string())
}

fn draw_builtin(canvas: &mut RgbImage, x: i32, y: i32, text: &str, color: Rgb<u8>) {
    let cell = (BUILTIN_CELL * BUILTIN_SCALE) as i32;
    let (width, height) = canvas.dimensions();

    for (i, ch) in text.chars().enumerate() {
        let glyph = font8x8::BASIC_FONTS
            .get(ch)
            .or_else(|| font8x8::LATIN_FONTS.get(ch))
            .or_else(|| font8x8::BASIC_FONTS.get('?'))
            .unwrap_or([0; 8]);
        let origin_x = x + i as i32 * cell;

        for (row, bits) in glyph.iter().enumerate() {
            for col in 0..BUILTIN_CELL {
                if bits & (1 << col) == 0 {
                    continue;
                }
                for dy in 0..BUILTIN_SCALE {
                    for dx in 0..BUILTIN_SCALE {
                        let px = origin_x + (col * BUILTIN_SCALE + dx) as i32;
                        let py = y + (row as u32 * BUILTIN_SCALE + dy) as i32;
                        if px >= 0 && py >= 0 && (px as u32) < width && (py as u32) < height {
                            canvas.put_pixel(px as u32, py as u32, color);
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
    const BLACK: Rgb<u8> = Rgb([0, 0, 0]);

    #[test]
    fn test_builtin_measure() {
        assert_eq!(TextFont::Builtin.measure("abc"), (48, 16));
        assert_eq!(TextFont::Builtin.measure(""), (0, 16));
    }

    #[test]
    fn test_builtin_draws_pixels() {
        let mut canvas = RgbImage::from_pixel(64, 32, WHITE);
        TextFont::Builtin.draw(&mut canvas, 0, 0, "Hi", BLACK);
        assert!(canvas.pixels().any(|p| *p == BLACK));
    }

    #[test]
    fn test_builtin_clips_at_edges() {
        let mut canvas = RgbImage::from_pixel(10, 10, WHITE);
        TextFont::Builtin.draw(&mut canvas, -5, -5, "WWWW", BLACK);
        TextFont::Builtin.draw(&mut canvas, 8, 8, "WWWW", BLACK);
    }

    #[test]
    fn test_builtin_unknown_char_falls_back() {
        let mut canvas = RgbImage::from_pixel(16, 16, WHITE);
        TextFont::Builtin.draw(&mut canvas, 0, 0, "\u{10FFFD}", BLACK);
        assert!(canvas.pixels().any(|p| *p == BLACK));
    }

    #[test]
    fn test_latin_glyphs_are_not_replacement() {
        let draw = |text: &str| {
            let mut canvas = RgbImage::from_pixel(16, 16, WHITE);
            TextFont::Builtin.draw(&mut canvas, 0, 0, text, BLACK);
            canvas
        };

        let accented = draw("é");
        assert!(accented.pixels().any(|p| *p == BLACK));
        assert_ne!(accented, draw("?"));
        assert_ne!(draw("ü"), draw("?"));
    }

    #[test]
    fn test_invalid_font_file_is_skipped() {
        let dir = tempdir().unwrap();
        let bogus = dir.path().join("bogus.ttf");
        std::fs::write(&bogus, b"not a font").unwrap();

        let font = TextFont::resolve(&[bogus.clone()], true, 20.0);
        // Falls through to whatever the chain finds next, never panics.
        let (w, h) = font.measure("text");
        assert!(w > 0 && h > 0);

        assert!(TextFont::resolve(&[bogus], false, 20.0).is_builtin());
    }

    #[test]
    fn test_missing_font_file_is_skipped() {
        let font = TextFont::resolve(&[PathBuf::from("/no/such/font.ttf")], true, 20.0);
        assert!(font.measure("x").1 > 0);
    }

    #[test]
    fn test_without_system_fonts_uses_builtin() {
        let font = TextFont::resolve(&[], false, 20.0);
        assert!(font.is_builtin());
        assert_eq!(font.measure("ab"), (32, 16));
    }

    #[test]
    fn test_search_paths() {
        let paths = search_paths("DejaVuSans.ttf");
        assert_eq!(paths.len(), FONT_DIRS.len());
        assert!(paths.iter().all(|p| p.ends_with("DejaVuSans.ttf")));

        assert_eq!(
            search_paths("fonts/Custom.ttf"),
            vec![PathBuf::from("fonts/Custom.ttf")]
        );
    }
}
