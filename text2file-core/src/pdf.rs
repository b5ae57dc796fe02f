//! PDF output: wrapped lines laid out as fixed-height rows in Helvetica.

use crate::error::Result;
use crate::options::PdfLayout;
use std::path::{Path, PathBuf};

#[cfg(feature = "pdf")]
use crate::{naming, wrap::wrap};
#[cfg(feature = "pdf")]
use oxidize_pdf::{Document, Font, Page};

/// Writes `content` to a new timestamped PDF in `dir`.
///
/// Rows that do not fit above the bottom margin continue on a new page.
/// Empty content still produces a single blank page.
#[cfg(feature = "pdf")]
pub fn generate_pdf(dir: &Path, content: &str, layout: &PdfLayout) -> Result<PathBuf> {
    let lines = wrap(content, layout.wrap_width);
    let rows_per_page = layout.rows_per_page();
    tracing::debug!(lines = lines.len(), rows_per_page, "laying out PDF");

    let mut doc = Document::new();
    let path = naming::next_path(dir, "pdf");
    if let Some(name) = path.file_name() {
        doc.set_title(name.to_string_lossy());
    }
    doc.set_creator("text2file");

    let mut pages = 0;
    let mut chunks = lines.chunks(rows_per_page).peekable();
    if chunks.peek().is_none() {
        doc.add_page(new_page(layout));
        pages += 1;
    }
    for chunk in chunks {
        let mut page = new_page(layout);
        for (row, line) in chunk.iter().enumerate() {
            page.text()
                .set_font(Font::Helvetica, layout.font_size)
                .at(layout.margin_left, baseline(layout, row))
                .write(line)?;
        }
        doc.add_page(page);
        pages += 1;
    }

    doc.save(&path)?;
    tracing::debug!(path = %path.display(), pages, "wrote PDF");
    Ok(path)
}

#[cfg(not(feature = "pdf"))]
pub fn generate_pdf(_dir: &Path, _content: &str, _layout: &PdfLayout) -> Result<PathBuf> {
    Err(crate::error::GenerateError::Unavailable(
        crate::error::Capability::Pdf,
    ))
}

#[cfg(feature = "pdf")]
fn new_page(layout: &PdfLayout) -> Page {
    Page::new(layout.page_width, layout.page_height)
}

/// Baseline of `row`, counted from the top margin. Text sits vertically
/// centred in its row.
#[cfg(feature = "pdf")]
fn baseline(layout: &PdfLayout, row: usize) -> f64 {
    let row_top = layout.page_height - layout.margin_top - row as f64 * layout.row_height;
    row_top - layout.row_height / 2.0 - 0.3 * layout.font_size
}

#[cfg(all(test, feature = "pdf"))]
mod tests {
    use super::*;
    use oxidize_pdf::parser::PdfReader;
    use std::fs;
    use tempfile::tempdir;

    fn count_pages(path: &Path) -> u32 {
        let mut reader = PdfReader::open(path).unwrap();
        reader.page_count().unwrap()
    }

    #[test]
    fn test_baseline_rows_descend() {
        let layout = PdfLayout::default();
        let first = baseline(&layout, 0);
        let second = baseline(&layout, 1);
        assert!(first < layout.page_height - layout.margin_top);
        assert!((first - second - layout.row_height).abs() < 1e-9);
    }

    #[test]
    fn test_last_row_stays_above_bottom_margin() {
        let layout = PdfLayout::default();
        let last = baseline(&layout, layout.rows_per_page() - 1);
        assert!(last > layout.margin_bottom);
    }

    #[test]
    fn test_generates_pdf_file() {
        let dir = tempdir().unwrap();
        let path = generate_pdf(dir.path(), "Example content", &PdfLayout::default()).unwrap();

        assert_eq!(path.extension().unwrap(), "pdf");
        let bytes = fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"%PDF-"));
    }

    #[test]
    fn test_empty_content_single_page() {
        let dir = tempdir().unwrap();
        let path = generate_pdf(dir.path(), "", &PdfLayout::default()).unwrap();

        let bytes = fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"%PDF-"));
        assert_eq!(count_pages(&path), 1);
    }

    #[test]
    fn test_long_content_spans_pages() {
        let dir = tempdir().unwrap();
        let layout = PdfLayout::default();
        // One word per line: rows_per_page + 1 lines need a second page.
        let content = vec!["x".repeat(80); layout.rows_per_page() + 1].join(" ");

        let path = generate_pdf(dir.path(), &content, &layout).unwrap();
        assert_eq!(count_pages(&path), 2);
    }
}
