use crate::error::Result;
use crate::naming;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Writes `content` verbatim as UTF-8 to a new timestamped file in `dir`.
pub fn write_text_file(dir: &Path, content: &str, extension: &str) -> Result<PathBuf> {
    let path = naming::next_path(dir, extension);

    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&path)?;
    file.write_all(content.as_bytes())?;
    file.flush()?;

    tracing::debug!(path = %path.display(), bytes = content.len(), "wrote text file");
    Ok(path)
}
