//! Timestamped output file names.

use chrono::{Local, NaiveDateTime};
use std::path::{Path, PathBuf};

/// Prefix shared by every generated file.
pub const FILE_PREFIX: &str = "generated";

const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Formats `generated_<YYYYMMDD_HHMMSS>.<extension>`.
pub fn file_name(extension: &str, at: NaiveDateTime) -> String {
    format!(
        "{}_{}.{}",
        FILE_PREFIX,
        at.format(TIMESTAMP_FORMAT),
        extension
    )
}

/// Picks a path in `dir` that does not exist yet.
///
/// Two requests within the same second would share a name, so a numeric
/// suffix (`_1`, `_2`, ...) is appended to the stem until the path is free.
pub fn available_path(dir: &Path, extension: &str, at: NaiveDateTime) -> PathBuf {
    let candidate = dir.join(file_name(extension, at));
    if !candidate.exists() {
        return candidate;
    }

    let stem = format!("{}_{}", FILE_PREFIX, at.format(TIMESTAMP_FORMAT));
    (1u32..)
        .map(|n| dir.join(format!("{}_{}.{}", stem, n, extension)))
        .find(|path| !path.exists())
        .unwrap_or(candidate)
}

/// [`available_path`] for the current local time.
pub fn next_path(dir: &Path, extension: &str) -> PathBuf {
    available_path(dir, extension, Local::now().naive_local())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::fs;
    use tempfile::tempdir;

    fn fixed_time() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_opt(7, 5, 2)
            .unwrap()
    }

    #[test]
    fn test_file_name_format() {
        assert_eq!(file_name("txt", fixed_time()), "generated_20240309_070502.txt");
        assert_eq!(file_name("jpeg", fixed_time()), "generated_20240309_070502.jpeg");
    }

    #[test]
    fn test_available_path_when_free() {
        let dir = tempdir().unwrap();
        let path = available_path(dir.path(), "md", fixed_time());
        assert_eq!(path, dir.path().join("generated_20240309_070502.md"));
    }

    #[test]
    fn test_available_path_skips_existing() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("generated_20240309_070502.png"), b"x").unwrap();
        fs::write(dir.path().join("generated_20240309_070502_1.png"), b"x").unwrap();

        let path = available_path(dir.path(), "png", fixed_time());
        assert_eq!(path, dir.path().join("generated_20240309_070502_2.png"));
    }

    #[test]
    fn test_other_extensions_do_not_collide() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("generated_20240309_070502.txt"), b"x").unwrap();

        let path = available_path(dir.path(), "md", fixed_time());
        assert_eq!(path, dir.path().join("generated_20240309_070502.md"));
    }
}
