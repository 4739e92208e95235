//! Path utilities: expand ~, build backup names.

use chrono::NaiveDate;
use std::path::{Path, PathBuf};

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

/// `classtrack_backup_YYYY-MM-DD.<ext>` inside `dir`.
pub fn backup_file_name(dir: &Path, date: NaiveDate, ext: &str) -> PathBuf {
    dir.join(format!("classtrack_backup_{}.{ext}", date.format("%Y-%m-%d")))
}

pub fn has_extension(path: &Path, ext: &str) -> bool {
    path.extension()
        .map(|e| e.to_string_lossy().eq_ignore_ascii_case(ext))
        .unwrap_or(false)
}
