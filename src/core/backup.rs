use crate::config::Config;
use crate::core::store::{ImportSummary, RecordStore};
use crate::errors::{AppError, AppResult};
use crate::models::BackupBundle;
use crate::storage::KeyValueStore;
use crate::utils::date::today;
use crate::utils::path::{backup_file_name, expand_tilde, has_extension};
use crate::utils::prompt::ensure_writable;
use std::fmt;
use std::fs;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use tracing::debug;
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

pub struct BackupLogic;

impl BackupLogic {
    /// Target path for an export: the given file, or the dated default name
    /// inside the configured backup directory.
    pub fn export_path(cfg: &Config, file: Option<&str>, compress: bool) -> PathBuf {
        let ext = if compress { "zip" } else { "json" };
        match file {
            Some(f) => expand_tilde(f),
            None => backup_file_name(&cfg.backup_dir_path(), today(), ext),
        }
    }

    /// Write the whole state to a backup file and return its path.
    pub fn export<S: KeyValueStore>(
        store: &RecordStore<S>,
        dest: &Path,
        compress: bool,
        force: bool,
    ) -> AppResult<PathBuf> {
        // 1️⃣ Ensure destination folder exists
        if let Some(parent) = dest.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        // 2️⃣ Refuse to silently overwrite
        ensure_writable(dest, force)?;

        // 3️⃣ Snapshot + write
        let bundle = store.export_snapshot()?;
        let json = bundle.to_pretty_json()?;

        if compress {
            write_zip(dest, &json_entry_name(dest), json.as_bytes())?;
        } else {
            fs::write(dest, json)?;
        }

        // 4️⃣ Log in DB
        store.audit(
            "export",
            &dest.to_string_lossy(),
            if compress {
                "Backup exported and compressed"
            } else {
                "Backup exported"
            },
        );

        Ok(dest.to_path_buf())
    }

    /// Read a `.json` backup, or the first `.json` entry of a `.zip` backup.
    pub fn read_backup_text(path: &Path) -> AppResult<String> {
        if !path.exists() {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Backup file not found: {}", path.display()),
            )
            .into());
        }

        if has_extension(path, "zip") {
            read_zip_entry(path)
        } else {
            utf8_text(fs::read(path)?, path)
        }
    }

    pub fn import<S: KeyValueStore>(
        store: &mut RecordStore<S>,
        path: &Path,
    ) -> AppResult<ImportSummary> {
        let text = Self::read_backup_text(path)?;
        debug!(path = %path.display(), bytes = text.len(), "backup read");
        store.import_snapshot(&text)
    }

    /// Parse a backup without touching the store.
    pub fn inspect(path: &Path) -> AppResult<BackupBundle> {
        BackupBundle::parse(&Self::read_backup_text(path)?)
    }
}

/// `foo.zip` → `foo.json`.
fn json_entry_name(zip_path: &Path) -> String {
    zip_path
        .with_extension("json")
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "classtrack_backup.json".to_string())
}

fn write_zip(path: &Path, entry: &str, content: &[u8]) -> AppResult<()> {
    let file = fs::File::create(path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(CompressionMethod::Deflated);

    zip.start_file(entry, options)?;
    zip.write_all(content)?;
    zip.finish()?;

    Ok(())
}

fn read_zip_entry(path: &Path) -> AppResult<String> {
    let file = fs::File::open(path)?;
    let mut archive = ZipArchive::new(file)
        .map_err(|e| AppError::Parse(format!("{} is not a zip archive: {e}", path.display())))?;

    for i in 0..archive.len() {
        let mut entry = archive.by_index(i).map_err(|e| unreadable(path, e))?;
        if entry.name().to_ascii_lowercase().ends_with(".json") {
            let mut bytes = Vec::new();
            entry
                .read_to_end(&mut bytes)
                .map_err(|e| unreadable(path, e))?;
            return utf8_text(bytes, path);
        }
    }

    Err(AppError::Parse(format!(
        "archive {} contains no .json backup entry",
        path.display()
    )))
}

fn unreadable(path: &Path, e: impl fmt::Display) -> AppError {
    AppError::Parse(format!("{}: unreadable archive entry: {e}", path.display()))
}

fn utf8_text(bytes: Vec<u8>, path: &Path) -> AppResult<String> {
    String::from_utf8(bytes)
        .map_err(|_| AppError::Parse(format!("{} is not UTF-8 text", path.display())))
}
