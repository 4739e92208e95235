pub mod attendance;
pub mod config;
pub mod db;
pub mod export;
pub mod import;
pub mod init;
pub mod log;
pub mod report;
pub mod reset;
pub mod settings;
pub mod student;

use crate::config::Config;
use crate::core::RecordStore;
use crate::errors::AppResult;
use crate::storage::SqliteStore;
use std::fs;
use std::path::Path;

/// Open the configured database as a record store.
pub(crate) fn open_store(cfg: &Config) -> AppResult<RecordStore<SqliteStore>> {
    if let Some(parent) = Path::new(&cfg.database).parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    let kv = SqliteStore::open(&cfg.database)?.with_quota(cfg.quota());
    Ok(RecordStore::new(kv))
}
