//! SQLite-backed namespace (lightweight, one connection for CLI usage).

use super::log::ttlog;
use super::migrate::run_pending_migrations;
use super::{KeyValueStore, WriteBatch, WriteOp, check_quota};
use crate::errors::AppResult;
use chrono::Local;
use rusqlite::{Connection, OptionalExtension, params};
use std::path::Path;
use tracing::{debug, warn};

pub struct SqliteStore {
    pub conn: Connection,
    quota: Option<u64>,
}

impl SqliteStore {
    /// Open (or create) the database file and run pending migrations.
    pub fn open(path: &str) -> AppResult<Self> {
        let conn = Connection::open(Path::new(path))?;
        run_pending_migrations(&conn)?;
        debug!(path, "sqlite namespace opened");
        Ok(Self { conn, quota: None })
    }

    pub fn open_in_memory() -> AppResult<Self> {
        let conn = Connection::open_in_memory()?;
        run_pending_migrations(&conn)?;
        Ok(Self { conn, quota: None })
    }

    pub fn with_quota(mut self, quota: Option<u64>) -> Self {
        self.quota = quota;
        self
    }

    pub fn quota(&self) -> Option<u64> {
        self.quota
    }

    /// Helper to execute a closure with a mutable connection reference.
    pub fn with_conn<F, T>(&mut self, func: F) -> AppResult<T>
    where
        F: FnOnce(&mut Connection) -> AppResult<T>,
    {
        func(&mut self.conn)
    }
}

fn usage_of(conn: &Connection) -> AppResult<u64> {
    let used: i64 = conn.query_row(
        "SELECT COALESCE(SUM(LENGTH(CAST(key AS BLOB)) + LENGTH(CAST(value AS BLOB))), 0) FROM kv",
        [],
        |row| row.get(0),
    )?;
    Ok(used.max(0) as u64)
}

impl KeyValueStore for SqliteStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        let mut stmt = self
            .conn
            .prepare_cached("SELECT value FROM kv WHERE key = ?1")?;
        Ok(stmt.query_row([key], |row| row.get(0)).optional()?)
    }

    fn apply(&mut self, batch: WriteBatch) -> AppResult<()> {
        if batch.is_empty() {
            return Ok(());
        }

        let now = Local::now().to_rfc3339();
        let tx = self.conn.transaction()?;
        {
            let mut put = tx.prepare_cached(
                "INSERT OR REPLACE INTO kv (key, value, updated_at) VALUES (?1, ?2, ?3)",
            )?;
            let mut del = tx.prepare_cached("DELETE FROM kv WHERE key = ?1")?;

            for op in batch.ops() {
                match op {
                    WriteOp::Put { key, value } => {
                        put.execute(params![key, value, now])?;
                    }
                    WriteOp::Delete { key } => {
                        del.execute([key])?;
                    }
                }
            }
        }

        let used = usage_of(&tx)?;
        if let Err(e) = check_quota(used, self.quota) {
            warn!(used, quota = ?self.quota, "write batch rejected, rolling back");
            tx.rollback()?;
            return Err(e);
        }

        tx.commit()?;
        debug!(ops = batch.len(), keys = ?batch.keys(), "write batch committed");
        Ok(())
    }

    fn clear(&mut self) -> AppResult<()> {
        let removed = self.conn.execute("DELETE FROM kv", [])?;
        debug!(removed, "namespace cleared");
        Ok(())
    }

    fn keys(&self) -> AppResult<Vec<String>> {
        let mut stmt = self.conn.prepare_cached("SELECT key FROM kv ORDER BY key ASC")?;
        let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }

    fn usage(&self) -> AppResult<u64> {
        usage_of(&self.conn)
    }

    fn audit(&self, operation: &str, target: &str, message: &str) -> AppResult<()> {
        ttlog(&self.conn, operation, target, message)
    }
}
