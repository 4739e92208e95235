//! Persistent key-value namespace behind the record store.
//!
//! Values are self-contained JSON text stored under fixed keys. Two
//! implementations share the same contract: [`SqliteStore`] (on disk) and
//! [`MemoryStore`] (tests, embedding).

pub mod log;
pub mod memory;
pub mod migrate;
pub mod sqlite;
pub mod stats;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use crate::errors::{AppError, AppResult};

/// Default quota, the usual size of a browser's local storage area.
pub const DEFAULT_QUOTA_BYTES: u64 = 5 * 1024 * 1024;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOp {
    Put { key: String, value: String },
    Delete { key: String },
}

/// Ordered set of writes applied all-or-nothing by [`KeyValueStore::apply`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WriteBatch {
    ops: Vec<WriteOp>,
}

impl WriteBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn put(&mut self, key: &str, value: String) -> &mut Self {
        self.ops.push(WriteOp::Put {
            key: key.to_string(),
            value,
        });
        self
    }

    pub fn delete(&mut self, key: &str) -> &mut Self {
        self.ops.push(WriteOp::Delete {
            key: key.to_string(),
        });
        self
    }

    pub fn ops(&self) -> &[WriteOp] {
        &self.ops
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn keys(&self) -> Vec<&str> {
        self.ops
            .iter()
            .map(|op| match op {
                WriteOp::Put { key, .. } | WriteOp::Delete { key } => key.as_str(),
            })
            .collect()
    }
}

pub trait KeyValueStore {
    fn get(&self, key: &str) -> AppResult<Option<String>>;

    /// Apply every op of `batch`, or none of them.
    fn apply(&mut self, batch: WriteBatch) -> AppResult<()>;

    /// Remove every key in the namespace.
    fn clear(&mut self) -> AppResult<()>;

    fn keys(&self) -> AppResult<Vec<String>>;

    /// Bytes used by keys and values.
    fn usage(&self) -> AppResult<u64>;

    fn set(&mut self, key: &str, value: String) -> AppResult<()> {
        let mut batch = WriteBatch::new();
        batch.put(key, value);
        self.apply(batch)
    }

    fn remove(&mut self, key: &str) -> AppResult<()> {
        let mut batch = WriteBatch::new();
        batch.delete(key);
        self.apply(batch)
    }

    /// Record an operation in the store's audit trail, when it keeps one.
    fn audit(&self, _operation: &str, _target: &str, _message: &str) -> AppResult<()> {
        Ok(())
    }
}

pub(crate) fn entry_size(key: &str, value: &str) -> u64 {
    (key.len() + value.len()) as u64
}

pub(crate) fn check_quota(used: u64, quota: Option<u64>) -> AppResult<()> {
    match quota {
        Some(limit) if used > limit => Err(AppError::StorageUnavailable(format!(
            "quota exceeded ({used} bytes needed, {limit} allowed)"
        ))),
        _ => Ok(()),
    }
}
