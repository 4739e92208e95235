//! In-memory namespace with the same contract as the SQLite one.

use super::{KeyValueStore, WriteBatch, WriteOp, check_quota, entry_size};
use crate::errors::{AppError, AppResult};
use std::collections::BTreeMap;

#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
    quota: Option<u64>,
    disabled: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quota(mut self, quota: Option<u64>) -> Self {
        self.quota = quota;
        self
    }

    /// Simulate a host that refuses every write.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    fn ensure_writable(&self) -> AppResult<()> {
        if self.disabled {
            return Err(AppError::StorageUnavailable(
                "storage is disabled".to_string(),
            ));
        }
        Ok(())
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn apply(&mut self, batch: WriteBatch) -> AppResult<()> {
        self.ensure_writable()?;

        let mut staged = self.entries.clone();
        for op in batch.ops() {
            match op {
                WriteOp::Put { key, value } => {
                    staged.insert(key.clone(), value.clone());
                }
                WriteOp::Delete { key } => {
                    staged.remove(key);
                }
            }
        }

        let used = staged.iter().map(|(k, v)| entry_size(k, v)).sum();
        check_quota(used, self.quota)?;

        self.entries = staged;
        Ok(())
    }

    fn clear(&mut self) -> AppResult<()> {
        self.ensure_writable()?;
        self.entries.clear();
        Ok(())
    }

    fn keys(&self) -> AppResult<Vec<String>> {
        Ok(self.entries.keys().cloned().collect())
    }

    fn usage(&self) -> AppResult<u64> {
        Ok(self.entries.iter().map(|(k, v)| entry_size(k, v)).sum())
    }
}
