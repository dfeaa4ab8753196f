//! Nullable metadata source — programmable asset records for testing.

use algo_registry::{AssetSource, SourceError};
use algo_types::{AssetId, RawAssetRecord};
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

/// An in-memory metadata source.
/// Thread-safe so it can back a registry shared across threads.
pub struct NullAssetSource {
    records: Mutex<HashMap<AssetId, RawAssetRecord>>,
    failing: Mutex<HashSet<AssetId>>,
    calls: Mutex<Vec<AssetId>>,
}

impl NullAssetSource {
    pub fn new() -> Self {
        Self {
            records: Mutex::new(HashMap::new()),
            failing: Mutex::new(HashSet::new()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Program the record returned for `id`.
    pub fn with_record(self, id: AssetId, record: RawAssetRecord) -> Self {
        self.insert(id, record);
        self
    }

    /// Program (or replace) the record returned for `id`.
    pub fn insert(&self, id: AssetId, record: RawAssetRecord) {
        self.records.lock().unwrap().insert(id, record);
    }

    /// Make lookups of `id` fail as if the source were unreachable.
    pub fn fail_on(&self, id: AssetId) {
        self.failing.lock().unwrap().insert(id);
    }

    /// Every id passed to `get_asset`, in call order.
    pub fn calls(&self) -> Vec<AssetId> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of lookups made for `id`.
    pub fn call_count(&self, id: AssetId) -> usize {
        self.calls.lock().unwrap().iter().filter(|c| **c == id).count()
    }
}

impl Default for NullAssetSource {
    fn default() -> Self {
        Self::new()
    }
}

impl AssetSource for NullAssetSource {
    fn get_asset(&self, id: AssetId) -> Result<Option<RawAssetRecord>, SourceError> {
        self.calls.lock().unwrap().push(id);
        if self.failing.lock().unwrap().contains(&id) {
            return Err(SourceError::Unreachable(format!("null source refuses asset {id}")));
        }
        Ok(self.records.lock().unwrap().get(&id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_programmed_records_and_logs_calls() {
        let source = NullAssetSource::new()
            .with_record(AssetId::new(5), RawAssetRecord::direct("Five", "FIVE", 0));
        assert!(source.get_asset(AssetId::new(5)).unwrap().is_some());
        assert!(source.get_asset(AssetId::new(6)).unwrap().is_none());
        assert_eq!(source.calls(), vec![AssetId::new(5), AssetId::new(6)]);
    }

    #[test]
    fn programmed_failure() {
        let source = NullAssetSource::new();
        source.fail_on(AssetId::new(9));
        assert!(source.get_asset(AssetId::new(9)).is_err());
        assert_eq!(source.call_count(AssetId::new(9)), 1);
    }
}
