// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory configuration store adapter.
//!
//! Records live in a shared map. Clones of an [`InMemoryStore`] share the same
//! map, so a caller can hand one clone to the service and inspect the other.

use crate::domain::{ConfigError, Result, StoreKey, TrainingConfiguration};
use crate::ports::ConfigStore;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

const STORE_NAME: &str = "memory";

/// Configuration store backed by a shared in-process map.
///
/// # Examples
///
/// ```rust
/// use traincfg::adapters::InMemoryStore;
/// use traincfg::domain::{default_training_configuration, StoreKey};
/// use traincfg::ports::ConfigStore;
///
/// let key = StoreKey::training_configuration();
/// let store = InMemoryStore::new()
///     .with_record(key.clone(), default_training_configuration())
///     .unwrap();
///
/// assert!(store.load(&key).unwrap().is_some());
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    records: Arc<RwLock<HashMap<StoreKey, TrainingConfiguration>>>,
    saves: Arc<AtomicUsize>,
}

impl InMemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a record without counting it as a save.
    ///
    /// Fails if the shared map was poisoned through another clone.
    pub fn with_record(self, key: StoreKey, config: TrainingConfiguration) -> Result<Self> {
        self.records
            .write()
            .map_err(|_| poisoned())?
            .insert(key, config);
        Ok(self)
    }

    /// Number of successful [`ConfigStore::save`] calls across all clones.
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    /// Removes the record under `key`, returning it if present.
    pub fn remove(&self, key: &StoreKey) -> Result<Option<TrainingConfiguration>> {
        let mut records = self.records.write().map_err(|_| poisoned())?;
        Ok(records.remove(key))
    }

    /// Number of stored records.
    pub fn len(&self) -> Result<usize> {
        let records = self.records.read().map_err(|_| poisoned())?;
        Ok(records.len())
    }

    /// Returns `true` if nothing is stored.
    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }
}

fn poisoned() -> ConfigError {
    ConfigError::store(STORE_NAME, "record lock poisoned")
}

impl ConfigStore for InMemoryStore {
    fn name(&self) -> &str {
        STORE_NAME
    }

    fn load(&self, key: &StoreKey) -> Result<Option<TrainingConfiguration>> {
        let records = self.records.read().map_err(|_| poisoned())?;
        Ok(records.get(key).cloned())
    }

    fn save(&mut self, key: &StoreKey, config: &TrainingConfiguration) -> Result<()> {
        let mut records = self.records.write().map_err(|_| poisoned())?;
        records.insert(key.clone(), config.clone());
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
