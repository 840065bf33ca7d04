// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration store trait definition.
//!
//! This module defines the `ConfigStore` trait, the port through which the
//! service reads and writes the training configuration. Stores are opaque typed
//! key-value persistence and carry no validation responsibility.

use crate::domain::{Result, StoreKey, TrainingConfiguration};

/// A trait for configuration stores.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` to allow for use in multi-threaded contexts.
///
/// # Absence
///
/// A key with no record is `Ok(None)`, never an error. Errors are reserved for
/// a store that cannot be reached or a record that cannot be decoded.
///
/// # Examples
///
/// ```rust
/// use traincfg::ports::ConfigStore;
/// use traincfg::domain::{Result, StoreKey, TrainingConfiguration};
///
/// struct NullStore;
///
/// impl ConfigStore for NullStore {
///     fn name(&self) -> &str {
///         "null"
///     }
///
///     fn load(&self, _key: &StoreKey) -> Result<Option<TrainingConfiguration>> {
///         Ok(None)
///     }
///
///     fn save(&mut self, _key: &StoreKey, _config: &TrainingConfiguration) -> Result<()> {
///         Ok(())
///     }
/// }
///
/// let store = NullStore;
/// assert!(!store.contains(&StoreKey::training_configuration()).unwrap());
/// ```
pub trait ConfigStore: Send + Sync {
    /// Returns the name of this store.
    ///
    /// This name is used for logging and error messages. It should be a short,
    /// descriptive identifier like "memory", "yaml-file" or "redis".
    fn name(&self) -> &str;

    /// Loads the configuration stored under `key`.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(TrainingConfiguration))` - A record was found
    /// * `Ok(None)` - No record exists under the key
    /// * `Err(ConfigError)` - The store failed or the record is unreadable
    fn load(&self, key: &StoreKey) -> Result<Option<TrainingConfiguration>>;

    /// Stores `config` under `key`, replacing any previous record.
    ///
    /// A failed save must leave the previous record, if any, intact.
    fn save(&mut self, key: &StoreKey, config: &TrainingConfiguration) -> Result<()>;

    /// Returns `true` if a record exists under `key`.
    fn contains(&self, key: &StoreKey) -> Result<bool> {
        Ok(self.load(key)?.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::default_training_configuration;

    struct SingleSlotStore {
        slot: Option<(StoreKey, TrainingConfiguration)>,
    }

    impl ConfigStore for SingleSlotStore {
        fn name(&self) -> &str {
            "single-slot"
        }

        fn load(&self, key: &StoreKey) -> Result<Option<TrainingConfiguration>> {
            Ok(self
                .slot
                .as_ref()
                .filter(|(k, _)| k == key)
                .map(|(_, c)| c.clone()))
        }

        fn save(&mut self, key: &StoreKey, config: &TrainingConfiguration) -> Result<()> {
            self.slot = Some((key.clone(), config.clone()));
            Ok(())
        }
    }

    #[test]
    fn test_contains_follows_load() {
        let mut store = SingleSlotStore { slot: None };
        let key = StoreKey::training_configuration();
        assert!(!store.contains(&key).unwrap());

        store.save(&key, &default_training_configuration()).unwrap();
        assert!(store.contains(&key).unwrap());
        assert!(!store.contains(&StoreKey::from("other")).unwrap());
    }

    #[test]
    fn test_config_store_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Box<dyn ConfigStore>>();
    }
}
