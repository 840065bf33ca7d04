// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared fixtures and Docker helpers for integration tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, OnceLock};
use traincfg::adapters::InMemoryStore;
use traincfg::domain::{
    default_training_configuration, ConfigError, Result, StoreKey, TrainingConfiguration,
};
use traincfg::ports::ConfigStore;

/// Cached result of Docker availability check.
#[allow(dead_code)]
static DOCKER_AVAILABLE: OnceLock<bool> = OnceLock::new();

/// Checks if Docker is available on the system.
///
/// This check is cached after the first call.
#[allow(dead_code)]
pub fn is_docker_available() -> bool {
    *DOCKER_AVAILABLE.get_or_init(|| {
        // Try to run `docker ps` command
        std::process::Command::new("docker")
            .args(["ps"])
            .output()
            .map(|output| output.status.success())
            .unwrap_or(false)
    })
}

/// Prints a warning message that a test is skipped due to Docker being unavailable.
#[allow(dead_code)]
pub fn print_docker_unavailable_warning(test_name: &str) {
    eprintln!("\n⚠️  SKIPPED: {} - Docker is not available", test_name);
    eprintln!("   To run this test, ensure Docker is installed and running.");
    eprintln!("   Installation: https://docs.docker.com/get-docker/\n");
}

/// Returns the default configuration after applying `change`.
#[allow(dead_code)]
pub fn config_with(change: impl FnOnce(&mut TrainingConfiguration)) -> TrainingConfiguration {
    let mut config = default_training_configuration();
    change(&mut config);
    config
}

/// A store wrapper that counts calls and can be told to fail.
///
/// Clones share counters and records, so a test keeps one clone and hands the
/// other to the service.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct ObservedStore {
    pub inner: InMemoryStore,
    loads: Arc<AtomicUsize>,
    saves: Arc<AtomicUsize>,
    fail_saves: bool,
}

#[allow(dead_code)]
impl ObservedStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seeded(config: TrainingConfiguration) -> Self {
        Self {
            inner: InMemoryStore::new()
                .with_record(StoreKey::training_configuration(), config)
                .unwrap(),
            ..Self::default()
        }
    }

    pub fn failing_saves(mut self) -> Self {
        self.fail_saves = true;
        self
    }

    pub fn load_calls(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }

    pub fn save_calls(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    pub fn stored(&self) -> Option<TrainingConfiguration> {
        self.inner
            .load(&StoreKey::training_configuration())
            .unwrap()
    }
}

impl ConfigStore for ObservedStore {
    fn name(&self) -> &str {
        "observed"
    }

    fn load(&self, key: &StoreKey) -> Result<Option<TrainingConfiguration>> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        self.inner.load(key)
    }

    fn save(&mut self, key: &StoreKey, config: &TrainingConfiguration) -> Result<()> {
        self.saves.fetch_add(1, Ordering::SeqCst);
        if self.fail_saves {
            return Err(ConfigError::store("observed", "simulated write failure"));
        }
        self.inner.save(key, config)
    }
}
