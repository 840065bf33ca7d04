// SPDX-License-Identifier: MIT OR Apache-2.0

//! Default configuration service implementation.
//!
//! This module provides the default implementation of the
//! `TrainingConfigurationService` trait. It reads and writes the training
//! configuration through a single [`ConfigStore`] and runs every configuration
//! through the validation engine before handing it out or persisting it.

use crate::adapters::InMemoryStore;
use crate::domain::{
    default_training_configuration, validate, ConfigError, Result, StoreKey,
    TrainingConfiguration, TrainingConfigurationService, ValidationResult,
};
use crate::ports::ConfigStore;

/// Default implementation of the training configuration service.
///
/// # Examples
///
/// ```rust
/// use traincfg::prelude::*;
///
/// # fn main() -> Result<()> {
/// let mut service = DefaultTrainingConfigService::builder()
///     .with_in_memory_store()
///     .build()?;
///
/// // The first load creates and stores the default configuration
/// let config = service.load_configuration()?;
/// assert_eq!(config, service.create_default_configuration());
/// # Ok(())
/// # }
/// ```
pub struct DefaultTrainingConfigService {
    /// Backing store
    store: Box<dyn ConfigStore>,
    /// Key of the training configuration record
    key: StoreKey,
    /// Whether a missing record is replaced by the default
    bootstrap: bool,
}

impl DefaultTrainingConfigService {
    /// Creates a service over `store` that bootstraps a missing configuration.
    pub fn new(store: Box<dyn ConfigStore>) -> Self {
        Self {
            store,
            key: StoreKey::training_configuration(),
            bootstrap: true,
        }
    }

    /// Creates a new configuration service builder.
    pub fn builder() -> TrainingConfigServiceBuilder {
        TrainingConfigServiceBuilder::new()
    }

    /// Creates a service backed by a YAML file in the OS configuration directory.
    ///
    /// # Arguments
    ///
    /// * `app_name` - The application name
    /// * `qualifier` - The organization/qualifier (e.g., "com.example")
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use traincfg::service::DefaultTrainingConfigService;
    ///
    /// # fn main() -> traincfg::domain::Result<()> {
    /// let service = DefaultTrainingConfigService::with_defaults("trainer", "com.example")?;
    /// # Ok(())
    /// # }
    /// ```
    #[cfg(feature = "yaml")]
    pub fn with_defaults(app_name: &str, qualifier: &str) -> Result<Self> {
        Self::builder()
            .with_default_location(app_name, qualifier)?
            .build()
    }

    /// Returns the key of the training configuration record.
    pub fn key(&self) -> &StoreKey {
        &self.key
    }

    /// Returns the name of the backing store.
    pub fn store_name(&self) -> &str {
        self.store.name()
    }

    /// Returns whether a missing configuration is bootstrapped.
    pub fn bootstraps(&self) -> bool {
        self.bootstrap
    }

    fn report_warnings(&self, result: &ValidationResult, operation: &str) {
        for warning in result.warnings() {
            tracing::warn!(
                "Training configuration '{}' ({}): {}",
                self.key,
                operation,
                warning
            );
        }
    }

    fn bootstrap_default(&mut self) -> Result<TrainingConfiguration> {
        tracing::info!(
            "No training configuration under '{}' in store '{}', creating the default",
            self.key,
            self.store.name()
        );
        let config = self.create_default_configuration();
        self.store.save(&self.key, &config)?;
        Ok(config)
    }
}

impl TrainingConfigurationService for DefaultTrainingConfigService {
    fn load_configuration(&mut self) -> Result<TrainingConfiguration> {
        let config = match self.store.load(&self.key)? {
            Some(config) => config,
            None if self.bootstrap => self.bootstrap_default()?,
            None => {
                return Err(ConfigError::MissingConfiguration {
                    key: self.key.as_str().to_string(),
                })
            }
        };

        let result = validate(&config);
        if !result.is_valid() {
            tracing::error!(
                "Stored training configuration '{}' has {} validation error(s)",
                self.key,
                result.errors().len()
            );
            return Err(ConfigError::invalid_stored(
                self.key.as_str(),
                result.into_errors(),
            ));
        }

        self.report_warnings(&result, "load");
        Ok(config)
    }

    fn save_configuration(
        &mut self,
        config: Option<&TrainingConfiguration>,
    ) -> Result<ValidationResult> {
        let config = config.ok_or_else(|| ConfigError::InvalidArgument {
            message: "a training configuration is required to save".to_string(),
        })?;

        let result = validate(config);
        if !result.is_valid() {
            tracing::error!(
                "Refusing to save training configuration '{}': {} validation error(s)",
                self.key,
                result.errors().len()
            );
            return Err(ConfigError::invalid_for_save(result.into_errors()));
        }

        self.store.save(&self.key, config)?;
        tracing::debug!(
            "Saved training configuration '{}' to store '{}'",
            self.key,
            self.store.name()
        );

        self.report_warnings(&result, "save");
        Ok(result)
    }

    fn validate_configuration(
        &self,
        config: Option<&TrainingConfiguration>,
    ) -> Result<ValidationResult> {
        let config = config.ok_or_else(|| ConfigError::InvalidArgument {
            message: "a training configuration is required to validate".to_string(),
        })?;
        Ok(validate(config))
    }

    fn create_default_configuration(&self) -> TrainingConfiguration {
        default_training_configuration()
    }
}

/// Builder for constructing a `DefaultTrainingConfigService`.
///
/// # Examples
///
/// ```rust
/// use traincfg::service::TrainingConfigServiceBuilder;
///
/// # fn main() -> traincfg::domain::Result<()> {
/// let service = TrainingConfigServiceBuilder::new()
///     .with_in_memory_store()
///     .with_bootstrap(false)
///     .build()?;
/// assert!(!service.bootstraps());
/// # Ok(())
/// # }
/// ```
pub struct TrainingConfigServiceBuilder {
    store: Option<Box<dyn ConfigStore>>,
    bootstrap: bool,
}

impl TrainingConfigServiceBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self {
            store: None,
            bootstrap: true,
        }
    }

    /// Uses `store` as the backing store, replacing any previously set.
    pub fn with_store(mut self, store: Box<dyn ConfigStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Uses a fresh in-memory store.
    pub fn with_in_memory_store(self) -> Self {
        self.with_store(Box::new(InMemoryStore::new()))
    }

    /// Uses a YAML file store rooted at `dir`.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use traincfg::service::TrainingConfigServiceBuilder;
    ///
    /// # fn main() -> traincfg::domain::Result<()> {
    /// let service = TrainingConfigServiceBuilder::new()
    ///     .with_yaml_dir("/etc/trainer")
    ///     .build()?;
    /// # Ok(())
    /// # }
    /// ```
    #[cfg(feature = "yaml")]
    pub fn with_yaml_dir(self, dir: impl AsRef<std::path::Path>) -> Self {
        use crate::adapters::YamlFileStore;
        self.with_store(Box::new(YamlFileStore::new(dir)))
    }

    /// Uses a YAML file store in the OS configuration directory.
    #[cfg(feature = "yaml")]
    pub fn with_default_location(self, app_name: &str, qualifier: &str) -> Result<Self> {
        use crate::adapters::YamlFileStore;
        let store = YamlFileStore::from_default_location(app_name, qualifier)?;
        Ok(self.with_store(Box::new(store)))
    }

    /// Sets whether a missing configuration is replaced by the stored default.
    ///
    /// When disabled, loading a missing configuration fails with
    /// [`ConfigError::MissingConfiguration`].
    pub fn with_bootstrap(mut self, bootstrap: bool) -> Self {
        self.bootstrap = bootstrap;
        self
    }

    /// Builds the configuration service.
    pub fn build(self) -> Result<DefaultTrainingConfigService> {
        let store = self.store.ok_or_else(|| ConfigError::InvalidArgument {
            message: "a configuration store is required".to_string(),
        })?;

        let mut service = DefaultTrainingConfigService::new(store);
        service.bootstrap = self.bootstrap;
        Ok(service)
    }
}

impl Default for TrainingConfigServiceBuilder {
    fn default() -> Self {
        Self::new()
    }
}
