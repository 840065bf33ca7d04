// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration service trait definition.
//!
//! This module defines the `TrainingConfigurationService` trait, the whole
//! caller-facing surface of the crate: load, save, validate and create the
//! default training configuration.

use crate::domain::{Result, TrainingConfiguration, ValidationResult};

/// The training configuration service.
///
/// Implementations never hand out or persist a configuration that has hard
/// validation errors. Arguments that may be absent are taken as `Option` so
/// callers relaying a possibly missing aggregate get an
/// [`InvalidArgument`](crate::domain::ConfigError::InvalidArgument) error rather
/// than a panic.
///
/// # Examples
///
/// ```rust
/// use traincfg::domain::{
///     default_training_configuration, validate, ConfigError, Result,
///     TrainingConfiguration, TrainingConfigurationService, ValidationResult,
/// };
///
/// struct FixedService;
///
/// impl TrainingConfigurationService for FixedService {
///     fn load_configuration(&mut self) -> Result<TrainingConfiguration> {
///         Ok(default_training_configuration())
///     }
///
///     fn save_configuration(
///         &mut self,
///         config: Option<&TrainingConfiguration>,
///     ) -> Result<ValidationResult> {
///         self.validate_configuration(config)
///     }
///
///     fn validate_configuration(
///         &self,
///         config: Option<&TrainingConfiguration>,
///     ) -> Result<ValidationResult> {
///         config.map(validate).ok_or(ConfigError::InvalidArgument {
///             message: "configuration is required".to_string(),
///         })
///     }
///
///     fn create_default_configuration(&self) -> TrainingConfiguration {
///         default_training_configuration()
///     }
/// }
///
/// let mut service = FixedService;
/// assert_eq!(service.load_configuration().unwrap().max_generations, Some(3));
/// ```
pub trait TrainingConfigurationService {
    /// Loads the stored training configuration.
    ///
    /// When nothing is stored, the default configuration is created and
    /// persisted first. A stored configuration with hard validation errors is
    /// never returned.
    ///
    /// # Returns
    ///
    /// * `Ok(TrainingConfiguration)` - A configuration with no hard errors
    /// * `Err(ConfigError::ValidationFailed)` - The stored configuration is invalid
    /// * `Err(ConfigError::MissingConfiguration)` - Nothing is stored and
    ///   bootstrapping is disabled
    /// * `Err(ConfigError::StoreError)` - The store could not be read or written
    fn load_configuration(&mut self) -> Result<TrainingConfiguration>;

    /// Validates and then persists a configuration.
    ///
    /// The store is not touched unless validation passes. Warnings are returned
    /// once the save has succeeded.
    ///
    /// # Returns
    ///
    /// * `Ok(ValidationResult)` - Saved; the result may carry warnings
    /// * `Err(ConfigError::InvalidArgument)` - `config` was `None`
    /// * `Err(ConfigError::ValidationFailed)` - Not saved; carries every error
    fn save_configuration(
        &mut self,
        config: Option<&TrainingConfiguration>,
    ) -> Result<ValidationResult>;

    /// Validates a configuration without touching the store.
    ///
    /// # Returns
    ///
    /// * `Ok(ValidationResult)` - The findings, valid or not
    /// * `Err(ConfigError::InvalidArgument)` - `config` was `None`
    fn validate_configuration(
        &self,
        config: Option<&TrainingConfiguration>,
    ) -> Result<ValidationResult>;

    /// Returns the canonical default configuration.
    fn create_default_configuration(&self) -> TrainingConfiguration;
}
