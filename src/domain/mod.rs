// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain layer containing core business logic and types.
//!
//! This module holds the training configuration aggregate, its default, the
//! validation engine and the service contract. It performs no I/O.

pub mod defaults;
pub mod errors;
pub mod service;
pub mod store_key;
pub mod training;
pub mod validation;

// Re-export commonly used types
pub use defaults::default_training_configuration;
pub use errors::{ConfigError, Result};
pub use service::TrainingConfigurationService;
pub use store_key::{StoreKey, TRAINING_CONFIGURATION_KEY};
pub use training::{
    Aggressiveness, FocusWeights, PersistencePolicy, QualityTargets, SafetyLimits, ScenarioMix,
    ScenarioMixError, TrainingConfiguration, SCENARIO_MIX_TOLERANCE,
};
pub use validation::{validate, ValidationResult, ValidationStatus};
