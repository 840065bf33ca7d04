// SPDX-License-Identifier: MIT OR Apache-2.0

//! A hexagonal architecture crate for validated training run configuration.
//!
//! This crate loads, validates and persists the single configuration aggregate
//! that parameterizes an automated training run: scenario mix, aggressiveness,
//! quality targets, focus weights, safety guards and persistence policy. It
//! never hands out or stores a configuration that fails validation.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain Layer**: The aggregate, its default, the validation engine and errors
//! - **Ports**: Trait definitions for stores and document codecs (`ConfigStore`, `ConfigCodec`)
//! - **Adapters**: Store implementations (in-memory, YAML files, Redis)
//! - **Service**: The configuration service that orchestrates store and validation
//!
//! # Lifecycle
//!
//! - **Load**: reads the record; on first use the default is created and stored;
//!   a record with hard validation errors is a fatal error
//! - **Save**: validates first and only then writes; an invalid configuration
//!   never reaches the store
//! - **Warnings**: soft findings are logged with `tracing` and returned, but
//!   never block load or save
//!
//! # Feature Flags
//!
//! - `yaml`: Enable the YAML codec and YAML file store (default)
//! - `redis`: Enable the Redis store
//! - `full`: Enable all features
//!
//! # Quick Start
//!
//! ```rust
//! use traincfg::prelude::*;
//!
//! # fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
//! let mut service = DefaultTrainingConfigService::builder()
//!     .with_in_memory_store()
//!     .build()?;
//!
//! let mut config = service.load_configuration()?;
//! config.max_generations = Some(10);
//!
//! let report = service.save_configuration(Some(&config))?;
//! assert!(report.is_valid());
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

/// Commonly used types and traits.
///
/// This module re-exports the most commonly used types and traits for convenient access.
pub mod prelude {
    pub use crate::domain::{
        default_training_configuration, validate, ConfigError, Result, StoreKey,
        TrainingConfiguration, TrainingConfigurationService, ValidationResult, ValidationStatus,
    };
    pub use crate::ports::{ConfigCodec, ConfigStore};
    pub use crate::service::{DefaultTrainingConfigService, TrainingConfigServiceBuilder};

    // Re-export adapters based on feature flags
    pub use crate::adapters::InMemoryStore;
    #[cfg(feature = "redis")]
    pub use crate::adapters::RedisStore;
    #[cfg(feature = "yaml")]
    pub use crate::adapters::{YamlCodec, YamlFileStore};
}
