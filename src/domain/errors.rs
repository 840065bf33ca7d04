// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the training configuration crate.
//!
//! Every fatal condition surfaced by the service is a distinct variant so callers
//! branch on the kind of failure instead of inspecting message text. Soft
//! validation findings are never errors; they travel in a
//! [`ValidationResult`](crate::domain::ValidationResult).

use thiserror::Error;

/// The main error type for training configuration operations.
///
/// # Examples
///
/// ```
/// use traincfg::domain::errors::ConfigError;
///
/// fn require_config() -> Result<(), ConfigError> {
///     Err(ConfigError::MissingConfiguration {
///         key: "training_configuration".to_string(),
///     })
/// }
///
/// assert!(matches!(
///     require_config(),
///     Err(ConfigError::MissingConfiguration { .. })
/// ));
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// No configuration is stored under the key and bootstrapping is disabled.
    #[error("No training configuration stored under key '{key}'")]
    MissingConfiguration {
        /// The store key that had no record
        key: String,
    },

    /// The configuration violates one or more hard validation rules.
    #[error(
        "Training configuration failed validation with {} error(s): {}. {remedy}",
        .errors.len(),
        .errors.join("; ")
    )]
    ValidationFailed {
        /// Every violated rule, in check order
        errors: Vec<String>,
        /// What the caller should do about it
        remedy: String,
    },

    /// An absent or otherwise unusable argument was passed to the service.
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of the rejected argument
        message: String,
    },

    /// An error occurred in a configuration store.
    #[error("Configuration store '{store_name}' error: {message}")]
    StoreError {
        /// The name of the store that encountered the error
        store_name: String,
        /// The error message
        message: String,
        /// The underlying error, if any
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Failed to encode or decode a stored configuration document.
    #[error("Failed to parse configuration: {message}")]
    ParseError {
        /// The error message
        message: String,
        /// The underlying parsing error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl ConfigError {
    /// Creates a `ValidationFailed` error for a stored configuration that cannot be loaded.
    pub fn invalid_stored(key: &str, errors: Vec<String>) -> Self {
        ConfigError::ValidationFailed {
            errors,
            remedy: format!(
                "Fix or delete the stored configuration under key '{}' and retry",
                key
            ),
        }
    }

    /// Creates a `ValidationFailed` error for a configuration rejected before saving.
    pub fn invalid_for_save(errors: Vec<String>) -> Self {
        ConfigError::ValidationFailed {
            errors,
            remedy: "The configuration was not saved".to_string(),
        }
    }

    /// Creates a `StoreError` without an underlying cause.
    pub fn store(store_name: impl Into<String>, message: impl Into<String>) -> Self {
        ConfigError::StoreError {
            store_name: store_name.into(),
            message: message.into(),
            source: None,
        }
    }

    /// Returns the validation errors carried by a `ValidationFailed` error.
    pub fn validation_errors(&self) -> Option<&[String]> {
        match self {
            ConfigError::ValidationFailed { errors, .. } => Some(errors.as_slice()),
            _ => None,
        }
    }
}

/// A specialized Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
