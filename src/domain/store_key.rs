// SPDX-License-Identifier: MIT OR Apache-2.0

//! Store key newtype for type-safe key handling.
//!
//! This module provides the `StoreKey` type, a newtype wrapper around `String`
//! naming a record in a [`ConfigStore`](crate::ports::ConfigStore).

use std::fmt;

/// The key under which the training configuration record is stored.
pub const TRAINING_CONFIGURATION_KEY: &str = "training_configuration";

/// A type-safe wrapper for store keys.
///
/// # Examples
///
/// ```
/// use traincfg::domain::store_key::{StoreKey, TRAINING_CONFIGURATION_KEY};
///
/// let key = StoreKey::training_configuration();
/// assert_eq!(key.as_str(), TRAINING_CONFIGURATION_KEY);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct StoreKey(String);

impl StoreKey {
    /// Creates a new `StoreKey` from a `String`.
    pub fn new(key: String) -> Self {
        StoreKey(key)
    }

    /// Returns the fixed key of the training configuration record.
    pub fn training_configuration() -> Self {
        StoreKey::from(TRAINING_CONFIGURATION_KEY)
    }

    /// Returns the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Converts the `StoreKey` into its inner `String`.
    pub fn into_string(self) -> String {
        self.0
    }

    /// Returns `true` if the key is safe to use as a file stem or a key suffix.
    ///
    /// Safe keys are non-empty, do not start with a dot and only contain ASCII
    /// alphanumerics, `_`, `-` and `.`.
    pub fn is_path_safe(&self) -> bool {
        !self.0.is_empty()
            && !self.0.starts_with('.')
            && self
                .0
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'))
    }
}

impl From<String> for StoreKey {
    fn from(s: String) -> Self {
        StoreKey(s)
    }
}

impl From<&str> for StoreKey {
    fn from(s: &str) -> Self {
        StoreKey(s.to_string())
    }
}

impl From<StoreKey> for String {
    fn from(key: StoreKey) -> Self {
        key.0
    }
}

impl AsRef<str> for StoreKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StoreKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
