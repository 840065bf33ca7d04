// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration codec trait definition.
//!
//! Document-oriented stores (files, Redis strings) persist the aggregate as
//! text. A `ConfigCodec` converts between that text and a
//! [`TrainingConfiguration`].

use crate::domain::{Result, TrainingConfiguration};

/// A trait for encoding and decoding stored configuration documents.
///
/// # Examples
///
/// ```rust
/// use traincfg::ports::ConfigCodec;
/// use traincfg::domain::{ConfigError, Result, TrainingConfiguration};
///
/// struct DebugCodec;
///
/// impl ConfigCodec for DebugCodec {
///     fn encode(&self, config: &TrainingConfiguration) -> Result<String> {
///         Ok(format!("{:?}", config))
///     }
///
///     fn decode(&self, _content: &str) -> Result<TrainingConfiguration> {
///         Err(ConfigError::ParseError {
///             message: "debug output cannot be decoded".to_string(),
///             source: None,
///         })
///     }
///
///     fn file_extension(&self) -> &str {
///         "txt"
///     }
/// }
/// ```
pub trait ConfigCodec: Send + Sync {
    /// Serializes a configuration into a document.
    fn encode(&self, config: &TrainingConfiguration) -> Result<String>;

    /// Parses a document into a configuration.
    ///
    /// Decoding only checks the document shape. Absent or null fields decode as
    /// `None`; presence, range and business rules are left to validation, so a
    /// decoded configuration may still be invalid.
    ///
    /// # Returns
    ///
    /// * `Ok(TrainingConfiguration)` - The decoded configuration
    /// * `Err(ConfigError::ParseError)` - The document is malformed
    fn decode(&self, content: &str) -> Result<TrainingConfiguration>;

    /// The file extension used for documents in this format, without the dot.
    fn file_extension(&self) -> &str;
}
