// SPDX-License-Identifier: MIT OR Apache-2.0

//! YAML file configuration store adapter.
//!
//! This module provides a codec that reads and writes the training
//! configuration as YAML, and a store that keeps one YAML file per key inside a
//! directory.

use crate::domain::{ConfigError, Result, StoreKey, TrainingConfiguration};
use crate::ports::{ConfigCodec, ConfigStore};
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

/// Maximum allowed file size for YAML configuration files (10MB)
/// This prevents denial of service attacks via extremely large files
const MAX_YAML_FILE_SIZE: u64 = 10 * 1024 * 1024;

const STORE_NAME: &str = "yaml-file";

/// YAML codec implementation.
///
/// # Examples
///
/// ```rust
/// use traincfg::adapters::YamlCodec;
/// use traincfg::domain::default_training_configuration;
/// use traincfg::ports::ConfigCodec;
///
/// let codec = YamlCodec::new();
/// let document = codec.encode(&default_training_configuration()).unwrap();
/// assert!(document.contains("scenario_count: 3"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct YamlCodec;

impl YamlCodec {
    /// Creates a new YAML codec.
    pub fn new() -> Self {
        YamlCodec
    }
}

impl ConfigCodec for YamlCodec {
    fn encode(&self, config: &TrainingConfiguration) -> Result<String> {
        serde_yaml::to_string(config).map_err(|e| ConfigError::ParseError {
            message: format!("Failed to encode YAML: {}", e),
            source: Some(Box::new(e)),
        })
    }

    fn decode(&self, content: &str) -> Result<TrainingConfiguration> {
        serde_yaml::from_str(content).map_err(|e| ConfigError::ParseError {
            message: format!("Failed to parse YAML: {}", e),
            source: Some(Box::new(e)),
        })
    }

    fn file_extension(&self) -> &str {
        "yaml"
    }
}

/// Configuration store that keeps each record in `<dir>/<key>.yaml`.
///
/// Saves write a temporary sibling file and rename it into place, so readers
/// see either the previous document or the new one.
///
/// # Examples
///
/// ```rust,no_run
/// use traincfg::adapters::YamlFileStore;
///
/// // Store records in a specific directory
/// let store = YamlFileStore::new("/var/lib/trainer");
///
/// // Or in the OS-appropriate configuration directory
/// let store = YamlFileStore::from_default_location("trainer", "com.example").unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct YamlFileStore {
    /// Directory holding one file per key
    dir: PathBuf,
    /// YAML codec
    codec: YamlCodec,
}

impl YamlFileStore {
    /// Creates a store rooted at `dir`. The directory is created on first save.
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
            codec: YamlCodec::new(),
        }
    }

    /// Creates a store in the default OS-appropriate configuration directory.
    ///
    /// This method uses the `directories` crate to determine the appropriate
    /// configuration directory for the current operating system.
    ///
    /// # Arguments
    ///
    /// * `app_name` - The application name (e.g., "trainer")
    /// * `qualifier` - The organization/qualifier (e.g., "com.example")
    pub fn from_default_location(app_name: &str, qualifier: &str) -> Result<Self> {
        let proj_dirs = ProjectDirs::from(qualifier, "", app_name)
            .ok_or_else(|| ConfigError::store(STORE_NAME, "Failed to determine project directories"))?;

        Ok(Self::new(proj_dirs.config_dir()))
    }

    /// Returns the directory holding the records.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Returns the file that holds the record for `key`.
    ///
    /// Keys that could escape the directory are rejected.
    pub fn path_for(&self, key: &StoreKey) -> Result<PathBuf> {
        if !key.is_path_safe() {
            return Err(ConfigError::store(
                STORE_NAME,
                format!("Key '{}' is not usable as a file name", key),
            ));
        }
        Ok(self
            .dir
            .join(format!("{}.{}", key, self.codec.file_extension())))
    }

    fn temp_path_for(&self, key: &StoreKey) -> PathBuf {
        self.dir
            .join(format!(".{}.{}.tmp", key, self.codec.file_extension()))
    }
}

fn file_label(path: &Path) -> &str {
    path.file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("<unknown>")
}

fn io_error(message: String, e: std::io::Error) -> ConfigError {
    ConfigError::StoreError {
        store_name: STORE_NAME.to_string(),
        message,
        source: Some(Box::new(e)),
    }
}

impl ConfigStore for YamlFileStore {
    fn name(&self) -> &str {
        STORE_NAME
    }

    fn load(&self, key: &StoreKey) -> Result<Option<TrainingConfiguration>> {
        let path = self.path_for(key)?;
        if !path.exists() {
            tracing::debug!("No configuration file at {}", path.display());
            return Ok(None);
        }

        // Check file size before reading to prevent DoS via large files
        let metadata = fs::metadata(&path).map_err(|e| {
            io_error(
                format!("Failed to read file metadata: {}", file_label(&path)),
                e,
            )
        })?;

        if metadata.len() > MAX_YAML_FILE_SIZE {
            return Err(ConfigError::store(
                STORE_NAME,
                format!(
                    "Configuration file too large: {} bytes (max {} bytes)",
                    metadata.len(),
                    MAX_YAML_FILE_SIZE
                ),
            ));
        }

        let content = fs::read_to_string(&path).map_err(|e| {
            io_error(
                format!("Failed to read configuration file: {}", file_label(&path)),
                e,
            )
        })?;

        self.codec.decode(&content).map(Some)
    }

    fn save(&mut self, key: &StoreKey, config: &TrainingConfiguration) -> Result<()> {
        let path = self.path_for(key)?;
        let document = self.codec.encode(config)?;

        fs::create_dir_all(&self.dir).map_err(|e| {
            io_error(
                format!(
                    "Failed to create configuration directory: {}",
                    file_label(&self.dir)
                ),
                e,
            )
        })?;

        let temp_path = self.temp_path_for(key);
        if let Err(e) = fs::write(&temp_path, document) {
            let _ = fs::remove_file(&temp_path);
            return Err(io_error(
                format!("Failed to write configuration file: {}", file_label(&path)),
                e,
            ));
        }

        fs::rename(&temp_path, &path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            io_error(
                format!("Failed to replace configuration file: {}", file_label(&path)),
                e,
            )
        })?;

        tracing::debug!("Wrote configuration file {}", path.display());
        Ok(())
    }
}
