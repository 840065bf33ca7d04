// SPDX-License-Identifier: MIT OR Apache-2.0

//! Redis configuration store adapter.
//!
//! Each record is a YAML document stored in a plain Redis string under
//! `<namespace><key>`. A single `SET` replaces the whole document, so readers
//! never see a partial write.

use crate::adapters::yaml_file::YamlCodec;
use crate::domain::{ConfigError, Result, StoreKey, TrainingConfiguration};
use crate::ports::{ConfigCodec, ConfigStore};
use once_cell::sync::Lazy;
use redis::{AsyncCommands, Client};
use std::future::Future;
use std::sync::Arc;

/// Shared runtime for store operations to avoid expensive runtime creation on every call
static STORE_RUNTIME: Lazy<tokio::runtime::Runtime> = Lazy::new(|| {
    tokio::runtime::Runtime::new().expect("Failed to create runtime for Redis store")
});

const STORE_NAME: &str = "redis";

fn redis_error(message: &str, e: redis::RedisError) -> ConfigError {
    ConfigError::StoreError {
        store_name: STORE_NAME.to_string(),
        message: format!("{}: {}", message, e),
        source: Some(Box::new(e)),
    }
}

/// Configuration store backed by Redis.
///
/// # Examples
///
/// ```rust,no_run
/// use traincfg::adapters::RedisStore;
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let store = RedisStore::new("redis://localhost:6379", "trainer:").await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct RedisStore {
    /// Redis client
    client: Arc<Client>,
    /// Prefix prepended to every key
    namespace: String,
    /// Document codec
    codec: YamlCodec,
}

impl RedisStore {
    /// Validates namespace to prevent pattern injection
    fn validate_namespace(namespace: &str) -> Result<()> {
        if namespace.contains(['*', '?', '[', ']', '\\']) {
            return Err(ConfigError::store(
                STORE_NAME,
                "Namespace contains invalid characters (* ? [ ] \\)",
            ));
        }
        Ok(())
    }

    /// Connects to Redis and verifies the server answers.
    ///
    /// # Arguments
    ///
    /// * `url` - Redis connection URL (e.g., `"redis://localhost:6379"`)
    /// * `namespace` - Prefix for every stored key (e.g., `"trainer:"`)
    pub async fn new(url: &str, namespace: &str) -> Result<Self> {
        Self::validate_namespace(namespace)?;

        let client = Client::open(url)
            .map_err(|e| redis_error("Failed to create Redis client", e))?;

        let mut conn = client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| redis_error("Failed to connect to Redis", e))?;

        let _: String = redis::cmd("PING")
            .query_async(&mut conn)
            .await
            .map_err(|e| redis_error("Redis did not answer PING", e))?;

        Ok(Self {
            client: Arc::new(client),
            namespace: namespace.to_string(),
            codec: YamlCodec::new(),
        })
    }

    /// Returns the namespace prefix.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Returns the Redis key holding the record for `key`.
    pub fn redis_key(&self, key: &StoreKey) -> String {
        format!("{}{}", self.namespace, key)
    }

    /// Drives an async Redis operation to completion from synchronous code.
    ///
    /// If called from an async context, the work runs on a separate thread so
    /// the caller's executor is not blocked.
    fn run<F, T>(future: F) -> Result<T>
    where
        F: Future<Output = Result<T>> + Send + 'static,
        T: Send + 'static,
    {
        if tokio::runtime::Handle::try_current().is_ok() {
            std::thread::spawn(move || STORE_RUNTIME.block_on(future))
                .join()
                .map_err(|_| ConfigError::store(STORE_NAME, "Failed to join store thread"))?
        } else {
            STORE_RUNTIME.block_on(future)
        }
    }
}

impl ConfigStore for RedisStore {
    fn name(&self) -> &str {
        STORE_NAME
    }

    fn load(&self, key: &StoreKey) -> Result<Option<TrainingConfiguration>> {
        let client = Arc::clone(&self.client);
        let redis_key = self.redis_key(key);

        let document = Self::run(async move {
            let mut conn = client
                .get_multiplexed_async_connection()
                .await
                .map_err(|e| redis_error("Failed to connect to Redis", e))?;

            let value: Option<String> = conn
                .get(&redis_key)
                .await
                .map_err(|e| redis_error("Failed to fetch value from Redis", e))?;
            Ok(value)
        })?;

        match document {
            Some(document) => self.codec.decode(&document).map(Some),
            None => {
                tracing::debug!("No configuration stored at redis key '{}'", self.redis_key(key));
                Ok(None)
            }
        }
    }

    fn save(&mut self, key: &StoreKey, config: &TrainingConfiguration) -> Result<()> {
        let document = self.codec.encode(config)?;
        let client = Arc::clone(&self.client);
        let redis_key = self.redis_key(key);

        Self::run(async move {
            let mut conn = client
                .get_multiplexed_async_connection()
                .await
                .map_err(|e| redis_error("Failed to connect to Redis", e))?;

            let _: () = conn
                .set(&redis_key, document)
                .await
                .map_err(|e| redis_error("Failed to store value in Redis", e))?;
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_namespace_rejects_patterns() {
        assert!(RedisStore::validate_namespace("trainer:*").is_err());
        assert!(RedisStore::validate_namespace("trainer:[a]").is_err());
        assert!(RedisStore::validate_namespace("trainer:").is_ok());
    }
}
