// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapters layer containing configuration store implementations.
//!
//! This module contains concrete implementations of the ports defined in the
//! ports layer. Each store implements the `ConfigStore` trait to persist the
//! training configuration in a specific backend.

pub mod memory;
#[cfg(feature = "redis")]
pub mod redis;
#[cfg(feature = "yaml")]
pub mod yaml_file;

// Re-export adapters based on feature flags
pub use memory::InMemoryStore;
#[cfg(feature = "redis")]
pub use redis::RedisStore;
#[cfg(feature = "yaml")]
pub use yaml_file::{YamlCodec, YamlFileStore};
