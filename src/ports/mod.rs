// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ports layer containing trait definitions.
//!
//! This module contains the trait definitions (ports) that the service depends
//! on. Adapters in the adapters layer implement them.

pub mod codec;
pub mod store;

// Re-export commonly used types
pub use codec::ConfigCodec;
pub use store::ConfigStore;
