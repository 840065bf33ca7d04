// SPDX-License-Identifier: MIT OR Apache-2.0

//! Service layer containing the configuration service implementation.
//!
//! This module contains the concrete implementation of the
//! `TrainingConfigurationService` trait, which orchestrates a store and the
//! validation engine under a fail-fast policy.

pub mod default_service;

// Re-export commonly used types
pub use default_service::{DefaultTrainingConfigService, TrainingConfigServiceBuilder};
