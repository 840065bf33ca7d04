// SPDX-License-Identifier: MIT OR Apache-2.0

//! The default training configuration.
//!
//! These literals are what a first run persists and what downstream tooling
//! expects to find, so they are part of the public contract. The default always
//! passes validation without warnings.

use crate::domain::training::{
    Aggressiveness, FocusWeights, PersistencePolicy, QualityTargets, SafetyLimits, ScenarioMix,
    TrainingConfiguration,
};
use std::time::Duration;

const HOUR: u64 = 60 * 60;

/// Builds the canonical default training configuration.
///
/// # Examples
///
/// ```
/// use traincfg::domain::{default_training_configuration, validate};
///
/// let config = default_training_configuration();
/// assert_eq!(config.scenario_count, Some(3));
/// assert!(validate(&config).is_valid());
/// ```
pub fn default_training_configuration() -> TrainingConfiguration {
    TrainingConfiguration {
        scenario_count: Some(3),
        max_generations: Some(3),
        improvement_threshold: Some(0.02),
        validation_scenarios: Some(3),
        scenario_mix: Some(ScenarioMix {
            basic_ordering: Some(0.40),
            edge_cases: Some(0.20),
            cultural_variations: Some(0.20),
            ambiguous_requests: Some(0.10),
            payment_scenarios: Some(0.10),
        }),
        aggressiveness: Some(Aggressiveness {
            mutation_rate: Some(0.15),
            exploration_ratio: Some(0.30),
            regression_tolerance: Some(-0.05),
            stagnation_limit: Some(5),
            minimum_progress: Some(0.001),
        }),
        quality_targets: Some(QualityTargets {
            conversation_completion: Some(0.90),
            technical_accuracy: Some(0.95),
            personality_consistency: Some(0.90),
            contextual_appropriateness: Some(0.85),
            value_optimization: Some(0.80),
            information_completeness: Some(0.88),
            domain_expertise: Some(0.75),
            cultural_authenticity: Some(0.85),
            customer_satisfaction: Some(0.82),
        }),
        focus: Some(FocusWeights {
            tool_selection_accuracy: Some(1.0),
            personality_authenticity: Some(0.8),
            payment_flow_completion: Some(1.0),
            contextual_appropriateness: Some(0.9),
            information_completeness: Some(0.85),
            value_optimization: Some(0.7),
            ambiguity_handling: Some(0.6),
            cultural_term_recognition: Some(0.6),
            conversation_efficiency: Some(0.4),
        }),
        safety: Some(SafetyLimits {
            max_training_duration: Some(Duration::from_secs(8 * HOUR)),
            max_prompt_length: Some(10_000),
            required_regression_tests: Some(true),
            human_approval_threshold: Some(0.15),
            auto_backup_interval: Some(Duration::from_secs(30 * 60)),
        }),
        persistence: Some(PersistencePolicy {
            save_intermediate_results: Some(true),
            results_retention_days: Some(30),
            detailed_logging: Some(true),
            metrics_collection: Some(true),
        }),
    }
}

impl Default for TrainingConfiguration {
    fn default() -> Self {
        default_training_configuration()
    }
}
