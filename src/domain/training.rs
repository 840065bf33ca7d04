// SPDX-License-Identifier: MIT OR Apache-2.0

//! The training configuration aggregate.
//!
//! A [`TrainingConfiguration`] is loaded, validated and saved as one unit. The
//! scalar counts are signed so that a stored `-1` survives deserialization and
//! is reported by validation instead of failing inside the decoder. Every field
//! is an `Option` for the same reason: a document missing `safety`, or holding
//! `max_prompt_length: null`, still decodes, and the validation engine reports
//! the absent value as required.
//!
//! The `Default` of a section leaves every field unset; the canonical values
//! come from [`default_training_configuration`](crate::domain::default_training_configuration).

use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Allowed deviation of the scenario mix total from 1.0.
pub const SCENARIO_MIX_TOLERANCE: f64 = 1e-3;

/// The root configuration for an automated training run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingConfiguration {
    /// Number of scenarios generated per generation
    #[serde(default)]
    pub scenario_count: Option<i32>,
    /// Upper bound on generations in one run
    #[serde(default)]
    pub max_generations: Option<i32>,
    /// Minimum generation-over-generation gain required to continue
    #[serde(default)]
    pub improvement_threshold: Option<f64>,
    /// Number of scenarios held back for validation
    #[serde(default)]
    pub validation_scenarios: Option<i32>,
    /// Relative share of each scenario family
    #[serde(default)]
    pub scenario_mix: Option<ScenarioMix>,
    /// How aggressively candidates are mutated and explored
    #[serde(default)]
    pub aggressiveness: Option<Aggressiveness>,
    /// Scores a run aims to reach
    #[serde(default)]
    pub quality_targets: Option<QualityTargets>,
    /// Relative emphasis on each improvement area
    #[serde(default)]
    pub focus: Option<FocusWeights>,
    /// Guards that bound a run
    #[serde(default)]
    pub safety: Option<SafetyLimits>,
    /// What a run keeps afterwards
    #[serde(default)]
    pub persistence: Option<PersistencePolicy>,
}

/// Fractions of each scenario family in a generation. They must total 1.0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioMix {
    /// Plain ordering conversations
    pub basic_ordering: Option<f64>,
    /// Unusual or boundary requests
    pub edge_cases: Option<f64>,
    /// Regional and cultural phrasing
    pub cultural_variations: Option<f64>,
    /// Requests that need clarification
    pub ambiguous_requests: Option<f64>,
    /// Conversations that reach payment
    pub payment_scenarios: Option<f64>,
}

/// Reasons a [`ScenarioMix`] is unusable.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScenarioMixError {
    /// A component is absent.
    #[error("{name} is missing")]
    Missing {
        /// The absent component
        name: &'static str,
    },

    /// A component is NaN or infinite.
    #[error("{name} is not a finite number")]
    NonFinite {
        /// The offending component
        name: &'static str,
    },

    /// The components do not total 1.0 within [`SCENARIO_MIX_TOLERANCE`].
    #[error("fractions must sum to 1.0 (\u{b1}{tolerance}), got {total:.4}")]
    InvalidTotal {
        /// The actual total
        total: f64,
        /// The tolerance applied
        tolerance: f64,
    },
}

impl ScenarioMix {
    /// Returns each component paired with its field name, in declaration order.
    pub fn components(&self) -> [(&'static str, Option<f64>); 5] {
        [
            ("basic_ordering", self.basic_ordering),
            ("edge_cases", self.edge_cases),
            ("cultural_variations", self.cultural_variations),
            ("ambiguous_requests", self.ambiguous_requests),
            ("payment_scenarios", self.payment_scenarios),
        ]
    }

    /// Returns the sum of all components, or `None` if any is missing.
    pub fn total(&self) -> Option<f64> {
        self.components().iter().map(|(_, v)| *v).sum()
    }

    /// Checks that the mix forms a distribution.
    ///
    /// # Examples
    ///
    /// ```
    /// use traincfg::domain::ScenarioMix;
    ///
    /// let mix = ScenarioMix {
    ///     basic_ordering: Some(0.2),
    ///     edge_cases: Some(0.1),
    ///     cultural_variations: Some(0.1),
    ///     ambiguous_requests: Some(0.05),
    ///     payment_scenarios: Some(0.05),
    /// };
    /// assert!(mix.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), ScenarioMixError> {
        let mut total = 0.0;
        for (name, value) in self.components() {
            match value {
                None => return Err(ScenarioMixError::Missing { name }),
                Some(v) if !v.is_finite() => return Err(ScenarioMixError::NonFinite { name }),
                Some(v) => total += v,
            }
        }

        if (total - 1.0).abs() > SCENARIO_MIX_TOLERANCE {
            return Err(ScenarioMixError::InvalidTotal {
                total,
                tolerance: SCENARIO_MIX_TOLERANCE,
            });
        }
        Ok(())
    }
}

/// Mutation and exploration settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Aggressiveness {
    /// Probability of mutating a candidate
    pub mutation_rate: Option<f64>,
    /// Share of candidates spent on exploration
    pub exploration_ratio: Option<f64>,
    /// Largest accepted score drop, usually negative
    pub regression_tolerance: Option<f64>,
    /// Generations without progress before stopping
    pub stagnation_limit: Option<i32>,
    /// Smallest gain that counts as progress
    pub minimum_progress: Option<f64>,
}

/// Target scores for a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QualityTargets {
    /// Share of conversations carried to a natural end
    pub conversation_completion: Option<f64>,
    /// Correct tool and data usage
    pub technical_accuracy: Option<f64>,
    /// Staying in character across turns
    pub personality_consistency: Option<f64>,
    /// Responses that fit the situation
    pub contextual_appropriateness: Option<f64>,
    /// Suggestions that raise order value
    pub value_optimization: Option<f64>,
    /// Answers that leave nothing out
    pub information_completeness: Option<f64>,
    /// Product and domain knowledge
    pub domain_expertise: Option<f64>,
    /// Natural use of local terms
    pub cultural_authenticity: Option<f64>,
    /// Overall customer rating
    pub customer_satisfaction: Option<f64>,
}

impl QualityTargets {
    /// Returns each target paired with its field name, in declaration order.
    pub fn components(&self) -> [(&'static str, Option<f64>); 9] {
        [
            ("conversation_completion", self.conversation_completion),
            ("technical_accuracy", self.technical_accuracy),
            ("personality_consistency", self.personality_consistency),
            ("contextual_appropriateness", self.contextual_appropriateness),
            ("value_optimization", self.value_optimization),
            ("information_completeness", self.information_completeness),
            ("domain_expertise", self.domain_expertise),
            ("cultural_authenticity", self.cultural_authenticity),
            ("customer_satisfaction", self.customer_satisfaction),
        ]
    }
}

/// Emphasis weights for each improvement area.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FocusWeights {
    /// Primary: picking the right tool
    pub tool_selection_accuracy: Option<f64>,
    /// Primary: sounding like the persona
    pub personality_authenticity: Option<f64>,
    /// Primary: finishing payment flows
    pub payment_flow_completion: Option<f64>,
    /// Primary: fitting the situation
    pub contextual_appropriateness: Option<f64>,
    /// Complete answers
    pub information_completeness: Option<f64>,
    /// Raising order value
    pub value_optimization: Option<f64>,
    /// Resolving unclear requests
    pub ambiguity_handling: Option<f64>,
    /// Understanding local terms
    pub cultural_term_recognition: Option<f64>,
    /// Fewer turns per outcome
    pub conversation_efficiency: Option<f64>,
}

impl FocusWeights {
    /// Returns each weight paired with its field name, in declaration order.
    pub fn components(&self) -> [(&'static str, Option<f64>); 9] {
        [
            ("tool_selection_accuracy", self.tool_selection_accuracy),
            ("personality_authenticity", self.personality_authenticity),
            ("payment_flow_completion", self.payment_flow_completion),
            ("contextual_appropriateness", self.contextual_appropriateness),
            ("information_completeness", self.information_completeness),
            ("value_optimization", self.value_optimization),
            ("ambiguity_handling", self.ambiguity_handling),
            ("cultural_term_recognition", self.cultural_term_recognition),
            ("conversation_efficiency", self.conversation_efficiency),
        ]
    }

    /// Sum of the four primary weights, or `None` if any is missing.
    pub fn primary_total(&self) -> Option<f64> {
        Some(
            self.tool_selection_accuracy?
                + self.personality_authenticity?
                + self.payment_flow_completion?
                + self.contextual_appropriateness?,
        )
    }
}

/// Limits that keep a run bounded and reviewable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SafetyLimits {
    /// Wall-clock budget for a run
    pub max_training_duration: Option<Duration>,
    /// Longest prompt a candidate may produce, in characters
    pub max_prompt_length: Option<i32>,
    /// Whether regression tests gate every generation
    pub required_regression_tests: Option<bool>,
    /// Change size above which a human must approve
    pub human_approval_threshold: Option<f64>,
    /// How often intermediate state is backed up
    pub auto_backup_interval: Option<Duration>,
}

/// Retention of run output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersistencePolicy {
    /// Keep per-generation results
    pub save_intermediate_results: Option<bool>,
    /// Days results are kept
    pub results_retention_days: Option<i32>,
    /// Record full conversation logs
    pub detailed_logging: Option<bool>,
    /// Collect run metrics
    pub metrics_collection: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mix(values: [f64; 5]) -> ScenarioMix {
        ScenarioMix {
            basic_ordering: Some(values[0]),
            edge_cases: Some(values[1]),
            cultural_variations: Some(values[2]),
            ambiguous_requests: Some(values[3]),
            payment_scenarios: Some(values[4]),
        }
    }

    #[test]
    fn test_mix_total_within_tolerance() {
        assert!(mix([0.4, 0.2, 0.2, 0.1, 0.1]).validate().is_ok());
        assert!(mix([0.4, 0.2, 0.2, 0.1, 0.1005]).validate().is_ok());
    }

    #[test]
    fn test_mix_total_out_of_tolerance() {
        let err = mix([0.2, 0.1, 0.1, 0.05, 0.05]).validate().unwrap_err();
        match err {
            ScenarioMixError::InvalidTotal { total, .. } => assert!((total - 0.5).abs() < 1e-9),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_mix_non_finite() {
        let err = mix([f64::NAN, 0.2, 0.2, 0.1, 0.1]).validate().unwrap_err();
        assert_eq!(
            err,
            ScenarioMixError::NonFinite {
                name: "basic_ordering"
            }
        );
    }

    #[test]
    fn test_mix_missing_component() {
        let mut partial = mix([0.4, 0.2, 0.2, 0.1, 0.1]);
        partial.ambiguous_requests = None;

        assert_eq!(partial.total(), None);
        assert_eq!(
            partial.validate().unwrap_err(),
            ScenarioMixError::Missing {
                name: "ambiguous_requests"
            }
        );
    }

    #[test]
    fn test_mix_error_message_mentions_total() {
        let err = mix([0.5, 0.5, 0.5, 0.0, 0.0]).validate().unwrap_err();
        assert!(err.to_string().contains("1.5000"));
    }

    #[test]
    fn test_focus_primary_total() {
        let mut focus = FocusWeights {
            tool_selection_accuracy: Some(0.25),
            personality_authenticity: Some(0.25),
            payment_flow_completion: Some(0.25),
            contextual_appropriateness: Some(0.25),
            information_completeness: Some(1.0),
            value_optimization: Some(1.0),
            ambiguity_handling: Some(1.0),
            cultural_term_recognition: Some(1.0),
            conversation_efficiency: Some(1.0),
        };
        assert!((focus.primary_total().unwrap() - 1.0).abs() < 1e-12);

        focus.payment_flow_completion = None;
        assert_eq!(focus.primary_total(), None);
    }

    #[cfg(feature = "yaml")]
    #[test]
    fn test_absent_and_null_fields_decode_as_none() {
        let safety: SafetyLimits =
            serde_yaml::from_str("max_prompt_length: null\nrequired_regression_tests: true\n")
                .unwrap();

        assert_eq!(safety.max_prompt_length, None);
        assert_eq!(safety.max_training_duration, None);
        assert_eq!(safety.required_regression_tests, Some(true));
    }
}
