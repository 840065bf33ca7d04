// SPDX-License-Identifier: MIT OR Apache-2.0

//! The validation engine.
//!
//! [`validate`] runs two tiers of checks over a [`TrainingConfiguration`]:
//! range and presence checks on every field, then cross-field business rules.
//! Hard errors make the configuration unusable; warnings are advisory. Every
//! finding is reported, in a fixed order, and the configuration is never
//! modified.

use crate::domain::training::{
    Aggressiveness, FocusWeights, PersistencePolicy, QualityTargets, SafetyLimits, ScenarioMix,
    ScenarioMixError, TrainingConfiguration,
};
use serde::Serialize;
use std::fmt::Display;
use std::time::Duration;

/// Runs longer than this are flagged.
pub const MAX_RECOMMENDED_TRAINING_DURATION: Duration = Duration::from_secs(24 * 60 * 60);

/// Human approval thresholds below this are flagged.
pub const MIN_RECOMMENDED_APPROVAL_THRESHOLD: f64 = 0.10;

/// The four primary focus weights should add up to at least this.
pub const MIN_PRIMARY_FOCUS_TOTAL: f64 = 1.0;

/// Tolerance applied when comparing summed weights against a bound.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-3;

/// Scenario counts above this, combined with [`LARGE_RUN_GENERATIONS`], are flagged.
pub const LARGE_RUN_SCENARIO_COUNT: i32 = 2000;

/// Generation counts above this, combined with [`LARGE_RUN_SCENARIO_COUNT`], are flagged.
pub const LARGE_RUN_GENERATIONS: i32 = 50;

/// Overall outcome of a validation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ValidationStatus {
    /// No errors and no warnings.
    Success,
    /// No errors, at least one warning.
    WithWarnings,
    /// At least one error.
    Failure,
}

/// Findings from validating a configuration.
///
/// The configuration is valid exactly when there are no errors; warnings never
/// change that.
///
/// # Examples
///
/// ```
/// use traincfg::domain::{ValidationResult, ValidationStatus};
///
/// let result = ValidationResult::with_warnings(vec!["heads up".to_string()]);
/// assert!(result.is_valid());
/// assert_eq!(result.status(), ValidationStatus::WithWarnings);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    errors: Vec<String>,
    warnings: Vec<String>,
}

impl ValidationResult {
    /// A result with no findings.
    pub fn success() -> Self {
        Self::default()
    }

    /// A valid result carrying advisory warnings.
    pub fn with_warnings(warnings: Vec<String>) -> Self {
        Self {
            errors: Vec::new(),
            warnings,
        }
    }

    /// A result carrying hard errors and any warnings collected alongside them.
    pub fn failure(errors: Vec<String>, warnings: Vec<String>) -> Self {
        Self { errors, warnings }
    }

    /// Returns `true` when there are no hard errors.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Hard errors, in check order.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Warnings, in check order.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Returns `true` when there is at least one warning.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Classifies the result.
    pub fn status(&self) -> ValidationStatus {
        if !self.errors.is_empty() {
            ValidationStatus::Failure
        } else if !self.warnings.is_empty() {
            ValidationStatus::WithWarnings
        } else {
            ValidationStatus::Success
        }
    }

    /// Consumes the result and returns its errors.
    pub fn into_errors(self) -> Vec<String> {
        self.errors
    }
}

/// Validates a training configuration.
///
/// # Examples
///
/// ```
/// use traincfg::domain::{default_training_configuration, validate};
///
/// let mut config = default_training_configuration();
/// config.scenario_count = Some(0);
///
/// let result = validate(&config);
/// assert!(!result.is_valid());
/// assert!(result.errors()[0].contains("scenario_count"));
/// ```
pub fn validate(config: &TrainingConfiguration) -> ValidationResult {
    let mut checks = Checks::default();

    checks.positive("scenario_count", config.scenario_count);
    checks.positive("max_generations", config.max_generations);
    checks.fraction("improvement_threshold", config.improvement_threshold);
    checks.positive("validation_scenarios", config.validation_scenarios);

    let mix = checks.required("scenario_mix", config.scenario_mix.as_ref());
    let aggressiveness = checks.required("aggressiveness", config.aggressiveness.as_ref());
    let quality = checks.required("quality_targets", config.quality_targets.as_ref());
    let focus = checks.required("focus", config.focus.as_ref());
    let safety = checks.required("safety", config.safety.as_ref());
    let persistence = checks.required("persistence", config.persistence.as_ref());

    if let Some(mix) = mix {
        check_scenario_mix(&mut checks, mix);
    }
    if let Some(aggressiveness) = aggressiveness {
        check_aggressiveness(&mut checks, aggressiveness);
    }
    if let Some(quality) = quality {
        check_quality_targets(&mut checks, quality);
    }
    if let Some(focus) = focus {
        check_focus(&mut checks, focus);
    }
    if let Some(safety) = safety {
        check_safety(&mut checks, safety);
    }
    if let Some(persistence) = persistence {
        check_persistence(&mut checks, persistence);
    }

    if let (Some(scenario_count), Some(max_generations)) =
        (config.scenario_count, config.max_generations)
    {
        if scenario_count > LARGE_RUN_SCENARIO_COUNT && max_generations > LARGE_RUN_GENERATIONS {
            checks.warn(format!(
                "scenario_count {} with max_generations {} projects a very long run; \
                 consider reducing either",
                scenario_count, max_generations
            ));
        }
    }

    checks.finish()
}

fn check_scenario_mix(checks: &mut Checks, mix: &ScenarioMix) {
    for (name, value) in mix.components() {
        checks.fraction(&format!("scenario_mix.{}", name), value);
    }
    match mix.validate() {
        // Already reported as required above.
        Ok(()) | Err(ScenarioMixError::Missing { .. }) => {}
        Err(e) => checks.error(format!("scenario_mix: {}", e)),
    }
}

fn check_aggressiveness(checks: &mut Checks, aggressiveness: &Aggressiveness) {
    checks.fraction("aggressiveness.mutation_rate", aggressiveness.mutation_rate);
    checks.fraction(
        "aggressiveness.exploration_ratio",
        aggressiveness.exploration_ratio,
    );
    checks.range(
        "aggressiveness.regression_tolerance",
        aggressiveness.regression_tolerance,
        -1.0,
        1.0,
    );
    checks.positive(
        "aggressiveness.stagnation_limit",
        aggressiveness.stagnation_limit,
    );
    checks.fraction(
        "aggressiveness.minimum_progress",
        aggressiveness.minimum_progress,
    );
}

fn check_quality_targets(checks: &mut Checks, quality: &QualityTargets) {
    for (name, value) in quality.components() {
        checks.fraction(&format!("quality_targets.{}", name), value);
    }
    if let (Some(accuracy), Some(completion)) =
        (quality.technical_accuracy, quality.conversation_completion)
    {
        if accuracy < completion {
            checks.warn(format!(
                "quality_targets.technical_accuracy ({:.2}) is lower than \
                 quality_targets.conversation_completion ({:.2}); accuracy should be \
                 at least as strict as completion",
                accuracy, completion
            ));
        }
    }
}

fn check_focus(checks: &mut Checks, focus: &FocusWeights) {
    for (name, value) in focus.components() {
        checks.fraction(&format!("focus.{}", name), value);
    }
    if let Some(primary) = focus.primary_total() {
        if primary + WEIGHT_SUM_TOLERANCE < MIN_PRIMARY_FOCUS_TOTAL {
            checks.warn(format!(
                "focus primary weights (tool_selection_accuracy, personality_authenticity, \
                 payment_flow_completion, contextual_appropriateness) sum to {:.2}, \
                 below {:.1}",
                primary, MIN_PRIMARY_FOCUS_TOTAL
            ));
        }
    }
}

fn check_safety(checks: &mut Checks, safety: &SafetyLimits) {
    let duration = checks.non_zero("safety.max_training_duration", safety.max_training_duration);
    checks.positive("safety.max_prompt_length", safety.max_prompt_length);
    checks.present(
        "safety.required_regression_tests",
        safety.required_regression_tests,
    );
    let approval = checks.fraction(
        "safety.human_approval_threshold",
        safety.human_approval_threshold,
    );
    checks.non_zero("safety.auto_backup_interval", safety.auto_backup_interval);

    if let Some(duration) = duration {
        if duration > MAX_RECOMMENDED_TRAINING_DURATION {
            checks.warn(format!(
                "safety.max_training_duration of {:.1}h exceeds the recommended maximum of {}h",
                hours(duration),
                MAX_RECOMMENDED_TRAINING_DURATION.as_secs() / 3600
            ));
        }
    }
    if let Some(approval) = approval {
        if approval < MIN_RECOMMENDED_APPROVAL_THRESHOLD {
            checks.warn(format!(
                "safety.human_approval_threshold {:.2} is below the recommended minimum of {:.2}",
                approval, MIN_RECOMMENDED_APPROVAL_THRESHOLD
            ));
        }
    }
}

fn check_persistence(checks: &mut Checks, persistence: &PersistencePolicy) {
    checks.present(
        "persistence.save_intermediate_results",
        persistence.save_intermediate_results,
    );
    checks.positive(
        "persistence.results_retention_days",
        persistence.results_retention_days,
    );
    checks.present("persistence.detailed_logging", persistence.detailed_logging);
    checks.present(
        "persistence.metrics_collection",
        persistence.metrics_collection,
    );
}

fn hours(duration: Duration) -> f64 {
    duration.as_secs_f64() / 3600.0
}

/// Accumulates findings in check order.
///
/// Every field check reports an absent value as required and hands back the
/// value when it is present, so callers can chain business rules on it.
#[derive(Default)]
struct Checks {
    errors: Vec<String>,
    warnings: Vec<String>,
}

impl Checks {
    fn error(&mut self, message: String) {
        self.errors.push(message);
    }

    fn warn(&mut self, message: String) {
        self.warnings.push(message);
    }

    fn required<'a, T>(&mut self, name: &str, section: Option<&'a T>) -> Option<&'a T> {
        if section.is_none() {
            self.error(format!("{} is required", name));
        }
        section
    }

    fn present<T>(&mut self, name: &str, value: Option<T>) -> Option<T> {
        if value.is_none() {
            self.error(format!("{} is required", name));
        }
        value
    }

    fn positive<T: PartialOrd + Default + Display + Copy>(
        &mut self,
        name: &str,
        value: Option<T>,
    ) -> Option<T> {
        let value = self.present(name, value)?;
        if value <= T::default() {
            self.error(format!("{} must be greater than 0 (got {})", name, value));
        }
        Some(value)
    }

    fn non_zero(&mut self, name: &str, value: Option<Duration>) -> Option<Duration> {
        let value = self.present(name, value)?;
        if value.is_zero() {
            self.error(format!("{} must be a non-zero duration", name));
        }
        Some(value)
    }

    fn fraction(&mut self, name: &str, value: Option<f64>) -> Option<f64> {
        self.range(name, value, 0.0, 1.0)
    }

    // NaN fails `contains`, so it is reported like any other out-of-range value.
    fn range(&mut self, name: &str, value: Option<f64>, min: f64, max: f64) -> Option<f64> {
        let value = self.present(name, value)?;
        if !(min..=max).contains(&value) {
            self.error(format!(
                "{} must be between {} and {} (got {})",
                name, min, max, value
            ));
        }
        Some(value)
    }

    fn finish(self) -> ValidationResult {
        if !self.errors.is_empty() {
            ValidationResult::failure(self.errors, self.warnings)
        } else if !self.warnings.is_empty() {
            ValidationResult::with_warnings(self.warnings)
        } else {
            ValidationResult::success()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::defaults::default_training_configuration;

    fn warning_containing(result: &ValidationResult, needle: &str) -> bool {
        result.warnings().iter().any(|w| w.contains(needle))
    }

    fn error_containing(result: &ValidationResult, needle: &str) -> bool {
        result.errors().iter().any(|e| e.contains(needle))
    }

    #[test]
    fn test_default_configuration_is_clean() {
        let result = validate(&default_training_configuration());
        assert!(result.is_valid());
        assert!(result.errors().is_empty());
        assert!(result.warnings().is_empty());
        assert_eq!(result.status(), ValidationStatus::Success);
    }

    #[test]
    fn test_mix_summing_to_half_is_an_error() {
        let mut config = default_training_configuration();
        config.scenario_mix = Some(ScenarioMix {
            basic_ordering: Some(0.2),
            edge_cases: Some(0.1),
            cultural_variations: Some(0.1),
            ambiguous_requests: Some(0.05),
            payment_scenarios: Some(0.05),
        });

        let result = validate(&config);
        assert!(!result.is_valid());
        assert!(error_containing(&result, "scenario_mix: fractions must sum to 1.0"));
    }

    #[test]
    fn test_mix_within_tolerance_is_accepted() {
        let mut config = default_training_configuration();
        if let Some(mix) = config.scenario_mix.as_mut() {
            mix.payment_scenarios = Some(0.1009);
        }
        let result = validate(&config);
        assert!(result.is_valid());
        assert!(!error_containing(&result, "scenario_mix"));
    }

    #[test]
    fn test_low_approval_threshold_warns() {
        let mut config = default_training_configuration();
        if let Some(safety) = config.safety.as_mut() {
            safety.human_approval_threshold = Some(0.05);
        }
        let result = validate(&config);
        assert!(result.is_valid());
        assert_eq!(result.status(), ValidationStatus::WithWarnings);
        assert!(warning_containing(&result, "human_approval_threshold"));
    }

    #[test]
    fn test_long_duration_warns() {
        let mut config = default_training_configuration();
        if let Some(safety) = config.safety.as_mut() {
            safety.max_training_duration = Some(Duration::from_secs(30 * 3600));
        }
        let result = validate(&config);
        assert!(result.is_valid());
        assert!(warning_containing(&result, "30.0h"));
    }

    #[test]
    fn test_exactly_24h_does_not_warn() {
        let mut config = default_training_configuration();
        if let Some(safety) = config.safety.as_mut() {
            safety.max_training_duration = Some(MAX_RECOMMENDED_TRAINING_DURATION);
        }
        assert_eq!(validate(&config).status(), ValidationStatus::Success);
    }

    #[test]
    fn test_inverted_quality_targets_warn() {
        let mut config = default_training_configuration();
        if let Some(quality) = config.quality_targets.as_mut() {
            quality.technical_accuracy = Some(0.5);
            quality.conversation_completion = Some(0.9);
        }
        let result = validate(&config);
        assert!(result.is_valid());
        assert!(warning_containing(&result, "technical_accuracy (0.50)"));
    }

    #[test]
    fn test_weak_primary_focus_warns() {
        let mut config = default_training_configuration();
        if let Some(focus) = config.focus.as_mut() {
            focus.tool_selection_accuracy = Some(0.2);
            focus.personality_authenticity = Some(0.2);
            focus.payment_flow_completion = Some(0.2);
            focus.contextual_appropriateness = Some(0.2);
        }
        let result = validate(&config);
        assert!(result.is_valid());
        assert!(warning_containing(&result, "sum to 0.80"));
    }

    #[test]
    fn test_large_run_warns() {
        let mut config = default_training_configuration();
        config.scenario_count = Some(2500);
        config.max_generations = Some(60);
        let result = validate(&config);
        assert!(result.is_valid());
        assert!(warning_containing(&result, "very long run"));

        config.max_generations = Some(50);
        assert!(!warning_containing(&validate(&config), "very long run"));
    }

    #[test]
    fn test_negative_scenario_count() {
        let mut config = default_training_configuration();
        config.scenario_count = Some(-1);
        let result = validate(&config);
        assert_eq!(
            result.errors(),
            &["scenario_count must be greater than 0 (got -1)".to_string()]
        );
    }

    #[test]
    fn test_every_violation_is_reported() {
        let mut config = default_training_configuration();
        config.scenario_count = Some(0);
        config.max_generations = Some(-3);
        config.improvement_threshold = Some(1.5);
        config.persistence = None;
        if let Some(aggressiveness) = config.aggressiveness.as_mut() {
            aggressiveness.mutation_rate = Some(f64::NAN);
        }

        let result = validate(&config);
        assert_eq!(result.errors().len(), 5);
        assert!(result.errors()[0].starts_with("scenario_count"));
        assert!(result.errors()[1].starts_with("max_generations"));
        assert!(result.errors()[2].starts_with("improvement_threshold"));
        assert_eq!(result.errors()[3], "persistence is required");
        assert!(result.errors()[4].starts_with("aggressiveness.mutation_rate"));
    }

    #[test]
    fn test_missing_sections_are_errors() {
        let mut config = default_training_configuration();
        config.scenario_mix = None;
        config.safety = None;
        let result = validate(&config);
        assert_eq!(
            result.errors(),
            &[
                "scenario_mix is required".to_string(),
                "safety is required".to_string()
            ]
        );
    }

    #[test]
    fn test_zero_durations_are_errors() {
        let mut config = default_training_configuration();
        if let Some(safety) = config.safety.as_mut() {
            safety.auto_backup_interval = Some(Duration::ZERO);
        }
        let result = validate(&config);
        assert!(error_containing(&result, "safety.auto_backup_interval"));
    }

    #[test]
    fn test_warnings_survive_alongside_errors() {
        let mut config = default_training_configuration();
        config.validation_scenarios = Some(0);
        if let Some(safety) = config.safety.as_mut() {
            safety.human_approval_threshold = Some(0.01);
        }
        let result = validate(&config);
        assert_eq!(result.status(), ValidationStatus::Failure);
        assert_eq!(result.errors().len(), 1);
        assert_eq!(result.warnings().len(), 1);
    }

    #[test]
    fn test_regression_tolerance_range() {
        let mut config = default_training_configuration();
        if let Some(aggressiveness) = config.aggressiveness.as_mut() {
            aggressiveness.regression_tolerance = Some(-1.5);
        }
        assert!(error_containing(
            &validate(&config),
            "aggressiveness.regression_tolerance must be between -1 and 1"
        ));
    }

    #[test]
    fn test_validation_does_not_mutate() {
        let mut config = default_training_configuration();
        config.scenario_count = Some(-7);
        let before = config.clone();
        let _ = validate(&config);
        assert_eq!(config, before);
    }

    #[test]
    fn test_result_constructors() {
        assert_eq!(ValidationResult::success().status(), ValidationStatus::Success);
        let failure = ValidationResult::failure(vec!["e".to_string()], vec!["w".to_string()]);
        assert!(!failure.is_valid());
        assert!(failure.has_warnings());
        assert_eq!(failure.into_errors(), vec!["e".to_string()]);
    }

    #[test]
    fn test_missing_scalar_is_required() {
        let mut config = default_training_configuration();
        config.scenario_count = None;
        let result = validate(&config);
        assert_eq!(result.errors(), &["scenario_count is required".to_string()]);
    }

    #[test]
    fn test_missing_section_fields_are_required() {
        let mut config = default_training_configuration();
        if let Some(safety) = config.safety.as_mut() {
            safety.max_prompt_length = None;
            safety.required_regression_tests = None;
        }
        if let Some(persistence) = config.persistence.as_mut() {
            persistence.metrics_collection = None;
        }

        let result = validate(&config);
        assert_eq!(
            result.errors(),
            &[
                "safety.max_prompt_length is required".to_string(),
                "safety.required_regression_tests is required".to_string(),
                "persistence.metrics_collection is required".to_string(),
            ]
        );
    }

    #[test]
    fn test_missing_mix_component_skips_total() {
        let mut config = default_training_configuration();
        if let Some(mix) = config.scenario_mix.as_mut() {
            mix.edge_cases = None;
        }
        let result = validate(&config);
        assert_eq!(
            result.errors(),
            &["scenario_mix.edge_cases is required".to_string()]
        );
    }

    #[test]
    fn test_missing_values_skip_business_rules() {
        let mut config = default_training_configuration();
        config.scenario_count = Some(2500);
        config.max_generations = None;
        if let Some(safety) = config.safety.as_mut() {
            safety.human_approval_threshold = None;
        }
        if let Some(focus) = config.focus.as_mut() {
            focus.tool_selection_accuracy = None;
        }

        let result = validate(&config);
        assert_eq!(result.errors().len(), 3);
        assert!(result.warnings().is_empty());
    }
}
