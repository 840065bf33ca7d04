// SPDX-License-Identifier: MIT OR Apache-2.0

//! First-run bootstrap example for the training configuration crate.
//!
//! This example demonstrates:
//! - Creating a configuration service backed by a YAML file directory
//! - Loading on first run, which writes the default configuration
//! - Saving a modified configuration and reading the report
//!
//! To run this example:
//! ```bash
//! cargo run --example bootstrap
//! ```

use traincfg::prelude::*;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt::init();

    println!("=== Training Configuration: Bootstrap ===\n");

    let dir = tempfile::TempDir::new()?;
    let mut service = DefaultTrainingConfigService::builder()
        .with_yaml_dir(dir.path())
        .build()?;

    // Example 1: First load creates the default
    println!("--- Example 1: First Load ---");
    let mut config = service.load_configuration()?;
    println!(
        "✓ Loaded configuration: {} scenarios x {} generations",
        config.scenario_count.unwrap_or_default(),
        config.max_generations.unwrap_or_default()
    );
    println!(
        "  Stored at {}",
        dir.path().join("training_configuration.yaml").display()
    );

    // Example 2: Save a change that only draws a warning
    println!("\n--- Example 2: Save With Warnings ---");
    if let Some(safety) = config.safety.as_mut() {
        safety.human_approval_threshold = Some(0.05);
    }
    let report = service.save_configuration(Some(&config))?;
    println!("✓ Saved ({:?})", report.status());
    for warning in report.warnings() {
        println!("  warning: {}", warning);
    }

    // Example 3: Reload what was saved
    println!("\n--- Example 3: Reload ---");
    let reloaded = service.load_configuration()?;
    println!(
        "✓ Reloaded, approval threshold is now {:.2}",
        reloaded
            .safety
            .and_then(|s| s.human_approval_threshold)
            .unwrap_or_default()
    );

    Ok(())
}
