// SPDX-License-Identifier: MIT OR Apache-2.0

//! Example showing how invalid configurations are rejected.
//!
//! To run this example:
//! ```bash
//! cargo run --example reject_invalid
//! ```

use traincfg::prelude::*;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let store = InMemoryStore::new();
    let mut service = DefaultTrainingConfigService::builder()
        .with_store(Box::new(store.clone()))
        .build()?;

    let mut config = service.create_default_configuration();
    config.scenario_count = Some(-1);
    config.improvement_threshold = Some(1.5);

    match service.save_configuration(Some(&config)) {
        Ok(_) => println!("unexpectedly saved"),
        Err(ConfigError::ValidationFailed { errors, .. }) => {
            println!("✗ Rejected with {} error(s):", errors.len());
            for error in errors {
                println!("  - {}", error);
            }
        }
        Err(other) => return Err(other.into()),
    }
    println!("Store writes: {}", store.save_count());

    match service.save_configuration(None) {
        Err(ConfigError::InvalidArgument { message }) => println!("✗ {}", message),
        other => println!("unexpected: {:?}", other.map(|r| r.status())),
    }

    Ok(())
}
