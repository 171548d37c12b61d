//! Schema validation and generation dry run

use crate::generate::load_config;
use anyhow::{Context, Result};
use protodump_cli::codegen;
use protodump_core::{GeneratorConfig, GeneratorError, Schema};

/// Outcome of generating one message type.
#[derive(Debug)]
pub struct MessageReport {
    pub message: String,
    pub result: Result<usize, GeneratorError>,
}

/// Dry-run generation for every message, collecting each outcome.
pub fn check_schema(schema: &Schema, config: &GeneratorConfig) -> Vec<MessageReport> {
    schema
        .messages()
        .map(|message| MessageReport {
            message: message.name.clone(),
            result: codegen::generate_message(message, config).map(|code| code.len()),
        })
        .collect()
}

/// Check command implementation
pub fn run(schema_path: &str, config_path: Option<&str>) -> Result<()> {
    println!("Checking schema: {}", schema_path);

    let config = load_config(config_path)?;
    config.validate().context("Invalid generator configuration")?;
    let schema = Schema::from_file(schema_path)
        .with_context(|| format!("Failed to load schema: {schema_path}"))?;

    println!("✓ Message types: {}", schema.len());

    let reports = check_schema(&schema, &config);
    let mut failed = 0;
    for report in &reports {
        match &report.result {
            Ok(bytes) => println!("✓ {} ({} bytes)", report.message, bytes),
            Err(e) => {
                failed += 1;
                println!("✗ {}: {}", report.message, e);
            }
        }
    }

    if failed > 0 {
        anyhow::bail!(
            "{} of {} message types cannot be generated",
            failed,
            reports.len()
        );
    }

    println!("\nSchema is valid!");
    Ok(())
}
