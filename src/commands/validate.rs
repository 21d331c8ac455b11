use crate::models::PathDescriptor;
use crate::validation::validate_response;
use crate::{Result, loader};
use colored::*;
use std::path::{Path, PathBuf};

pub fn execute_validate(
    response_path: &PathBuf,
    schema_path: &PathBuf,
    endpoint: &Option<String>,
    method: &Option<String>,
    status: Option<u16>,
    envelope: bool,
    show_mismatches: bool,
    skip_validation: bool,
) -> Result<()> {
    if skip_validation {
        println!("{}", "⚠ Schema validation skipped".yellow());
        return Ok(());
    }

    println!("{}", "Validating response against schema...".bright_blue());
    println!("  Response: {}", response_path.display());
    println!("  Schema: {}", schema_path.display());

    let data = load_data(response_path, envelope)?;
    let schema = loader::load_document(schema_path)?;

    let descriptor = endpoint.as_ref().map(|endpoint| {
        let mut descriptor = PathDescriptor::new(endpoint);
        if let Some(method) = method {
            descriptor = descriptor.with_method(method);
        }
        if let Some(status) = status {
            descriptor = descriptor.with_status(status);
        }
        descriptor
    });

    if let Some(ref descriptor) = descriptor {
        println!(
            "  Lookup: {} {} ({})",
            descriptor.method.as_deref().unwrap_or("GET"),
            descriptor.endpoint.as_deref().unwrap_or_default(),
            descriptor.status.unwrap_or(200)
        );
    }
    println!();

    // Structural failures (missing schema, unresolvable path) propagate as
    // hard errors; only a failed data validation is reported below.
    let report = validate_response(&data, &schema, descriptor.as_ref())?;

    if report.valid {
        println!("{}", "✓ Response matches the schema".green().bold());
        return Ok(());
    }

    let errors = report.errors.unwrap_or_default();
    println!(
        "{}",
        format!("✗ Schema validation failed: {} error(s)", errors.len())
            .red()
            .bold()
    );
    for error in &errors {
        let location = if error.instance_path.is_empty() {
            "(root)"
        } else {
            error.instance_path.as_str()
        };
        println!("  - {}: {}", location.cyan(), error.message.red());
    }

    if show_mismatches {
        if let Some(mismatch) = &report.mismatch {
            println!();
            println!("{}", "Mismatch view:".bright_blue());
            println!("{}", serde_json::to_string_pretty(&mismatch.annotated)?);
        }
    }

    std::process::exit(1);
}

fn load_data(response_path: &Path, envelope: bool) -> Result<serde_json::Value> {
    if envelope {
        let response = loader::load_response(response_path)?;
        println!("  Status: {}", response.status);
        Ok(response.body)
    } else {
        loader::load_document(response_path)
    }
}
