use crate::error::{RespecError, Result};
use crate::models::ErrorRecord;
use jsonschema::error::ValidationErrorKind;
use jsonschema::{Draft, ValidationError};
use serde_json::Value;

/// What the engine reports for one validation call.
#[derive(Debug, Clone)]
pub struct EngineVerdict {
    pub valid: bool,
    /// Every applicable error, in engine order (never fail-fast)
    pub errors: Vec<ErrorRecord>,
}

/// Schema validation engine backed by the `jsonschema` crate.
///
/// A fresh validator is compiled per call, so no compiled-schema state is
/// shared between calls and concurrent use over distinct inputs is safe.
/// Format assertions (date-time, email, uuid, ...) are enabled; unknown
/// and vendor-extension keywords (`x-*`, `example`, ...) are ignored, as
/// Swagger/OpenAPI fragments require.
#[derive(Debug, Clone, Default)]
pub struct ValidationEngine;

impl ValidationEngine {
    pub fn new() -> Self {
        Self
    }

    /// Compile `schema` and validate `data` against it, collecting every
    /// error the engine can report.
    ///
    /// # Errors
    ///
    /// Returns `SchemaCompileError` when the schema itself is rejected by
    /// the engine. Invalid data is not an error: it is a normal verdict
    /// with `valid: false`.
    pub fn compile_and_validate(&self, schema: &Value, data: &Value) -> Result<EngineVerdict> {
        let mut options = jsonschema::options();
        options.with_draft(Draft::Draft7);
        options.should_validate_formats(true);

        let validator = options
            .build(schema)
            .map_err(|e| RespecError::SchemaCompileError(e.to_string()))?;

        let errors: Vec<ErrorRecord> = validator
            .iter_errors(data)
            .map(|e| record_from_engine(&e))
            .collect();

        Ok(EngineVerdict {
            valid: errors.is_empty(),
            errors,
        })
    }
}

/// Map one native engine error into an owned record.
fn record_from_engine(error: &ValidationError<'_>) -> ErrorRecord {
    let keyword = match &error.kind {
        ValidationErrorKind::Required { .. } => "required".to_string(),
        _ => error
            .schema_path
            .to_string()
            .rsplit('/')
            .next()
            .unwrap_or_default()
            .to_string(),
    };

    let missing_property = match &error.kind {
        ValidationErrorKind::Required { property } => Some(
            property
                .as_str()
                .map(str::to_owned)
                .unwrap_or_else(|| property.to_string()),
        ),
        _ => None,
    };

    ErrorRecord {
        instance_path: error.instance_path.to_string(),
        keyword,
        message: error.to_string(),
        missing_property,
    }
}
