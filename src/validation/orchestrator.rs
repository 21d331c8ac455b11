use crate::error::{RespecError, Result};
use crate::models::{PathDescriptor, ValidationReport};
use crate::resolver::{SchemaSource, resolve_response_schema};
use crate::validation::engine::ValidationEngine;
use crate::validation::mismatch::project_mismatches;
use serde_json::Value;
use tracing::debug;

/// Façade over resolution, validation and mismatch projection.
///
/// Accepts data plus either a plain JSON Schema or a full Swagger/OpenAPI
/// document. With a spec document, a `PathDescriptor` selects the response
/// schema to validate against; with a plain schema the descriptor is
/// ignored. Every call compiles a fresh schema, so calls are independent
/// and safe to run concurrently over distinct inputs.
#[derive(Debug, Clone, Default)]
pub struct ResponseValidator {
    engine: ValidationEngine,
}

impl ResponseValidator {
    pub fn new() -> Self {
        Self {
            engine: ValidationEngine::new(),
        }
    }

    /// Validate `data` against `schema`, resolving through the spec
    /// document first when `path` is given and `schema` carries a dialect
    /// version marker.
    ///
    /// A failed data validation is a normal `valid: false` report, never
    /// an error; structural problems (missing schema, unresolvable path)
    /// always raise.
    pub fn validate(
        &self,
        data: &Value,
        schema: &Value,
        path: Option<&PathDescriptor>,
    ) -> Result<ValidationReport> {
        if schema.is_null() {
            return Err(RespecError::MissingSchema);
        }

        let resolved;
        let schema = match path {
            Some(descriptor) => match SchemaSource::classify(schema) {
                SchemaSource::Document(document) => {
                    resolved = resolve_response_schema(&document, &descriptor.with_defaults())?;
                    &resolved
                }
                // Plain schema: the path descriptor is ignored.
                SchemaSource::Plain(schema) => schema,
            },
            None => schema,
        };

        let verdict = self.engine.compile_and_validate(schema, data)?;
        if verdict.valid {
            return Ok(ValidationReport::passed());
        }

        debug!(errors = verdict.errors.len(), "data does not conform to schema");
        let view = project_mismatches(data, &verdict.errors);
        Ok(ValidationReport::failed(verdict.errors, view))
    }
}

/// Validate in one call with a throwaway validator. The standalone
/// counterpart of [`ResponseValidator::validate`].
pub fn validate_response(
    data: &Value,
    schema: &Value,
    path: Option<&PathDescriptor>,
) -> Result<ValidationReport> {
    ResponseValidator::new().validate(data, schema, path)
}
