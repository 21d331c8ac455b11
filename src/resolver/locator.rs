use crate::error::{RespecError, Result};
use crate::models::PathDescriptor;
use crate::resolver::dialect::SpecDocument;
use serde_json::{Map, Value};
use tracing::debug;
use uuid::Uuid;

/// Resolve the response schema for one (endpoint, method, status) triple
/// out of a spec document, packaged as a self-contained schema.
///
/// The result carries a fresh unique identifier under `x-schema-id`, the
/// extracted fragment's own keys (fragment wins on conflict), and the
/// document's shared-definitions table under the dialect key so internal
/// `$ref`s resolve without touching the original document.
///
/// Lookup falls back to the `default` response when the requested status
/// is not declared.
pub fn resolve_response_schema(
    document: &SpecDocument<'_>,
    descriptor: &PathDescriptor,
) -> Result<Value> {
    let endpoint = descriptor
        .endpoint
        .as_deref()
        .ok_or_else(|| RespecError::MissingParameter("endpoint".to_string()))?;
    let method = descriptor
        .method
        .as_deref()
        .ok_or_else(|| RespecError::MissingParameter("method".to_string()))?
        .to_lowercase();
    let status = descriptor
        .status
        .ok_or_else(|| RespecError::MissingParameter("status".to_string()))?;

    debug!(%endpoint, %method, status, "resolving response schema");

    let responses = document
        .document()
        .get("paths")
        .and_then(|paths| paths.get(endpoint))
        .and_then(|path| path.get(&method))
        .and_then(|operation| operation.get("responses"));

    let response = match responses.and_then(|r| r.get(status.to_string())) {
        Some(response) => response,
        None => {
            debug!(%endpoint, %method, status, "status not declared, trying default response");
            responses.and_then(|r| r.get("default")).ok_or_else(|| {
                RespecError::ResponseDefinitionNotFound {
                    endpoint: endpoint.to_string(),
                    method: method.clone(),
                    status,
                }
            })?
        }
    };

    let fragment = document.dialect.response_schema(response).ok_or_else(|| {
        RespecError::SchemaDefinitionNotFound {
            location: format!(
                "paths.{endpoint}.{method}.responses.{status}.{}",
                document.dialect.schema_location()
            ),
        }
    })?;

    let mut resolved = Map::new();
    resolved.insert(
        "x-schema-id".to_string(),
        Value::String(format!(
            "{}:{endpoint}:{method}:{status}",
            Uuid::new_v4()
        )),
    );
    if let Some(fragment) = fragment.as_object() {
        for (key, value) in fragment {
            resolved.insert(key.clone(), value.clone());
        }
    }
    if let Some(table) = document.shared_table() {
        resolved.insert(
            document.dialect.shared_table_key().to_string(),
            table.clone(),
        );
    }

    Ok(Value::Object(resolved))
}
