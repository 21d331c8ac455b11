use crate::resolver::{SchemaSource, SpecDialect};
use crate::{Result, loader};
use colored::*;
use indexmap::IndexMap;
use std::path::Path;

pub fn execute_inspect(schema_path: &Path) -> Result<()> {
    println!("{}", "Loading document...".bright_blue());
    println!("  Path: {}", schema_path.display());

    let document = loader::load_document(schema_path)?;

    match SchemaSource::classify(&document) {
        SchemaSource::Plain(schema) => {
            println!("\n{}", "✓ Plain JSON Schema".green());
            if let Some(title) = schema.get("title").and_then(|t| t.as_str()) {
                println!("  Title: {}", title.bold());
            }
            if let Some(kind) = schema.get("type").and_then(|t| t.as_str()) {
                println!("  Type: {}", kind);
            }
        }
        SchemaSource::Document(spec) => {
            println!("\n{}", format!("✓ {} document", spec.dialect).green());

            let shared_count = match spec.dialect {
                SpecDialect::Swagger2 => spec
                    .shared_table()
                    .and_then(|table| table.as_object())
                    .map(|table| table.len()),
                SpecDialect::OpenApi3 => spec
                    .shared_table()
                    .and_then(|table| table.get("schemas"))
                    .and_then(|schemas| schemas.as_object())
                    .map(|schemas| schemas.len()),
            };
            if let Some(count) = shared_count {
                println!("  Shared schemas: {}", count);
            }

            let endpoints = collect_endpoints(spec.document());
            if endpoints.is_empty() {
                println!("{}", "No endpoints found".yellow());
                return Ok(());
            }

            println!();
            println!("{}", format!("Endpoints ({}):", endpoints.len()).bold());
            for (endpoint, operations) in &endpoints {
                println!("  {}", endpoint.cyan());
                for operation in operations {
                    println!("    {}", operation);
                }
            }
        }
    }

    Ok(())
}

const METHODS: [&str; 8] = [
    "get", "post", "put", "delete", "patch", "options", "head", "trace",
];

/// Collect endpoint -> "METHOD [statuses]" lines, in document order.
fn collect_endpoints(document: &serde_json::Value) -> IndexMap<String, Vec<String>> {
    let mut endpoints: IndexMap<String, Vec<String>> = IndexMap::new();

    let Some(paths) = document.get("paths").and_then(|paths| paths.as_object()) else {
        return endpoints;
    };

    for (endpoint, item) in paths {
        let Some(item) = item.as_object() else {
            continue;
        };
        for (method, operation) in item {
            // Path items also carry non-operation keys (parameters, summary).
            if !METHODS.contains(&method.as_str()) {
                continue;
            }
            let statuses: Vec<String> = operation
                .get("responses")
                .and_then(|responses| responses.as_object())
                .map(|responses| responses.keys().cloned().collect())
                .unwrap_or_default();
            endpoints
                .entry(endpoint.clone())
                .or_default()
                .push(format!("{} [{}]", method.to_uppercase(), statuses.join(", ")));
        }
    }

    endpoints
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_collect_endpoints() {
        let document = json!({
            "openapi": "3.0.1",
            "paths": {
                "/users": {
                    "parameters": [{"name": "tenant", "in": "header"}],
                    "get": {"responses": {"200": {}, "404": {}}},
                    "post": {"responses": {"201": {}}}
                },
                "/health": {
                    "get": {"responses": {"default": {}}}
                }
            }
        });

        let endpoints = collect_endpoints(&document);
        assert_eq!(endpoints.len(), 2);
        assert_eq!(endpoints["/users"].len(), 2);
        assert_eq!(endpoints["/health"][0], "GET [default]");
    }

    #[test]
    fn test_collect_endpoints_without_paths() {
        let endpoints = collect_endpoints(&json!({"openapi": "3.0.1"}));
        assert!(endpoints.is_empty());
    }
}
