use respec::RespecError;
use respec::loader::{load_document, load_response};
use respec::models::{MismatchKind, PathDescriptor};
use respec::validate_response;
use serde_json::{Value, json};
use std::io::Write;
use std::path::Path;

fn openapi_fixture() -> Value {
    load_document(Path::new("tests/fixtures/openapi.yaml")).unwrap()
}

fn swagger_fixture() -> Value {
    load_document(Path::new("tests/fixtures/swagger.yaml")).unwrap()
}

#[test]
fn test_load_openapi_fixture() {
    let doc = openapi_fixture();
    assert_eq!(doc["openapi"], json!("3.0.1"));
    assert_eq!(doc["info"]["title"], json!("User Management API"));

    let paths = doc["paths"].as_object().unwrap();
    assert!(paths.contains_key("/users/{id}"));
    assert!(paths.contains_key("/users"));
    assert!(paths.contains_key("/health"));

    // Unquoted YAML status keys become strings.
    assert!(doc["paths"]["/users"]["post"]["responses"]["201"].is_object());
}

#[test]
fn test_missing_property_end_to_end() {
    let doc = openapi_fixture();
    let descriptor = PathDescriptor::new("/users/{id}");
    let data = json!({"name": "Alice"});

    let report = validate_response(&data, &doc, Some(&descriptor)).unwrap();
    assert!(!report.valid);

    let errors = report.errors.unwrap();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].keyword, "required");
    assert_eq!(errors[0].missing_property.as_deref(), Some("age"));

    let mismatch = report.mismatch.unwrap();
    assert_eq!(mismatch.entries[0].kind, MismatchKind::MissingProperty);
    assert_eq!(mismatch.entries[0].path, "age");
    assert!(mismatch.annotated["age"].is_string());
    assert_eq!(mismatch.annotated["name"], json!("Alice"));
}

#[test]
fn test_value_mismatch_end_to_end() {
    let doc = openapi_fixture();
    let descriptor = PathDescriptor::new("/users/{id}");
    let data = json!({"name": "Alice", "age": "34"});

    let report = validate_response(&data, &doc, Some(&descriptor)).unwrap();
    assert!(!report.valid);

    let mismatch = report.mismatch.unwrap();
    assert_eq!(mismatch.entries.len(), 1);
    assert_eq!(mismatch.entries[0].kind, MismatchKind::ValueMismatch);
    assert_eq!(mismatch.entries[0].path, "age");

    // The original numeric-typed string is replaced by the annotation.
    let annotated = mismatch.annotated["age"].as_str().unwrap();
    assert!(annotated.contains("is not of type"));
}

#[test]
fn test_valid_envelope_end_to_end() {
    let doc = openapi_fixture();
    let response = load_response(Path::new("tests/fixtures/response-valid.json")).unwrap();
    assert_eq!(response.status, 200);

    let descriptor = PathDescriptor::new("/users/{id}");
    let report = validate_response(&response.body, &doc, Some(&descriptor)).unwrap();
    assert!(report.valid);
    assert!(report.errors.is_none());
    assert!(report.mismatch.is_none());
}

#[test]
fn test_invalid_envelope_end_to_end() {
    let doc = openapi_fixture();
    let response = load_response(Path::new("tests/fixtures/response-invalid.json")).unwrap();

    let descriptor = PathDescriptor::new("/users/{id}");
    let report = validate_response(&response.body, &doc, Some(&descriptor)).unwrap();
    assert!(!report.valid);
    assert_eq!(report.errors.unwrap().len(), 1);
}

#[test]
fn test_explicit_method_and_status() {
    let doc = openapi_fixture();
    let descriptor = PathDescriptor::new("/users")
        .with_method("POST")
        .with_status(201);

    let report = validate_response(&json!({"name": "Bob", "age": 1}), &doc, Some(&descriptor))
        .unwrap();
    assert!(report.valid);
}

#[test]
fn test_swagger_array_schema() {
    let doc = swagger_fixture();
    let descriptor = PathDescriptor::new("/pets");

    let pets = json!([{"name": "Rex"}, {"name": "Mia", "tag": "cat"}]);
    let report = validate_response(&pets, &doc, Some(&descriptor)).unwrap();
    assert!(report.valid);

    let pets = json!([{"name": "Rex"}, {"tag": "stray"}]);
    let report = validate_response(&pets, &doc, Some(&descriptor)).unwrap();
    assert!(!report.valid);

    let mismatch = report.mismatch.unwrap();
    assert_eq!(mismatch.entries[0].path, "1.name");
    assert_eq!(mismatch.entries[0].kind, MismatchKind::MissingProperty);
}

#[test]
fn test_swagger_fallback_to_default_response() {
    // Status 500 is not declared on /pets; the default entry covers it.
    let doc = swagger_fixture();
    let descriptor = PathDescriptor::new("/pets").with_status(500);

    let report = validate_response(&json!({"code": 13}), &doc, Some(&descriptor)).unwrap();
    assert!(report.valid);

    let report = validate_response(&json!({}), &doc, Some(&descriptor)).unwrap();
    assert!(!report.valid);
    assert_eq!(
        report.errors.unwrap()[0].missing_property.as_deref(),
        Some("code")
    );
}

#[test]
fn test_unknown_endpoint_raises() {
    let doc = openapi_fixture();
    let descriptor = PathDescriptor::new("/unknown");
    let err = validate_response(&json!({}), &doc, Some(&descriptor)).unwrap_err();
    assert!(matches!(err, RespecError::ResponseDefinitionNotFound { .. }));
}

#[test]
fn test_data_never_mutated() {
    let doc = openapi_fixture();
    let descriptor = PathDescriptor::new("/users/{id}");
    let data = json!({"name": "Alice", "age": "wrong", "email": "nope"});
    let before = data.clone();

    let _ = validate_response(&data, &doc, Some(&descriptor)).unwrap();
    assert_eq!(data, before);
}

#[test]
fn test_yaml_and_json_documents_resolve_identically() {
    let doc = swagger_fixture();

    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    file.write_all(serde_json::to_string(&doc).unwrap().as_bytes())
        .unwrap();
    let from_json = load_document(file.path()).unwrap();
    assert_eq!(doc, from_json);

    let descriptor = PathDescriptor::new("/pets");
    let data = json!([{"name": "Rex"}]);
    let from_yaml_report = validate_response(&data, &doc, Some(&descriptor)).unwrap();
    let from_json_report = validate_response(&data, &from_json, Some(&descriptor)).unwrap();
    assert_eq!(from_yaml_report.valid, from_json_report.valid);
}

#[test]
fn test_plain_schema_without_descriptor() {
    let schema = json!({
        "type": "object",
        "required": ["status"],
        "properties": {"status": {"type": "string"}}
    });

    let report = validate_response(&json!({"status": "ok"}), &schema, None).unwrap();
    assert!(report.valid);

    let report = validate_response(&json!({}), &schema, None).unwrap();
    assert!(!report.valid);
}
