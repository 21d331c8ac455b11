use crate::error::{RespecError, Result};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Load a schema or spec document from a JSON or YAML file.
///
/// The format is chosen by extension: `.yaml`/`.yml` parse as YAML and are
/// converted to a JSON value tree; anything else parses as JSON.
pub fn load_document<P: AsRef<Path>>(path: P) -> Result<Value> {
    let path = path.as_ref();

    let content = fs::read_to_string(path).map_err(|e| {
        RespecError::DocumentLoadError(format!("Failed to read file {}: {}", path.display(), e))
    })?;

    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    match extension {
        "yaml" | "yml" => {
            let yaml: serde_yaml::Value = serde_yaml::from_str(&content).map_err(|e| {
                RespecError::DocumentLoadError(format!(
                    "Failed to parse YAML {}: {}",
                    path.display(),
                    e
                ))
            })?;
            yaml_to_json(&yaml).map_err(|e| {
                RespecError::DocumentLoadError(format!(
                    "Failed to convert YAML {}: {}",
                    path.display(),
                    e
                ))
            })
        }
        _ => serde_json::from_str(&content).map_err(|e| {
            RespecError::DocumentLoadError(format!(
                "Failed to parse JSON {}: {}",
                path.display(),
                e
            ))
        }),
    }
}

/// Convert a YAML value tree to a JSON value tree.
///
/// Spec documents use the JSON-compatible subset of YAML; non-string map
/// keys (e.g. unquoted status codes) are stringified, tags are unwrapped,
/// and floats JSON cannot represent are rejected.
fn yaml_to_json(yaml: &serde_yaml::Value) -> std::result::Result<Value, String> {
    match yaml {
        serde_yaml::Value::Null => Ok(Value::Null),
        serde_yaml::Value::Bool(b) => Ok(Value::Bool(*b)),
        serde_yaml::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(Value::Number(serde_json::Number::from(i)))
            } else if let Some(u) = n.as_u64() {
                Ok(Value::Number(serde_json::Number::from(u)))
            } else if let Some(f) = n.as_f64() {
                serde_json::Number::from_f64(f)
                    .map(Value::Number)
                    .ok_or_else(|| format!("cannot represent float {f} in JSON"))
            } else {
                Err(format!("unsupported YAML number: {n:?}"))
            }
        }
        serde_yaml::Value::String(s) => Ok(Value::String(s.clone())),
        serde_yaml::Value::Sequence(seq) => {
            let items: std::result::Result<Vec<Value>, String> =
                seq.iter().map(yaml_to_json).collect();
            Ok(Value::Array(items?))
        }
        serde_yaml::Value::Mapping(map) => {
            let mut json_map = serde_json::Map::new();
            for (key, value) in map {
                let key = match key {
                    serde_yaml::Value::String(s) => s.clone(),
                    serde_yaml::Value::Number(n) => n.to_string(),
                    serde_yaml::Value::Bool(b) => b.to_string(),
                    other => return Err(format!("unsupported YAML map key: {other:?}")),
                };
                json_map.insert(key, yaml_to_json(value)?);
            }
            Ok(Value::Object(json_map))
        }
        serde_yaml::Value::Tagged(tagged) => yaml_to_json(&tagged.value),
    }
}
