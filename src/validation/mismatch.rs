use crate::models::{ErrorRecord, MismatchEntry, MismatchKind, MismatchView};
use serde_json::Value;

/// Project a list of engine error records onto a deep copy of the data.
///
/// Each error's location is overwritten in the copy by an annotated string
/// describing the mismatch. Writes are destructive and applied in engine
/// order, so when two errors target the same path the later one wins. The
/// caller's data is never touched.
pub fn project_mismatches(data: &Value, errors: &[ErrorRecord]) -> MismatchView {
    let mut annotated = data.clone();
    let mut entries = Vec::with_capacity(errors.len());

    for record in errors {
        let mut segments = pointer_segments(&record.instance_path);

        let entry = if record.keyword == "required" {
            let property = record
                .missing_property
                .clone()
                .unwrap_or_default();
            segments.push(property.clone());
            MismatchEntry {
                path: segments.join("."),
                kind: MismatchKind::MissingProperty,
                annotation: format!("✗ Missing property '{property}'"),
            }
        } else {
            let annotation = match value_at(data, &segments) {
                Some(value) => format!("✗ {}, received {}", record.message, value),
                None => format!("✗ {}", record.message),
            }
            .replace('"', "'");
            MismatchEntry {
                path: segments.join("."),
                kind: MismatchKind::ValueMismatch,
                annotation,
            }
        };

        write_at(&mut annotated, &segments, Value::String(entry.annotation.clone()));
        entries.push(entry);
    }

    MismatchView { annotated, entries }
}

/// Split a JSON-pointer-like instance path into its segments, decoding the
/// `~1` and `~0` escapes. An empty path denotes the document root.
fn pointer_segments(instance_path: &str) -> Vec<String> {
    instance_path
        .split('/')
        .skip(1)
        .map(|segment| segment.replace("~1", "/").replace("~0", "~"))
        .collect()
}

/// Read the value at `segments` from a value tree.
fn value_at<'a>(node: &'a Value, segments: &[String]) -> Option<&'a Value> {
    match segments {
        [] => Some(node),
        [head, rest @ ..] => match node {
            Value::Array(items) => value_at(items.get(head.parse::<usize>().ok()?)?, rest),
            Value::Object(map) => value_at(map.get(head)?, rest),
            _ => None,
        },
    }
}

/// Overwrite the value at `segments`, descending through arrays by index
/// and objects by key. The final object key is inserted when absent (the
/// missing-property case); an unresolvable path is left alone.
fn write_at(node: &mut Value, segments: &[String], replacement: Value) {
    match segments {
        [] => *node = replacement,
        [head, rest @ ..] => match node {
            Value::Array(items) => {
                if let Some(child) = head.parse::<usize>().ok().and_then(|i| items.get_mut(i)) {
                    write_at(child, rest, replacement);
                }
            }
            Value::Object(map) => {
                if rest.is_empty() {
                    map.insert(head.clone(), replacement);
                } else if let Some(child) = map.get_mut(head) {
                    write_at(child, rest, replacement);
                }
            }
            _ => {}
        },
    }
}
