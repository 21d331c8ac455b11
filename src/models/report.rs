use serde::Serialize;
use serde_json::Value;

/// One validation error as reported by the schema engine.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorRecord {
    /// JSON-pointer-like location of the error in the instance
    /// (slash-separated, empty for the document root)
    pub instance_path: String,

    /// Schema keyword that failed (e.g. "type", "required", "format")
    pub keyword: String,

    /// Human-readable description from the engine
    pub message: String,

    /// Name of the missing property, for "required" errors only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub missing_property: Option<String>,
}

/// How a single error is classified for display purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MismatchKind {
    /// A required property is absent from the data
    MissingProperty,
    /// A present value does not satisfy the schema
    ValueMismatch,
}

impl std::fmt::Display for MismatchKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MismatchKind::MissingProperty => write!(f, "missing property"),
            MismatchKind::ValueMismatch => write!(f, "value mismatch"),
        }
    }
}

/// One annotated location in the mismatch view.
#[derive(Debug, Clone, Serialize)]
pub struct MismatchEntry {
    /// Dotted target path in the data ("items.0.name"; the property name
    /// alone for a missing property at the root)
    pub path: String,

    pub kind: MismatchKind,

    /// The annotation string written into the view at `path`
    pub annotation: String,
}

/// A deep copy of the validated data with every erroring location replaced
/// in place by its annotation. A debugging view, not a merge: annotations
/// overwrite the original values.
#[derive(Debug, Clone, Serialize)]
pub struct MismatchView {
    pub annotated: Value,
    pub entries: Vec<MismatchEntry>,
}

/// Outcome of one validation call.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    pub valid: bool,

    /// Engine error records, in engine order; None when valid
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<ErrorRecord>>,

    /// Annotated view of the data; None when valid
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mismatch: Option<MismatchView>,
}

impl ValidationReport {
    pub fn passed() -> Self {
        Self {
            valid: true,
            errors: None,
            mismatch: None,
        }
    }

    pub fn failed(errors: Vec<ErrorRecord>, mismatch: MismatchView) -> Self {
        Self {
            valid: false,
            errors: Some(errors),
            mismatch: Some(mismatch),
        }
    }
}
