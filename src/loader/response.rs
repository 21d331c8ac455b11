use crate::error::{RespecError, Result};
use crate::models::ApiResponse;
use std::fs;
use std::path::Path;

/// Load a captured API response envelope (status/headers/body) from a
/// JSON file.
pub fn load_response<P: AsRef<Path>>(path: P) -> Result<ApiResponse> {
    let path = path.as_ref();

    let content = fs::read_to_string(path).map_err(|e| {
        RespecError::DocumentLoadError(format!("Failed to read file {}: {}", path.display(), e))
    })?;

    serde_json::from_str(&content).map_err(|e| {
        RespecError::DocumentLoadError(format!(
            "Failed to parse response envelope {}: {}",
            path.display(),
            e
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_response_envelope() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(br#"{"status": 200, "body": {"id": 7}}"#).unwrap();

        let response = load_response(file.path()).unwrap();
        assert_eq!(response.status, 200);
        assert_eq!(response.body, json!({"id": 7}));
    }

    #[test]
    fn test_load_response_missing_body() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(br#"{"status": 200}"#).unwrap();
        assert!(load_response(file.path()).is_err());
    }
}
