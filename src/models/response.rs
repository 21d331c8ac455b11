use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Captured API response envelope: the shape produced by HTTP clients and
/// test runners. Validation consumes `body`; `status` and `headers` are
/// carried for reporting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse {
    /// HTTP status code of the response
    pub status: u16,

    /// Response headers
    #[serde(default)]
    pub headers: HashMap<String, String>,

    /// Response body as parsed JSON
    pub body: Value,
}
