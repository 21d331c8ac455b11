use serde::{Deserialize, Serialize};

/// Location of one response inside a spec document: endpoint, HTTP method
/// and status code. Only consulted when the schema argument is a full spec
/// document; ignored for plain JSON Schemas.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathDescriptor {
    /// Endpoint path as keyed in the document (e.g. "/users/{id}")
    pub endpoint: Option<String>,

    /// HTTP method, case-insensitive (defaults to "GET")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,

    /// Response status code (defaults to 200)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
}

impl PathDescriptor {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: Some(endpoint.into()),
            method: None,
            status: None,
        }
    }

    pub fn with_method(mut self, method: impl Into<String>) -> Self {
        self.method = Some(method.into());
        self
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    /// Return a copy with the standard defaults filled in: method "GET",
    /// status 200. The caller's descriptor is left untouched.
    pub fn with_defaults(&self) -> Self {
        Self {
            endpoint: self.endpoint.clone(),
            method: Some(
                self.method
                    .clone()
                    .unwrap_or_else(|| "GET".to_string()),
            ),
            status: Some(self.status.unwrap_or(200)),
        }
    }
}
