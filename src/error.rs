use thiserror::Error;

#[derive(Error, Debug)]
pub enum RespecError {
    #[error("Schema is required but was not provided")]
    MissingSchema,

    #[error("Missing required parameter: {0}")]
    MissingParameter(String),

    #[error(
        "No response definition found. Tried 'paths.{endpoint}.{method}.responses.{status}' and 'paths.{endpoint}.{method}.responses.default'"
    )]
    ResponseDefinitionNotFound {
        endpoint: String,
        method: String,
        status: u16,
    },

    #[error("Response definition has no schema at '{location}'")]
    SchemaDefinitionNotFound { location: String },

    #[error("Failed to compile schema: {0}")]
    SchemaCompileError(String),

    #[error("Failed to load document: {0}")]
    DocumentLoadError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("YAML parse error: {0}")]
    YamlError(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, RespecError>;
