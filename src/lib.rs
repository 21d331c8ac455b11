pub mod cli;
pub mod commands;
pub mod error;
pub mod loader;
pub mod models;
pub mod resolver;
pub mod telemetry;
pub mod validation;

pub use error::{RespecError, Result};
pub use models::{ApiResponse, PathDescriptor, ValidationReport};
pub use validation::{ResponseValidator, validate_response};
