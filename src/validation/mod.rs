pub mod engine;
pub mod mismatch;
pub mod orchestrator;

pub use engine::{EngineVerdict, ValidationEngine};
pub use mismatch::project_mismatches;
pub use orchestrator::{ResponseValidator, validate_response};
