pub mod descriptor;
pub mod report;
pub mod response;

pub use descriptor::PathDescriptor;
pub use report::{ErrorRecord, MismatchEntry, MismatchKind, MismatchView, ValidationReport};
pub use response::ApiResponse;
