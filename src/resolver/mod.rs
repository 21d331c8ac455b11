pub mod dialect;
pub mod locator;

pub use dialect::{SchemaSource, SpecDialect, SpecDocument};
pub use locator::resolve_response_schema;
