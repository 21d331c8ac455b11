pub mod document;
pub mod response;

pub use document::load_document;
pub use response::load_response;
