pub mod body;

// Re-export key types for easier usage
pub use body::{Body, BodyError, BodyOptions, to_html};
pub use yg_reader_config::BodyFormat;
