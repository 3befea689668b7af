pub mod extractor;
pub mod parameter_error_handler;

pub use extractor::SafeCourseIdI64;
pub use parameter_error_handler::{json_config, json_error_handler};
