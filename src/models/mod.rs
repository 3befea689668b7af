pub mod auth;
pub mod common;
pub mod courses;
pub mod users;

pub use common::ErrorResponse;

