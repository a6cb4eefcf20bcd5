//! Request and response types for the JSON API

pub mod error;
pub mod json;
pub mod signup;

pub use error::{ApiError, ApiErrorResponse};
pub use json::Json;
pub use signup::{EditRequest, SessionView, ValidationResponse};
