//! Domain layer - view state and validation rules

pub mod error;
pub mod navigation;
pub mod signup;

pub use error::DomainError;
pub use navigation::Route;
pub use signup::{
    FieldError, FieldErrors, FormField, PasswordCriteria, SignupForm, SignupSession,
    SubmitOutcome,
};
