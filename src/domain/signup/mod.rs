//! Signup domain
//!
//! Form state, password criteria, submit-time validation and the signup view
//! state machine.

mod criteria;
mod form;
mod session;
mod validation;

pub use criteria::{Criterion, PasswordCriteria, MIN_PASSWORD_LENGTH, PASSWORD_SYMBOLS};
pub use form::{FormField, SignupForm};
pub use session::{SessionError, SignupPhase, SignupSession, SubmitOutcome};
pub use validation::{is_email_like, validate_form, FieldError, FieldErrors, FormValidation};
