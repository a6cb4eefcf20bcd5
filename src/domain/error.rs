use thiserror::Error;

use super::signup::SessionError;

/// Core domain errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Unknown form field: {name}")]
    UnknownField { name: String },

    #[error(transparent)]
    Session(#[from] SessionError),
}

impl DomainError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn unknown_field(name: impl Into<String>) -> Self {
        Self::UnknownField { name: name.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let error = DomainError::validation("Invalid input");
        assert_eq!(error.to_string(), "Validation error: Invalid input");
    }

    #[test]
    fn test_unknown_field_error() {
        let error = DomainError::unknown_field("phone");
        assert_eq!(error.to_string(), "Unknown form field: phone");
    }

    #[test]
    fn test_session_error_is_transparent() {
        let error: DomainError = SessionError::AlreadySubmitted.into();
        assert_eq!(error.to_string(), "Signup has already been submitted");
    }
}
