//! Signup view state machine
//!
//! A session starts in [`SignupPhase::Editing`] with an empty form. Edits
//! update one field and optimistically drop that field's error without
//! re-validating. Submitting runs the full validator: a clean form moves the
//! session to [`SignupPhase::Submitted`] and yields the dashboard as the next
//! route, otherwise the findings replace the error state and editing goes on.

use thiserror::Error;
use tracing::info;

use super::criteria::PasswordCriteria;
use super::form::{FormField, SignupForm};
use super::validation::{validate_form, FieldErrors};
use crate::domain::navigation::Route;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    #[error("Signup has already been submitted")]
    AlreadySubmitted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SignupPhase {
    #[default]
    Editing,
    Submitted,
}

/// Result of a submit attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The form was clean; the captured values and where to go next
    Accepted { submission: SignupForm, redirect: Route },
    /// Findings now stored on the session
    Rejected { errors: FieldErrors },
}

impl SubmitOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }
}

/// State owned by one signup view instance
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupSession {
    form: SignupForm,
    errors: FieldErrors,
    phase: SignupPhase,
}

impl SignupSession {
    /// Fresh session with an empty form
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild an editing session from state held by the view
    pub fn restore(form: SignupForm, errors: FieldErrors) -> Self {
        Self {
            form,
            errors,
            phase: SignupPhase::Editing,
        }
    }

    pub fn form(&self) -> &SignupForm {
        &self.form
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn phase(&self) -> SignupPhase {
        self.phase
    }

    /// Password criteria for the current password and username
    pub fn criteria(&self) -> PasswordCriteria {
        PasswordCriteria::evaluate(&self.form.password, &self.form.username)
    }

    /// Whether the submit control should be enabled
    pub fn can_submit(&self) -> bool {
        self.phase == SignupPhase::Editing
            && self.criteria().all_met()
            && self.form.password == self.form.confirm_password
    }

    /// Apply a keystroke-level change to one field
    pub fn edit(&mut self, field: FormField, value: impl Into<String>) -> Result<(), SessionError> {
        self.ensure_editing()?;

        self.form.set(field, value);
        self.errors.clear(field);

        Ok(())
    }

    /// Validate the whole form and either finish or store the findings
    pub fn submit(&mut self) -> Result<SubmitOutcome, SessionError> {
        self.ensure_editing()?;

        let validation = validate_form(&self.form);
        self.errors = validation.errors.clone();

        if !validation.is_submittable() {
            return Ok(SubmitOutcome::Rejected {
                errors: validation.errors,
            });
        }

        info!(
            email = %self.form.email,
            username = %self.form.username,
            password = "[REDACTED]",
            confirm_password = "[REDACTED]",
            "Signup submitted"
        );

        self.phase = SignupPhase::Submitted;

        Ok(SubmitOutcome::Accepted {
            submission: self.form.clone(),
            redirect: Route::Dashboard,
        })
    }

    fn ensure_editing(&self) -> Result<(), SessionError> {
        match self.phase {
            SignupPhase::Editing => Ok(()),
            SignupPhase::Submitted => Err(SessionError::AlreadySubmitted),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::signup::FieldError;

    fn fill(session: &mut SignupSession, email: &str, username: &str, password: &str, confirm: &str) {
        session.edit(FormField::Email, email).unwrap();
        session.edit(FormField::Username, username).unwrap();
        session.edit(FormField::Password, password).unwrap();
        session.edit(FormField::ConfirmPassword, confirm).unwrap();
    }

    #[test]
    fn test_new_session_is_empty_and_editing() {
        let session = SignupSession::new();

        assert_eq!(session.form(), &SignupForm::new());
        assert!(session.errors().is_empty());
        assert_eq!(session.phase(), SignupPhase::Editing);
        assert!(!session.can_submit());
    }

    #[test]
    fn test_empty_submit_reports_all_fields() {
        let mut session = SignupSession::new();

        let outcome = session.submit().unwrap();

        match outcome {
            SubmitOutcome::Rejected { errors } => {
                assert_eq!(errors.len(), 4);
                for field in FormField::ALL {
                    assert!(errors.contains(field), "missing error for {}", field);
                }
            }
            other => panic!("expected rejection, got {:?}", other),
        }
        assert_eq!(session.phase(), SignupPhase::Editing);
        assert_eq!(session.errors().len(), 4);
    }

    #[test]
    fn test_valid_submit_navigates_to_dashboard() {
        let mut session = SignupSession::new();
        fill(&mut session, "a@b.com", "alice", "Abcdef1!", "Abcdef1!");

        assert!(session.criteria().all_met());
        assert!(session.can_submit());

        let outcome = session.submit().unwrap();

        assert_eq!(
            outcome,
            SubmitOutcome::Accepted {
                submission: SignupForm {
                    email: "a@b.com".to_string(),
                    username: "alice".to_string(),
                    password: "Abcdef1!".to_string(),
                    confirm_password: "Abcdef1!".to_string(),
                },
                redirect: Route::Dashboard,
            }
        );
        assert!(session.errors().is_empty());
        assert_eq!(session.phase(), SignupPhase::Submitted);
    }

    #[test]
    fn test_submitted_session_rejects_further_transitions() {
        let mut session = SignupSession::new();
        fill(&mut session, "a@b.com", "alice", "Abcdef1!", "Abcdef1!");
        session.submit().unwrap();

        assert_eq!(
            session.edit(FormField::Email, "x@y.z"),
            Err(SessionError::AlreadySubmitted)
        );
        assert_eq!(session.submit(), Err(SessionError::AlreadySubmitted));
        assert!(!session.can_submit());
        assert_eq!(session.form().email, "a@b.com");
    }

    #[test]
    fn test_edit_clears_only_that_fields_error() {
        let mut session = SignupSession::new();
        session.submit().unwrap();

        session.edit(FormField::Username, "a").unwrap();

        assert!(!session.errors().contains(FormField::Username));
        assert_eq!(session.errors().len(), 3);
        assert_eq!(
            session.errors().get(FormField::Email),
            Some(FieldError::EmailRequired)
        );
        assert!(session.errors().contains(FormField::Password));
        assert!(session.errors().contains(FormField::ConfirmPassword));
    }

    #[test]
    fn test_edit_does_not_revalidate() {
        let mut session = SignupSession::new();
        session.submit().unwrap();

        // Still invalid, but the error stays cleared until the next submit
        session.edit(FormField::Email, "not-an-email").unwrap();
        assert!(!session.errors().contains(FormField::Email));

        // Editing a field without an error leaves everything else alone
        let before = session.errors().clone();
        session.edit(FormField::Email, "still-not-an-email").unwrap();
        assert_eq!(session.errors(), &before);
    }

    #[test]
    fn test_resubmit_replaces_errors() {
        let mut session = SignupSession::new();
        session.submit().unwrap();

        fill(&mut session, "a@b.com", "alice", "weak", "weak");
        let outcome = session.submit().unwrap();

        assert!(!outcome.is_accepted());
        assert_eq!(session.errors().len(), 1);
        assert_eq!(
            session.errors().get(FormField::Password),
            Some(FieldError::PasswordCriteriaUnmet)
        );
    }

    #[test]
    fn test_password_equal_to_username_disables_submit() {
        let mut session = SignupSession::new();
        fill(&mut session, "a@b.com", "alice", "alice", "alice");

        assert!(!session.criteria().not_same_as_username);
        assert!(!session.criteria().all_met());
        assert!(!session.can_submit());
    }

    #[test]
    fn test_mismatched_confirmation_blocks_submit() {
        let mut session = SignupSession::new();
        fill(&mut session, "a@b.com", "alice", "Abcdef1!", "Abcdef2!");

        assert!(session.criteria().all_met());
        assert!(!session.can_submit());

        let outcome = session.submit().unwrap();
        assert_eq!(
            outcome,
            SubmitOutcome::Rejected {
                errors: [FieldError::PasswordMismatch].into_iter().collect(),
            }
        );
    }

    #[test]
    fn test_restore_keeps_errors() {
        let errors: FieldErrors = [FieldError::EmailInvalid].into_iter().collect();
        let session = SignupSession::restore(SignupForm::new(), errors.clone());

        assert_eq!(session.errors(), &errors);
        assert_eq!(session.phase(), SignupPhase::Editing);
    }
}
