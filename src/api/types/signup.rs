//! Signup view-state payloads

use serde::{Deserialize, Serialize};

use crate::domain::signup::{FieldErrors, PasswordCriteria, SignupForm, SignupSession};

/// One edit applied to the view state held by the page
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditRequest {
    #[serde(default)]
    pub form: SignupForm,
    #[serde(default)]
    pub errors: FieldErrors,
    /// Name of the edited input, e.g. `confirmPassword`
    pub field: String,
    #[serde(default)]
    pub value: String,
}

/// Everything the page needs to re-render the signup view
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionView {
    pub form: SignupForm,
    pub errors: FieldErrors,
    pub criteria: PasswordCriteria,
    pub password_valid: bool,
    pub can_submit: bool,
}

impl From<&SignupSession> for SessionView {
    fn from(session: &SignupSession) -> Self {
        let criteria = session.criteria();

        Self {
            form: session.form().clone(),
            errors: session.errors().clone(),
            criteria,
            password_valid: criteria.all_met(),
            can_submit: session.can_submit(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResponse {
    pub submittable: bool,
    pub errors: FieldErrors,
}
