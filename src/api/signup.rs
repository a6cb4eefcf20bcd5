//! View-state endpoints used by the signup page for live feedback
//!
//! The server keeps nothing between calls: each request carries the view's
//! current state, one transition is applied and the new state is returned.

use axum::{routing::post, Router};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{ApiError, EditRequest, Json, SessionView, ValidationResponse};
use crate::domain::signup::{validate_form, FormField, SignupForm, SignupSession};
use crate::domain::DomainError;

pub fn create_signup_router() -> Router<AppState> {
    Router::new()
        .route("/edit", post(edit_field))
        .route("/validate", post(validate))
}

/// Apply one field edit
///
/// POST /api/signup/edit
pub async fn edit_field(Json(request): Json<EditRequest>) -> Result<Json<SessionView>, ApiError> {
    let field: FormField = request.field.parse()?;

    let mut session = SignupSession::restore(request.form, request.errors);
    session
        .edit(field, request.value)
        .map_err(DomainError::from)?;

    debug!(field = %field, errors = session.errors().len(), "Applied signup edit");

    Ok(Json(SessionView::from(&session)))
}

/// Run the submit-time validator without submitting
///
/// POST /api/signup/validate
pub async fn validate(Json(form): Json<SignupForm>) -> Json<ValidationResponse> {
    let validation = validate_form(&form);

    Json(ValidationResponse {
        submittable: validation.is_submittable(),
        errors: validation.errors,
    })
}
