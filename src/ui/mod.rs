//! Server-rendered views
//!
//! - `/` redirects to the signup view
//! - `/signup` shows a fresh form; posting it validates and either moves on
//!   to the dashboard or re-renders the form with errors
//! - `/dashboard` is a static welcome page

mod dashboard;
mod layout;
mod not_found;
mod signup;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    routing::get,
    Form, Router,
};
use maud::Markup;
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::ApiError;
use crate::domain::signup::{FieldErrors, SignupForm, SignupSession, SubmitOutcome};
use crate::domain::{DomainError, Route};
use crate::infrastructure::observability::record_signup_submission;

/// Routes for the HTML views
pub fn create_pages_router() -> Router<AppState> {
    Router::new()
        .route(Route::Root.path(), get(root))
        .route(Route::Signup.path(), get(signup_page).post(submit_signup))
        .route(Route::Dashboard.path(), get(dashboard_page))
}

/// GET / - default route
pub async fn root() -> Redirect {
    Redirect::to(Route::Root.resolve().path())
}

/// GET /signup - a fresh, empty signup view
pub async fn signup_page(State(state): State<AppState>) -> Markup {
    signup::render(&state.site, &SignupSession::new())
}

/// POST /signup - submit the form
pub async fn submit_signup(
    State(state): State<AppState>,
    Form(form): Form<SignupForm>,
) -> Response {
    let mut session = SignupSession::restore(form, FieldErrors::new());

    match session.submit() {
        Ok(SubmitOutcome::Accepted { redirect, .. }) => {
            record_signup_submission(true);
            Redirect::to(redirect.path()).into_response()
        }
        Ok(SubmitOutcome::Rejected { errors }) => {
            record_signup_submission(false);
            let (missing, invalid): (Vec<_>, Vec<_>) =
                errors.iter().partition(|(_, error)| error.is_required());
            debug!(
                missing = ?missing.iter().map(|(field, _)| field.as_str()).collect::<Vec<_>>(),
                invalid = ?invalid.iter().map(|(field, _)| field.as_str()).collect::<Vec<_>>(),
                "Signup form has findings"
            );
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                signup::render(&state.site, &session),
            )
                .into_response()
        }
        Err(e) => ApiError::from(DomainError::from(e)).into_response(),
    }
}

/// GET /dashboard
pub async fn dashboard_page(State(state): State<AppState>) -> Markup {
    dashboard::render(&state.site)
}

/// Fallback for unknown paths
pub async fn not_found_page(State(state): State<AppState>) -> (StatusCode, Markup) {
    (StatusCode::NOT_FOUND, not_found::render(&state.site))
}
