//! Submit-time validation of the whole signup form

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{de, Deserialize, Deserializer, Serialize};
use thiserror::Error;

use super::criteria::PasswordCriteria;
use super::form::{FormField, SignupForm};
use crate::domain::DomainError;

/// Loose email shape: something@something.something, unanchored
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\S+@\S+\.\S+").unwrap());

/// A validation finding attached to one form field
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum FieldError {
    #[error("Email is required")]
    EmailRequired,

    #[error("Email is invalid")]
    EmailInvalid,

    #[error("Username is required")]
    UsernameRequired,

    #[error("Password is required")]
    PasswordRequired,

    #[error("Password does not meet all criteria")]
    PasswordCriteriaUnmet,

    #[error("Please confirm your password")]
    ConfirmPasswordRequired,

    #[error("Passwords do not match")]
    PasswordMismatch,
}

impl FieldError {
    const ALL: [FieldError; 7] = [
        FieldError::EmailRequired,
        FieldError::EmailInvalid,
        FieldError::UsernameRequired,
        FieldError::PasswordRequired,
        FieldError::PasswordCriteriaUnmet,
        FieldError::ConfirmPasswordRequired,
        FieldError::PasswordMismatch,
    ];

    /// The field this finding belongs to
    pub fn field(&self) -> FormField {
        match self {
            Self::EmailRequired | Self::EmailInvalid => FormField::Email,
            Self::UsernameRequired => FormField::Username,
            Self::PasswordRequired | Self::PasswordCriteriaUnmet => FormField::Password,
            Self::ConfirmPasswordRequired | Self::PasswordMismatch => FormField::ConfirmPassword,
        }
    }

    /// True for "field is empty" findings, false for format/match findings
    pub fn is_required(&self) -> bool {
        matches!(
            self,
            Self::EmailRequired
                | Self::UsernameRequired
                | Self::PasswordRequired
                | Self::ConfirmPasswordRequired
        )
    }

    /// Look a finding up by its display message
    pub fn from_message(message: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|e| e.to_string() == message)
    }
}

impl TryFrom<String> for FieldError {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_message(&value)
            .ok_or_else(|| DomainError::validation(format!("Unknown field error: {}", value)))
    }
}

impl From<FieldError> for String {
    fn from(error: FieldError) -> Self {
        error.to_string()
    }
}

/// Sparse map of field to finding. A missing key means the field is fine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<FormField, FieldError>);

impl<'de> Deserialize<'de> for FieldErrors {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = BTreeMap::<FormField, FieldError>::deserialize(deserializer)?;

        if let Some((field, error)) = raw.iter().find(|(field, error)| error.field() != **field) {
            return Err(de::Error::custom(format!(
                "'{}' does not apply to field {}",
                error, field
            )));
        }

        Ok(Self(raw))
    }
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: FormField) -> Option<FieldError> {
        self.0.get(&field).copied()
    }

    pub fn contains(&self, field: FormField) -> bool {
        self.0.contains_key(&field)
    }

    /// Record a finding under the field it belongs to
    pub fn insert(&mut self, error: FieldError) {
        self.0.insert(error.field(), error);
    }

    /// Drop the finding for one field, returning it if there was one
    pub fn clear(&mut self, field: FormField) -> Option<FieldError> {
        self.0.remove(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FormField, FieldError)> + '_ {
        self.0.iter().map(|(field, error)| (*field, *error))
    }
}

impl FromIterator<FieldError> for FieldErrors {
    fn from_iter<I: IntoIterator<Item = FieldError>>(iter: I) -> Self {
        let mut errors = Self::new();
        for error in iter {
            errors.insert(error);
        }
        errors
    }
}

/// Outcome of a full-form validation pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormValidation {
    pub errors: FieldErrors,
}

impl FormValidation {
    /// No findings, navigation may proceed
    pub fn is_submittable(&self) -> bool {
        self.errors.is_empty()
    }
}

pub fn is_email_like(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

fn validate_email(email: &str) -> Option<FieldError> {
    if email.trim().is_empty() {
        Some(FieldError::EmailRequired)
    } else if !is_email_like(email) {
        Some(FieldError::EmailInvalid)
    } else {
        None
    }
}

fn validate_username(username: &str) -> Option<FieldError> {
    username
        .trim()
        .is_empty()
        .then_some(FieldError::UsernameRequired)
}

fn validate_password(password: &str, username: &str) -> Option<FieldError> {
    if password.is_empty() {
        Some(FieldError::PasswordRequired)
    } else if !PasswordCriteria::evaluate(password, username).all_met() {
        Some(FieldError::PasswordCriteriaUnmet)
    } else {
        None
    }
}

fn validate_confirmation(password: &str, confirm_password: &str) -> Option<FieldError> {
    if confirm_password.is_empty() {
        Some(FieldError::ConfirmPasswordRequired)
    } else if confirm_password != password {
        Some(FieldError::PasswordMismatch)
    } else {
        None
    }
}

/// Validate every field of the form
///
/// Rules:
/// - email: required after trimming, then must look like `x@y.z`
/// - username: required after trimming
/// - password: required, then must meet every password criterion
/// - confirmPassword: required, then must equal the password
pub fn validate_form(form: &SignupForm) -> FormValidation {
    let errors = [
        validate_email(&form.email),
        validate_username(&form.username),
        validate_password(&form.password, &form.username),
        validate_confirmation(&form.password, &form.confirm_password),
    ]
    .into_iter()
    .flatten()
    .collect();

    FormValidation { errors }
}
