//! Signup form state

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// The four inputs of the signup form
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormField {
    Email,
    Username,
    Password,
    ConfirmPassword,
}

impl FormField {
    /// All fields in render order
    pub const ALL: [FormField; 4] = [
        FormField::Email,
        FormField::Username,
        FormField::Password,
        FormField::ConfirmPassword,
    ];

    /// Name used for the HTML input and the JSON key
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Username => "username",
            Self::Password => "password",
            Self::ConfirmPassword => "confirmPassword",
        }
    }

    /// Human label shown next to the input
    pub fn label(&self) -> &'static str {
        match self {
            Self::Email => "Email",
            Self::Username => "Username",
            Self::Password => "Password",
            Self::ConfirmPassword => "Confirm Password",
        }
    }

    /// HTML input type
    pub fn input_type(&self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Username => "text",
            Self::Password | Self::ConfirmPassword => "password",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormField {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| DomainError::unknown_field(s))
    }
}

/// Values typed into the signup form. Recreated empty on every mount.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SignupForm {
    pub email: String,
    pub username: String,
    pub password: String,
    pub confirm_password: String,
}

impl SignupForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Email => &self.email,
            FormField::Username => &self.username,
            FormField::Password => &self.password,
            FormField::ConfirmPassword => &self.confirm_password,
        }
    }

    /// Replace a single field's value
    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();

        match field {
            FormField::Email => self.email = value,
            FormField::Username => self.username = value,
            FormField::Password => self.password = value,
            FormField::ConfirmPassword => self.confirm_password = value,
        }
    }
}
