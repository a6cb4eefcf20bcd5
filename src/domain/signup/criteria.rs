//! Password strength criteria
//!
//! Five independent checks derived from the password and the username. The
//! evaluation is a pure function of its two inputs and is recomputed on every
//! change; nothing is cached.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// Minimum number of characters a password must have
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Punctuation accepted by the symbol check
pub const PASSWORD_SYMBOLS: &str = r#"!@#$%^&*()_+-=[]{};':"\|,.<>/?"#;

static UPPERCASE_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Z]").unwrap());

static DIGIT_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]").unwrap());

static SYMBOL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[!@#$%^&*()_+\-=\[\]{};':"\\|,.<>/?]"#).unwrap());

/// A single password requirement shown in the checklist
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Criterion {
    MinLength,
    HasUppercase,
    HasSymbol,
    HasDigit,
    NotSameAsUsername,
}

impl Criterion {
    pub const ALL: [Criterion; 5] = [
        Criterion::MinLength,
        Criterion::HasUppercase,
        Criterion::HasSymbol,
        Criterion::HasDigit,
        Criterion::NotSameAsUsername,
    ];

    /// Identifier used as the JSON key and the checklist item id
    pub fn key(&self) -> &'static str {
        match self {
            Self::MinLength => "minLength",
            Self::HasUppercase => "hasUppercase",
            Self::HasSymbol => "hasSymbol",
            Self::HasDigit => "hasDigit",
            Self::NotSameAsUsername => "notSameAsUsername",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::MinLength => "At least 8 characters",
            Self::HasUppercase => "At least one uppercase letter",
            Self::HasSymbol => "At least one symbol",
            Self::HasDigit => "At least one number",
            Self::NotSameAsUsername => "Different from your username",
        }
    }
}

/// Result of evaluating every criterion against a password
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordCriteria {
    pub min_length: bool,
    pub has_uppercase: bool,
    pub has_symbol: bool,
    pub has_digit: bool,
    pub not_same_as_username: bool,
}

impl PasswordCriteria {
    /// Evaluate all criteria for `password` given the current `username`
    pub fn evaluate(password: &str, username: &str) -> Self {
        Self {
            min_length: password.chars().count() >= MIN_PASSWORD_LENGTH,
            has_uppercase: UPPERCASE_PATTERN.is_match(password),
            has_symbol: SYMBOL_PATTERN.is_match(password),
            has_digit: DIGIT_PATTERN.is_match(password),
            not_same_as_username: !password.is_empty()
                && !username.is_empty()
                && password != username,
        }
    }

    pub fn is_met(&self, criterion: Criterion) -> bool {
        match criterion {
            Criterion::MinLength => self.min_length,
            Criterion::HasUppercase => self.has_uppercase,
            Criterion::HasSymbol => self.has_symbol,
            Criterion::HasDigit => self.has_digit,
            Criterion::NotSameAsUsername => self.not_same_as_username,
        }
    }

    /// Overall validity: every criterion holds
    pub fn all_met(&self) -> bool {
        Criterion::ALL.iter().all(|c| self.is_met(*c))
    }

    /// Criteria paired with their state, in checklist order
    pub fn checklist(&self) -> impl Iterator<Item = (Criterion, bool)> + '_ {
        Criterion::ALL.into_iter().map(move |c| (c, self.is_met(c)))
    }
}
