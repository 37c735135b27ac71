//! Client-side validation rules for the login form

use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

use crate::state::Alert;

/// Local part, one `@`, then a domain with at least one dot. No whitespace anywhere.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles")
});

/// Title shared by every validation alert
pub const VALIDATION_ALERT_TITLE: &str = "Error";

/// Reasons a login submission is rejected, in priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill all the fields and accept the terms.")]
    MissingField,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
}

impl ValidationError {
    /// The modal alert shown for this failure
    pub fn alert(&self) -> Alert {
        Alert::new(VALIDATION_ALERT_TITLE, self.to_string())
    }

    /// Short rule name for log output
    pub fn rule(&self) -> &'static str {
        match self {
            Self::MissingField => "missing_field",
            Self::InvalidEmail => "invalid_email",
        }
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Check the raw form values. Missing fields are reported before format problems.
pub fn validate_login(
    email: &str,
    password: &str,
    terms_accepted: bool,
) -> Result<(), ValidationError> {
    if email.is_empty() || password.is_empty() || !terms_accepted {
        return Err(ValidationError::MissingField);
    }
    if !is_valid_email(email) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(())
}
