//! Login form validation.
//!
//! Runs before any storage or network work; failures are shown inline and
//! never reach the session manager.

use regex::Regex;
use thiserror::Error;

use super::Credentials;

const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";
const MIN_PASSWORD_LEN: usize = 3;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please fill in all fields")]
    MissingFields,

    #[error("Please enter a valid email address")]
    InvalidEmail,

    #[error("Password must be at least 3 characters long")]
    PasswordTooShort,
}

fn is_valid_email(email: &str) -> bool {
    Regex::new(EMAIL_PATTERN)
        .map(|re| re.is_match(email))
        .unwrap_or(false)
}

/// Check the raw form values and build the credentials to submit.
///
/// The email is trimmed; the password is passed through untouched.
pub fn validate_login_form(email: &str, password: &str) -> Result<Credentials, ValidationError> {
    let email = email.trim();

    if email.is_empty() || password.trim().is_empty() {
        return Err(ValidationError::MissingFields);
    }
    if !is_valid_email(email) {
        return Err(ValidationError::InvalidEmail);
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::PasswordTooShort);
    }

    Ok(Credentials::new(email, password))
}
