//! Non-functional authentication stubs.
//!
//! The login check gates the UI against one fixed, pre-known pair and the
//! registration check only validates field presence. Neither is a
//! security mechanism and nothing is ever stored.

use thiserror::Error;

/// The one accepted demo credential pair.
const VALID_EMAIL: &str = "rick@sanchez.com";
const VALID_PASSWORD: &str = "wubba123";

/// True iff both fields exactly equal the fixed demo pair.
pub fn validate_credentials(email: &str, password: &str) -> bool {
    email == VALID_EMAIL && password == VALID_PASSWORD
}

/// Input to the simulated registration.
#[derive(Debug, Clone)]
pub struct RegistrationForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// Why a registration form was rejected.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RegistrationIssue {
    #[error("all fields are required")]
    MissingFields,
    #[error("passwords do not match")]
    PasswordMismatch,
}

/// Presence check on every field, then password confirmation. A passing
/// form goes nowhere; the caller just logs it.
pub fn validate_registration(form: &RegistrationForm) -> Result<(), RegistrationIssue> {
    if form.name.is_empty()
        || form.email.is_empty()
        || form.password.is_empty()
        || form.confirm_password.is_empty()
    {
        return Err(RegistrationIssue::MissingFields);
    }

    if form.password != form.confirm_password {
        return Err(RegistrationIssue::PasswordMismatch);
    }

    Ok(())
}
