//! Field validation for registration and profile updates.
//!
//! Rules run in a fixed order and stop at the first failure, so a request
//! with several bad fields always reports the same reason.

use axum::http::StatusCode;
use validator::ValidateEmail;

use crate::errors::AppError;

pub const MIN_PASSWORD_LEN: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("The email field is required!")]
    EmailRequired,
    #[error("The email field should be a valid email address!")]
    EmailMalformed,
    #[error("Password at least 8 symbols")]
    PasswordTooShort,
    #[error("Favorite cake should not be empty")]
    CakeEmpty,
    #[error("Favorite cake should be only alphabetic")]
    CakeNotAlphabetic,
    #[error("could not read params")]
    UnreadableBody,
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::new(StatusCode::UNPROCESSABLE_ENTITY, err)
    }
}

/// Implemented by request bodies accepted through `ValidatedJson`.
pub trait ValidateRequest {
    fn validate(&self) -> Result<(), ValidationError>;
}

pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if email.is_empty() {
        return Err(ValidationError::EmailRequired);
    }
    if !email.validate_email() {
        return Err(ValidationError::EmailMalformed);
    }
    Ok(())
}

/// Length is counted in bytes.
pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    if password.len() < MIN_PASSWORD_LEN {
        return Err(ValidationError::PasswordTooShort);
    }
    Ok(())
}

pub fn validate_cake(cake: &str) -> Result<(), ValidationError> {
    if cake.is_empty() {
        return Err(ValidationError::CakeEmpty);
    }
    if !cake.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(ValidationError::CakeNotAlphabetic);
    }
    Ok(())
}

pub fn validate_registration(
    email: &str,
    password: &str,
    favorite_cake: &str,
) -> Result<(), ValidationError> {
    validate_email(email)?;
    validate_password(password)?;
    validate_cake(favorite_cake)
}
