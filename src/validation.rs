//! Client-side form checks run before any request is sent.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Email not provided")]
    MissingEmail,

    #[error("Password not provided")]
    MissingPassword,

    #[error("username not provided")]
    MissingUsername,

    #[error("Confirm Password not provided")]
    MissingConfirmPassword,

    #[error("Passwords do not match")]
    PasswordMismatch,

    /// Generic required field (post title, group name, ...)
    #[error("{0} not provided")]
    Missing(&'static str),
}

pub fn validate_login(email: &str, password: &str) -> Result<(), FormError> {
    if email.is_empty() {
        return Err(FormError::MissingEmail);
    }
    if password.is_empty() {
        return Err(FormError::MissingPassword);
    }
    Ok(())
}

/// Checks run in field order, so the first missing field wins.
pub fn validate_registration(
    username: &str,
    email: &str,
    password: &str,
    confirm_password: &str,
) -> Result<(), FormError> {
    if username.is_empty() {
        return Err(FormError::MissingUsername);
    }
    if email.is_empty() {
        return Err(FormError::MissingEmail);
    }
    if password.is_empty() {
        return Err(FormError::MissingPassword);
    }
    if confirm_password.is_empty() {
        return Err(FormError::MissingConfirmPassword);
    }
    if password != confirm_password {
        return Err(FormError::PasswordMismatch);
    }
    Ok(())
}

pub fn require(field: &'static str, value: &str) -> Result<(), FormError> {
    if value.trim().is_empty() {
        return Err(FormError::Missing(field));
    }
    Ok(())
}
