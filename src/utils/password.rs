use crate::types::error::AppError;
use crate::utils::token::{encrypt, verify};

pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Length is counted in characters, not bytes. A password made only of
/// whitespace counts as blank, same as on the token endpoint.
pub fn validate_password(password: &str) -> Result<(), AppError> {
    if password.trim().is_empty() {
        return Err(AppError::Validation("password may not be blank".into()));
    }
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(AppError::Validation(format!(
            "password must be at least {MIN_PASSWORD_LENGTH} characters"
        )));
    }
    Ok(())
}

pub fn hash_password(password: &str) -> Result<String, AppError> {
    encrypt(password).map_err(|e| AppError::Internal(format!("hash password: {e}")))
}

/// A malformed stored hash counts as a mismatch.
pub fn verify_password(password: &str, hash: &str) -> bool {
    verify(password, hash).unwrap_or(false)
}
