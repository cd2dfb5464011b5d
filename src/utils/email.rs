use crate::types::error::AppError;

pub const MAX_EMAIL_LENGTH: usize = 254;

/// Trims surrounding whitespace and lower-cases the domain part. The local
/// part is left alone since some mail hosts treat it case-sensitively.
pub fn normalize_email(raw: &str) -> String {
    let trimmed = raw.trim();
    match trimmed.rsplit_once('@') {
        Some((local, domain)) => format!("{local}@{}", domain.to_lowercase()),
        None => trimmed.to_string(),
    }
}

pub fn validate_email(email: &str) -> Result<(), AppError> {
    if email.is_empty() {
        return Err(AppError::Validation("email is required".into()));
    }
    if email.len() > MAX_EMAIL_LENGTH {
        return Err(AppError::Validation("email is too long".into()));
    }
    let valid = match email.rsplit_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !local.contains('@')
                && !email.chars().any(char::is_whitespace)
        }
        None => false,
    };
    if !valid {
        return Err(AppError::Validation("enter a valid email address".into()));
    }
    Ok(())
}
