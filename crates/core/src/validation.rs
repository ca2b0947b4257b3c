//! Input validation for user-supplied names and credentials.
//!
//! Length limits mirror the column sizes in the migrations so that bad input
//! is rejected with a 400 before it reaches the database.

use validator::ValidateEmail;

use crate::error::CoreError;

pub const MAX_USERNAME_LEN: usize = 50;
pub const MAX_EMAIL_LEN: usize = 200;
pub const MAX_PROJECT_NAME_LEN: usize = 150;
pub const MAX_TASK_NAME_LEN: usize = 150;
pub const MAX_TASK_DESCRIPTION_LEN: usize = 300;

/// Minimum password length accepted at registration.
pub const MIN_PASSWORD_LEN: usize = 8;
/// Upper bound keeps hashing cost predictable.
pub const MAX_PASSWORD_LEN: usize = 128;

/// Validate a required, non-blank text field of at most `max` characters.
pub fn validate_name(value: &str, field: &str, max: usize) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} must not be empty")));
    }
    let len = value.chars().count();
    if len > max {
        return Err(CoreError::Validation(format!(
            "{field} must be at most {max} characters, got {len}"
        )));
    }
    Ok(())
}

pub fn validate_username(username: &str) -> Result<(), CoreError> {
    validate_name(username, "username", MAX_USERNAME_LEN)
}

pub fn validate_project_name(name: &str) -> Result<(), CoreError> {
    validate_name(name, "project_name", MAX_PROJECT_NAME_LEN)
}

pub fn validate_task_name(name: &str) -> Result<(), CoreError> {
    validate_name(name, "task_name", MAX_TASK_NAME_LEN)
}

/// Task descriptions may be empty but not longer than the column allows.
pub fn validate_task_description(description: &str) -> Result<(), CoreError> {
    let len = description.chars().count();
    if len > MAX_TASK_DESCRIPTION_LEN {
        return Err(CoreError::Validation(format!(
            "description must be at most {MAX_TASK_DESCRIPTION_LEN} characters, got {len}"
        )));
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), CoreError> {
    if email.chars().count() > MAX_EMAIL_LEN {
        return Err(CoreError::Validation(format!(
            "email must be at most {MAX_EMAIL_LEN} characters"
        )));
    }
    if !email.validate_email() {
        return Err(CoreError::Validation(format!(
            "'{email}' is not a valid email address"
        )));
    }
    Ok(())
}

pub fn validate_password(password: &str) -> Result<(), CoreError> {
    let len = password.chars().count();
    if len < MIN_PASSWORD_LEN {
        return Err(CoreError::Validation(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters long"
        )));
    }
    if len > MAX_PASSWORD_LEN {
        return Err(CoreError::Validation(format!(
            "Password must be at most {MAX_PASSWORD_LEN} characters long"
        )));
    }
    Ok(())
}
