//! Input validation shared by the request layer.

use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;

/// Minimum accepted password length at signup
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Basic structural email check: one '@', non-empty local part, dotted domain.
#[track_caller]
pub fn validate_email(field: &'static str, email: &str) -> CoreErrorResult<()> {
    let invalid = || CoreError::Validation {
        field,
        message: "Please provide a valid email".to_string(),
        location: ErrorLocation::from(Location::caller()),
    };

    if email.chars().any(char::is_whitespace) {
        return Err(invalid());
    }

    let Some((local, domain)) = email.split_once('@') else {
        return Err(invalid());
    };

    if local.is_empty() || domain.contains('@') {
        return Err(invalid());
    }

    let Some((host, tld)) = domain.rsplit_once('.') else {
        return Err(invalid());
    };

    if host.is_empty() || tld.is_empty() || domain.starts_with('.') {
        return Err(invalid());
    }

    Ok(())
}

#[track_caller]
pub fn require_non_empty(field: &'static str, value: &str) -> CoreErrorResult<()> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation {
            field,
            message: format!("{field} cannot be empty"),
            location: ErrorLocation::from(Location::caller()),
        });
    }
    Ok(())
}

#[track_caller]
pub fn require_min_length(field: &'static str, value: &str, min: usize) -> CoreErrorResult<()> {
    if value.chars().count() < min {
        return Err(CoreError::Validation {
            field,
            message: format!("{field} must be at least {min} characters"),
            location: ErrorLocation::from(Location::caller()),
        });
    }
    Ok(())
}
