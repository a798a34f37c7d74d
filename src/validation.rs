//! Request validation.
//!
//! Builders only check that fields are present. This module checks their
//! content against a [`ProcessorConfig`] before a request reaches storage.
//! Values are measured exactly as they will be stored; nothing is trimmed.

use std::sync::OnceLock;

use regex::Regex;

use crate::booking::DeskBookingRequest;
use crate::config::ProcessorConfig;
use crate::error::ValidationError;

// One '@', no whitespace, at least one dot in the domain.
const EMAIL_PATTERN: &str = r"^[^@\s]+@[^@\s.]+(\.[^@\s.]+)+$";

static EMAIL_RE: OnceLock<Result<Regex, regex::Error>> = OnceLock::new();

fn email_regex() -> Result<&'static Regex, ValidationError> {
    EMAIL_RE
        .get_or_init(|| Regex::new(EMAIL_PATTERN))
        .as_ref()
        .map_err(|e| ValidationError::InvalidConfig {
            reason: format!("invalid email pattern: {e}"),
        })
}

fn validate_text(
    field: &'static str,
    value: &str,
    max_length: Option<usize>,
    config: &ProcessorConfig,
) -> Result<(), ValidationError> {
    if config.require_non_empty && value.trim().is_empty() {
        return Err(ValidationError::EmptyField {
            field: field.to_string(),
        });
    }
    if let Some(max_length) = max_length {
        if value.chars().count() > max_length {
            return Err(ValidationError::FieldTooLong {
                field: field.to_string(),
                max_length,
            });
        }
    }
    Ok(())
}

/// Returns true if `email` looks like `local@domain.tld`.
///
/// Surrounding whitespace makes an address invalid.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    email_regex().is_ok_and(|re| re.is_match(email))
}

impl DeskBookingRequest {
    /// Validates this request against `config`.
    pub fn validate(&self, config: &ProcessorConfig) -> Result<(), ValidationError> {
        let d = &self.details;
        validate_text("first_name", &d.first_name, config.max_name_length, config)?;
        validate_text("last_name", &d.last_name, config.max_name_length, config)?;
        validate_text("email", &d.email, config.max_email_length, config)?;

        if config.require_valid_email && !email_regex()?.is_match(&d.email) {
            return Err(ValidationError::InvalidEmail {
                email: d.email.clone(),
            });
        }
        Ok(())
    }
}
