//! Processor configuration.

use serde::{Deserialize, Serialize};

use crate::error::{DeskBookerError, ValidationError};

/// Limits applied to incoming booking requests.
///
/// The default applies no limits: every request goes straight to the
/// availability check. [`ProcessorConfig::strict`] turns the checks on.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessorConfig {
    /// Maximum length of first and last name, in characters. `None` means unbounded.
    pub max_name_length: Option<usize>,
    /// Maximum length of the email address, in characters. `None` means unbounded.
    pub max_email_length: Option<usize>,
    /// Reject requests whose names or email are empty or whitespace only.
    pub require_non_empty: bool,
    /// Reject requests whose email does not look like `local@domain.tld`.
    pub require_valid_email: bool,
}

impl ProcessorConfig {
    /// Limits suited to a public booking form: names up to 50 characters,
    /// email up to 100, no blank fields, well-formed email.
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            max_name_length: Some(50),
            max_email_length: Some(100),
            require_non_empty: true,
            require_valid_email: true,
        }
    }

    /// Checks the limits are usable.
    pub fn validate(self) -> Result<Self, ValidationError> {
        if self.max_name_length == Some(0) {
            return Err(ValidationError::InvalidConfig {
                reason: "max_name_length must be at least 1".to_string(),
            });
        }
        if self.max_email_length == Some(0) {
            return Err(ValidationError::InvalidConfig {
                reason: "max_email_length must be at least 1".to_string(),
            });
        }
        Ok(self)
    }

    /// Parses and validates a JSON config document.
    ///
    /// Missing keys fall back to their defaults.
    ///
    /// # Example
    /// ```
    /// use deskbooker::ProcessorConfig;
    ///
    /// let cfg = ProcessorConfig::from_json_str(r#"{ "max_name_length": 20 }"#).unwrap();
    /// assert_eq!(cfg.max_name_length, Some(20));
    /// assert_eq!(cfg.max_email_length, None);
    /// assert!(!cfg.require_valid_email);
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self, DeskBookerError> {
        let cfg: Self = serde_json::from_str(json).map_err(|e| ValidationError::InvalidConfig {
            reason: format!("malformed config: {e}"),
        })?;
        Ok(cfg.validate()?)
    }
}
