//! Desk inventory types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a physical desk.
///
/// # Examples
///
/// ```
/// use deskbooker::DeskId;
///
/// let id = DeskId::new(7);
/// assert_eq!(id.get(), 7);
/// assert_eq!(id.to_string(), "7");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeskId(u32);

impl DeskId {
    /// Creates a desk ID from its numeric value.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the numeric value.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for DeskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for DeskId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

/// A bookable desk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Desk {
    /// Stable desk identifier.
    pub id: DeskId,
    /// Human-readable location or label, e.g. "2nd floor, window".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Desk {
    /// Creates a desk without a description.
    #[must_use]
    pub const fn new(id: DeskId) -> Self {
        Self {
            id,
            description: None,
        }
    }

    /// Creates a desk with a description.
    #[must_use]
    pub fn with_description(id: DeskId, description: impl Into<String>) -> Self {
        Self {
            id,
            description: Some(description.into()),
        }
    }
}
