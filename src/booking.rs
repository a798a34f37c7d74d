//! Booking requests, persisted bookings and processing results.
//!
//! Request, booking and result all carry the same person/date values,
//! grouped in [`BookingDetails`]. The processor copies them verbatim from
//! the request into the booking it persists and the result it returns.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::desk::DeskId;
use crate::error::ValidationError;

/// Who is booking, and for which day.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BookingDetails {
    /// First name of the person booking.
    pub first_name: String,
    /// Last name of the person booking.
    pub last_name: String,
    /// Contact email of the person booking.
    pub email: String,
    /// Day the desk is wanted.
    pub date: NaiveDate,
}

/// A request to book any free desk on a given date.
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use deskbooker::DeskBookingRequest;
///
/// let request = DeskBookingRequest::builder()
///     .first_name("Pinky")
///     .last_name("Baring")
///     .email("pinky.baring@customer.com")
///     .date(NaiveDate::from_ymd_opt(2026, 1, 12).unwrap())
///     .build()
///     .unwrap();
/// assert_eq!(request.details.first_name, "Pinky");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeskBookingRequest {
    /// Requested person/date values.
    pub details: BookingDetails,
}

impl DeskBookingRequest {
    /// Creates a request directly from its values.
    #[must_use]
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            details: BookingDetails {
                first_name: first_name.into(),
                last_name: last_name.into(),
                email: email.into(),
                date,
            },
        }
    }

    /// Starts a fluent builder.
    #[must_use]
    pub fn builder() -> DeskBookingRequestBuilder {
        DeskBookingRequestBuilder::default()
    }

    /// Day the desk is wanted.
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.details.date
    }
}

/// Builder for [`DeskBookingRequest`].
#[derive(Debug, Clone, Default)]
pub struct DeskBookingRequestBuilder {
    first_name: Option<String>,
    last_name: Option<String>,
    email: Option<String>,
    date: Option<NaiveDate>,
}

impl DeskBookingRequestBuilder {
    /// Set the first name (required).
    #[must_use]
    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = Some(first_name.into());
        self
    }

    /// Set the last name (required).
    #[must_use]
    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = Some(last_name.into());
        self
    }

    /// Set the contact email (required).
    #[must_use]
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Set the requested date (required).
    #[must_use]
    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// Build the request.
    ///
    /// Returns `ValidationError::MissingField` if any field is not set.
    /// Content rules (lengths, email shape) are checked by the processor
    /// against its configuration.
    pub fn build(self) -> Result<DeskBookingRequest, ValidationError> {
        let first_name = self.first_name.ok_or_else(|| missing("first_name"))?;
        let last_name = self.last_name.ok_or_else(|| missing("last_name"))?;
        let email = self.email.ok_or_else(|| missing("email"))?;
        let date = self.date.ok_or_else(|| missing("date"))?;

        Ok(DeskBookingRequest::new(first_name, last_name, email, date))
    }
}

fn missing(field: &str) -> ValidationError {
    ValidationError::MissingField {
        field: field.to_string(),
    }
}

/// Identifier assigned to a booking by the repository that stored it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeskBookingId(u64);

impl DeskBookingId {
    /// Creates a booking ID from its numeric value.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the numeric value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for DeskBookingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A desk reserved for one person on one date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeskBooking {
    /// The reserved desk.
    pub desk_id: DeskId,
    /// Person/date values copied from the request.
    #[serde(flatten)]
    pub details: BookingDetails,
}

impl DeskBooking {
    /// Creates a booking of `desk_id` carrying the request's values.
    #[must_use]
    pub fn for_request(request: &DeskBookingRequest, desk_id: DeskId) -> Self {
        Self {
            desk_id,
            details: request.details.clone(),
        }
    }

    /// Day the desk is reserved.
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.details.date
    }
}

/// Outcome classification of a booking request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeskBookingResultCode {
    /// A desk was reserved.
    Success,
    /// Every desk is already taken on the requested date.
    NoDeskAvailable,
}

impl fmt::Display for DeskBookingResultCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => write!(f, "success"),
            Self::NoDeskAvailable => write!(f, "no_desk_available"),
        }
    }
}

/// Result reported back to the requester.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeskBookingResult {
    /// Person/date values copied from the request.
    #[serde(flatten)]
    pub details: BookingDetails,
    /// Outcome.
    pub code: DeskBookingResultCode,
    /// Assigned booking ID; `None` unless `code` is `Success`.
    pub desk_booking_id: Option<DeskBookingId>,
}

impl DeskBookingResult {
    pub(crate) fn booked(request: &DeskBookingRequest, id: DeskBookingId) -> Self {
        Self {
            details: request.details.clone(),
            code: DeskBookingResultCode::Success,
            desk_booking_id: Some(id),
        }
    }

    pub(crate) fn no_desk_available(request: &DeskBookingRequest) -> Self {
        Self {
            details: request.details.clone(),
            code: DeskBookingResultCode::NoDeskAvailable,
            desk_booking_id: None,
        }
    }

    /// Returns true if a desk was reserved.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self.code, DeskBookingResultCode::Success)
    }
}
