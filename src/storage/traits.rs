//! Abstract storage traits for DeskBooker.
//!
//! The processor only talks to these traits, so the desk inventory and the
//! booking log can live in memory, in a database, or behind a service.

use chrono::NaiveDate;
use thiserror::Error;

use crate::booking::{DeskBooking, DeskBookingId};
use crate::desk::{Desk, DeskId};

/// Errors that can occur during storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Desk not found.
    #[error("Desk not found: {0}")]
    DeskNotFound(DeskId),

    /// Booking not found.
    #[error("Desk booking not found: {0}")]
    DeskBookingNotFound(DeskBookingId),

    /// Key already exists.
    #[error("Duplicate key: {0}")]
    DuplicateKey(String),

    /// Backend error.
    #[error("Storage backend error: {0}")]
    BackendError(String),
}

/// Desk inventory lookup.
pub trait DeskRepository: Send + Sync {
    /// Desks that have no booking on `date`, ascending by ID.
    fn get_available_desks(&self, date: NaiveDate) -> Result<Vec<Desk>, StorageError>;

    /// Get a desk by ID.
    fn get(&self, id: DeskId) -> Result<Option<Desk>, StorageError>;

    /// All desks, ascending by ID.
    fn list(&self) -> Result<Vec<Desk>, StorageError>;
}

/// Booking persistence.
pub trait DeskBookingRepository: Send + Sync {
    /// Persist a booking and return the ID the backend assigned to it.
    fn save(&self, booking: DeskBooking) -> Result<DeskBookingId, StorageError>;

    /// Get a booking by ID.
    fn get(&self, id: DeskBookingId) -> Result<Option<DeskBooking>, StorageError>;

    /// All bookings, ordered by date and then by ID.
    fn get_all(&self) -> Result<Vec<(DeskBookingId, DeskBooking)>, StorageError>;

    /// Bookings on a single date, ordered by ID.
    fn find_by_date(&self, date: NaiveDate) -> Result<Vec<(DeskBookingId, DeskBooking)>, StorageError>;
}
