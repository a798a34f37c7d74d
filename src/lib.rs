//! # DeskBooker
//!
//! Books a desk for a person on a given date. A request is checked against
//! the desk inventory for that date; the first free desk is reserved and the
//! booking persisted, otherwise the request is reported as unfulfilled.
//!
//! ## Core Concepts
//!
//! - **DeskBookingRequest**: who wants a desk, and on which day
//! - **DeskRepository** / **DeskBookingRepository**: pluggable inventory and booking storage
//! - **DeskBookingRequestProcessor**: the orchestrator that ties them together
//! - **DeskBookingResult**: the request's values plus an outcome code and booking ID
//!
//! ## Usage
//!
//! ```
//! use chrono::NaiveDate;
//! use deskbooker::{
//!     Desk, DeskBookingRequest, DeskBookingRequestProcessor, DeskBookingResultCode, DeskId,
//!     InMemoryStores,
//! };
//!
//! let stores = InMemoryStores::with_desks([Desk::new(DeskId::new(7))]).unwrap();
//! let processor = DeskBookingRequestProcessor::new(stores.desk_bookings.clone(), stores.desks.clone());
//!
//! let date = NaiveDate::from_ymd_opt(2026, 1, 12).unwrap();
//! let request = DeskBookingRequest::new("Pinky", "Baring", "pinky.baring@customer.com", date);
//!
//! let first = processor.book_desk(&request).unwrap();
//! assert_eq!(first.code, DeskBookingResultCode::Success);
//!
//! let second = processor.book_desk(&request).unwrap();
//! assert_eq!(second.code, DeskBookingResultCode::NoDeskAvailable);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod booking;
pub mod config;
pub mod desk;
pub mod error;
pub mod processor;
pub mod storage;
pub mod validation;

// Re-export primary types at crate root for convenience
pub use booking::{
    BookingDetails, DeskBooking, DeskBookingId, DeskBookingRequest, DeskBookingRequestBuilder,
    DeskBookingResult, DeskBookingResultCode,
};
pub use config::ProcessorConfig;
pub use desk::{Desk, DeskId};
pub use error::{DeskBookerError, DeskBookerResult, ExecutionError, ValidationError};
pub use processor::DeskBookingRequestProcessor;
pub use storage::{
    DeskBookingRepository, DeskRepository, InMemoryDeskBookingRepository, InMemoryDeskRepository,
    InMemoryStores, StorageError,
};
