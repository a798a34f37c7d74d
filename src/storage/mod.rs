//! Storage traits and backends for DeskBooker.
//!
//! The traits define what the processor needs from its collaborators;
//! the in-memory backend implements them for embedded use and tests.

mod memory;
mod traits;

pub use memory::{InMemoryDeskBookingRepository, InMemoryDeskRepository, InMemoryStores};
pub use traits::{DeskBookingRepository, DeskRepository, StorageError};
