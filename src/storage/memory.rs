//! In-memory storage backend.
//!
//! Thread-safe implementations of the repository traits, intended for
//! embedded usage, tests, and as a reference implementation.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::{Arc, RwLock};

use chrono::NaiveDate;

use crate::booking::{DeskBooking, DeskBookingId};
use crate::desk::{Desk, DeskId};
use crate::storage::traits::{DeskBookingRepository, DeskRepository, StorageError};

fn lock_err(context: &'static str) -> StorageError {
    StorageError::BackendError(format!("poisoned lock: {context}"))
}

#[derive(Debug)]
struct BookingState {
    by_id: BTreeMap<DeskBookingId, DeskBooking>,
    by_date: HashMap<NaiveDate, BTreeSet<DeskBookingId>>,
    next_id: u64,
}

impl Default for BookingState {
    fn default() -> Self {
        Self {
            by_id: BTreeMap::new(),
            by_date: HashMap::new(),
            next_id: 1,
        }
    }
}

impl BookingState {
    fn booked_desks(&self, date: NaiveDate) -> BTreeSet<DeskId> {
        self.by_date
            .get(&date)
            .into_iter()
            .flatten()
            .filter_map(|id| self.by_id.get(id))
            .map(|b| b.desk_id)
            .collect()
    }

    fn entries(&self, ids: impl Iterator<Item = DeskBookingId>) -> Vec<(DeskBookingId, DeskBooking)> {
        ids.filter_map(|id| self.by_id.get(&id).map(|b| (id, b.clone())))
            .collect()
    }
}

/// Thread-safe in-memory booking repository.
///
/// IDs are assigned sequentially starting at 1. A desk can be booked at
/// most once per date.
#[derive(Debug, Default)]
pub struct InMemoryDeskBookingRepository {
    state: RwLock<BookingState>,
}

impl InMemoryDeskBookingRepository {
    /// Create a new empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Desks that already have a booking on `date`.
    pub fn booked_desks(&self, date: NaiveDate) -> Result<BTreeSet<DeskId>, StorageError> {
        let state = self.state.read().map_err(|_| lock_err("booking.booked_desks"))?;
        Ok(state.booked_desks(date))
    }

    /// Number of stored bookings.
    pub fn len(&self) -> Result<usize, StorageError> {
        let state = self.state.read().map_err(|_| lock_err("booking.len"))?;
        Ok(state.by_id.len())
    }

    /// Returns true if nothing has been booked.
    pub fn is_empty(&self) -> Result<bool, StorageError> {
        Ok(self.len()? == 0)
    }
}

impl DeskBookingRepository for InMemoryDeskBookingRepository {
    fn save(&self, booking: DeskBooking) -> Result<DeskBookingId, StorageError> {
        let mut state = self.state.write().map_err(|_| lock_err("booking.save"))?;

        let date = booking.date();
        if state.booked_desks(date).contains(&booking.desk_id) {
            return Err(StorageError::DuplicateKey(format!(
                "desk {} on {date}",
                booking.desk_id
            )));
        }

        let id = DeskBookingId::new(state.next_id);
        state.next_id += 1;
        state.by_date.entry(date).or_default().insert(id);
        state.by_id.insert(id, booking);
        Ok(id)
    }

    fn get(&self, id: DeskBookingId) -> Result<Option<DeskBooking>, StorageError> {
        let state = self.state.read().map_err(|_| lock_err("booking.get"))?;
        Ok(state.by_id.get(&id).cloned())
    }

    fn get_all(&self) -> Result<Vec<(DeskBookingId, DeskBooking)>, StorageError> {
        let state = self.state.read().map_err(|_| lock_err("booking.get_all"))?;
        let mut out: Vec<_> = state
            .by_id
            .iter()
            .map(|(id, b)| (*id, b.clone()))
            .collect();
        // by_id is already ID-ordered; a stable sort keeps that within a date.
        out.sort_by_key(|(_, b)| b.date());
        Ok(out)
    }

    fn find_by_date(&self, date: NaiveDate) -> Result<Vec<(DeskBookingId, DeskBooking)>, StorageError> {
        let state = self.state.read().map_err(|_| lock_err("booking.find_by_date"))?;
        let Some(ids) = state.by_date.get(&date) else {
            return Ok(Vec::new());
        };
        Ok(state.entries(ids.iter().copied()))
    }
}

/// Thread-safe in-memory desk inventory.
///
/// Availability is derived from the shared booking repository: a desk is
/// available on a date when no booking references it on that date.
#[derive(Debug)]
pub struct InMemoryDeskRepository {
    desks: RwLock<BTreeMap<DeskId, Desk>>,
    bookings: Arc<InMemoryDeskBookingRepository>,
}

impl InMemoryDeskRepository {
    /// Create an empty inventory backed by `bookings`.
    #[must_use]
    pub fn new(bookings: Arc<InMemoryDeskBookingRepository>) -> Self {
        Self {
            desks: RwLock::new(BTreeMap::new()),
            bookings,
        }
    }

    /// Add a desk. Returns error if the ID already exists.
    pub fn add_desk(&self, desk: Desk) -> Result<(), StorageError> {
        let mut desks = self.desks.write().map_err(|_| lock_err("desk.add"))?;
        if desks.contains_key(&desk.id) {
            return Err(StorageError::DuplicateKey(format!("desk {}", desk.id)));
        }
        desks.insert(desk.id, desk);
        Ok(())
    }

    /// Remove a desk from the inventory. Existing bookings are kept.
    pub fn remove_desk(&self, id: DeskId) -> Result<Desk, StorageError> {
        let mut desks = self.desks.write().map_err(|_| lock_err("desk.remove"))?;
        desks.remove(&id).ok_or(StorageError::DeskNotFound(id))
    }
}

impl DeskRepository for InMemoryDeskRepository {
    fn get_available_desks(&self, date: NaiveDate) -> Result<Vec<Desk>, StorageError> {
        let booked = self.bookings.booked_desks(date)?;
        let desks = self.desks.read().map_err(|_| lock_err("desk.available"))?;
        Ok(desks
            .values()
            .filter(|d| !booked.contains(&d.id))
            .cloned()
            .collect())
    }

    fn get(&self, id: DeskId) -> Result<Option<Desk>, StorageError> {
        let desks = self.desks.read().map_err(|_| lock_err("desk.get"))?;
        Ok(desks.get(&id).cloned())
    }

    fn list(&self) -> Result<Vec<Desk>, StorageError> {
        let desks = self.desks.read().map_err(|_| lock_err("desk.list"))?;
        Ok(desks.values().cloned().collect())
    }
}

/// Convenience bundle of in-memory repositories, wired to each other.
#[derive(Debug)]
pub struct InMemoryStores {
    /// Desk inventory.
    pub desks: Arc<InMemoryDeskRepository>,
    /// Booking log.
    pub desk_bookings: Arc<InMemoryDeskBookingRepository>,
}

impl Default for InMemoryStores {
    fn default() -> Self {
        let desk_bookings = Arc::new(InMemoryDeskBookingRepository::new());
        let desks = Arc::new(InMemoryDeskRepository::new(Arc::clone(&desk_bookings)));
        Self {
            desks,
            desk_bookings,
        }
    }
}

impl InMemoryStores {
    /// Create a new bundle with an empty inventory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a bundle seeded with `desks`.
    pub fn with_desks(desks: impl IntoIterator<Item = Desk>) -> Result<Self, StorageError> {
        let stores = Self::default();
        for desk in desks {
            stores.desks.add_desk(desk)?;
        }
        Ok(stores)
    }
}
