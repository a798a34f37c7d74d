//! Desk booking request processing.
//!
//! [`DeskBookingRequestProcessor`] is a synchronous orchestrator over the two
//! storage collaborators: it looks up free desks for the requested date and
//! books the first one, or reports that none was free.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::booking::{DeskBooking, DeskBookingRequest, DeskBookingResult};
use crate::config::ProcessorConfig;
use crate::error::DeskBookerResult;
use crate::storage::{DeskBookingRepository, DeskRepository};

/// Books desks on behalf of incoming requests.
#[derive(Clone)]
pub struct DeskBookingRequestProcessor {
    desk_bookings: Arc<dyn DeskBookingRepository>,
    desks: Arc<dyn DeskRepository>,
    config: ProcessorConfig,
}

impl DeskBookingRequestProcessor {
    /// Create a processor with the default [`ProcessorConfig`].
    #[must_use]
    pub fn new(desk_bookings: Arc<dyn DeskBookingRepository>, desks: Arc<dyn DeskRepository>) -> Self {
        Self {
            desk_bookings,
            desks,
            config: ProcessorConfig::default(),
        }
    }

    /// Create a processor with an explicit configuration.
    ///
    /// The configuration is validated up front.
    pub fn with_config(
        desk_bookings: Arc<dyn DeskBookingRepository>,
        desks: Arc<dyn DeskRepository>,
        config: ProcessorConfig,
    ) -> DeskBookerResult<Self> {
        Ok(Self {
            desk_bookings,
            desks,
            config: config.validate()?,
        })
    }

    /// The active configuration.
    #[must_use]
    pub const fn config(&self) -> &ProcessorConfig {
        &self.config
    }

    /// Process a booking request.
    ///
    /// If any desk is free on the requested date, the first one returned by
    /// the desk repository is booked and saved exactly once, and the result
    /// carries the ID the booking repository assigned. Otherwise nothing is
    /// saved and the result code is `NoDeskAvailable`.
    ///
    /// # Errors
    /// - `Validation` if the request breaks the configured limits
    /// - `Execution` if either repository fails
    pub fn book_desk(&self, request: &DeskBookingRequest) -> DeskBookerResult<DeskBookingResult> {
        let date = request.date();
        debug!(%date, email = %request.details.email, "processing desk booking request");

        if let Err(e) = request.validate(&self.config) {
            warn!(%date, error = %e, "rejected desk booking request");
            return Err(e.into());
        }

        let available = self.desks.get_available_desks(date)?;
        let Some(desk) = available.into_iter().next() else {
            info!(%date, "no desk available");
            return Ok(DeskBookingResult::no_desk_available(request));
        };

        let booking = DeskBooking::for_request(request, desk.id);
        let booking_id = self.desk_bookings.save(booking)?;
        info!(%date, desk_id = %desk.id, booking_id = %booking_id, "desk booked");

        Ok(DeskBookingResult::booked(request, booking_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Mutex;

    use chrono::NaiveDate;

    use crate::booking::{DeskBookingId, DeskBookingResultCode};
    use crate::desk::{Desk, DeskId};
    use crate::storage::StorageError;

    /// Desk repository returning a fixed list for one date and nothing otherwise.
    struct StubDesks {
        date: NaiveDate,
        desks: Mutex<Vec<Desk>>,
        fail: bool,
    }

    impl DeskRepository for StubDesks {
        fn get_available_desks(&self, date: NaiveDate) -> Result<Vec<Desk>, StorageError> {
            if self.fail {
                return Err(StorageError::BackendError("inventory offline".to_string()));
            }
            if date != self.date {
                return Ok(Vec::new());
            }
            Ok(self.desks.lock().unwrap().clone())
        }

        fn get(&self, id: DeskId) -> Result<Option<Desk>, StorageError> {
            Ok(self.desks.lock().unwrap().iter().find(|d| d.id == id).cloned())
        }

        fn list(&self) -> Result<Vec<Desk>, StorageError> {
            Ok(self.desks.lock().unwrap().clone())
        }
    }

    /// Booking repository recording every save attempt and answering with a
    /// fixed ID, or with a duplicate-key error when `fail_save` is set.
    struct RecordingBookings {
        saved: Mutex<Vec<DeskBooking>>,
        assign: DeskBookingId,
        fail_save: bool,
    }

    impl DeskBookingRepository for RecordingBookings {
        fn save(&self, booking: DeskBooking) -> Result<DeskBookingId, StorageError> {
            let desk_id = booking.desk_id;
            self.saved.lock().unwrap().push(booking);
            if self.fail_save {
                return Err(StorageError::DuplicateKey(format!("desk {desk_id}")));
            }
            Ok(self.assign)
        }

        fn get(&self, _id: DeskBookingId) -> Result<Option<DeskBooking>, StorageError> {
            Ok(None)
        }

        fn get_all(&self) -> Result<Vec<(DeskBookingId, DeskBooking)>, StorageError> {
            Ok(Vec::new())
        }

        fn find_by_date(
            &self,
            _date: NaiveDate,
        ) -> Result<Vec<(DeskBookingId, DeskBooking)>, StorageError> {
            Ok(Vec::new())
        }
    }

    struct Fixture {
        request: DeskBookingRequest,
        desks: Arc<StubDesks>,
        bookings: Arc<RecordingBookings>,
        processor: DeskBookingRequestProcessor,
    }

    fn fixture_with(available: Vec<Desk>, fail: bool) -> Fixture {
        fixture_full(available, fail, false, ProcessorConfig::default())
    }

    fn fixture_full(
        available: Vec<Desk>,
        fail: bool,
        fail_save: bool,
        config: ProcessorConfig,
    ) -> Fixture {
        let date = NaiveDate::from_ymd_opt(2026, 1, 12).unwrap();
        let request = DeskBookingRequest::new("Pinky", "Baring", "pinky.baring@customer.com", date);
        let desks = Arc::new(StubDesks {
            date,
            desks: Mutex::new(available),
            fail,
        });
        let bookings = Arc::new(RecordingBookings {
            saved: Mutex::new(Vec::new()),
            assign: DeskBookingId::new(5),
            fail_save,
        });
        let processor =
            DeskBookingRequestProcessor::with_config(bookings.clone(), desks.clone(), config).unwrap();
        Fixture {
            request,
            desks,
            bookings,
            processor,
        }
    }

    fn fixture() -> Fixture {
        fixture_with(vec![Desk::new(DeskId::new(7))], false)
    }

    #[test]
    fn returns_result_with_request_values() {
        let f = fixture();
        let result = f.processor.book_desk(&f.request).unwrap();
        assert_eq!(result.details, f.request.details);
    }

    #[test]
    fn saves_booking_with_request_values_and_first_desk() {
        let f = fixture();
        f.processor.book_desk(&f.request).unwrap();

        let saved = f.bookings.saved.lock().unwrap();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].details, f.request.details);
        assert_eq!(saved[0].desk_id, DeskId::new(7));
    }

    #[test]
    fn picks_the_first_available_desk() {
        let f = fixture_with(
            vec![Desk::new(DeskId::new(12)), Desk::new(DeskId::new(3))],
            false,
        );
        f.processor.book_desk(&f.request).unwrap();
        assert_eq!(f.bookings.saved.lock().unwrap()[0].desk_id, DeskId::new(12));
    }

    #[test]
    fn does_not_save_when_no_desk_is_available() {
        let f = fixture();
        f.desks.desks.lock().unwrap().clear();
        f.processor.book_desk(&f.request).unwrap();
        assert!(f.bookings.saved.lock().unwrap().is_empty());
    }

    #[test]
    fn result_code_and_id_follow_availability() {
        for (available, code, id) in [
            (true, DeskBookingResultCode::Success, Some(DeskBookingId::new(5))),
            (false, DeskBookingResultCode::NoDeskAvailable, None),
        ] {
            let f = fixture();
            if !available {
                f.desks.desks.lock().unwrap().clear();
            }
            let result = f.processor.book_desk(&f.request).unwrap();
            assert_eq!(result.code, code);
            assert_eq!(result.desk_booking_id, id);
            assert_eq!(result.is_success(), available);
        }
    }

    #[test]
    fn other_dates_see_no_desks() {
        let f = fixture();
        let mut request = f.request.clone();
        request.details.date = NaiveDate::from_ymd_opt(2026, 1, 13).unwrap();
        let result = f.processor.book_desk(&request).unwrap();
        assert_eq!(result.code, DeskBookingResultCode::NoDeskAvailable);
    }

    #[test]
    fn default_config_books_requests_without_content_checks() {
        let f = fixture();
        for (first, email) in [("Pinky", "pinky@localhost"), ("", "pinky.baring@customer.com")] {
            let mut request = f.request.clone();
            request.details.first_name = first.to_string();
            request.details.email = email.to_string();

            let result = f.processor.book_desk(&request).unwrap();
            assert_eq!(result.code, DeskBookingResultCode::Success);
            assert_eq!(result.details, request.details);
        }
        assert_eq!(f.bookings.saved.lock().unwrap().len(), 2);
    }

    #[test]
    fn invalid_request_touches_no_storage() {
        let f = fixture_full(
            vec![Desk::new(DeskId::new(7))],
            false,
            false,
            ProcessorConfig::strict(),
        );
        let mut request = f.request.clone();
        request.details.email = "pinky".to_string();

        let err = f.processor.book_desk(&request).unwrap_err();
        assert!(err.is_validation());
        assert!(f.bookings.saved.lock().unwrap().is_empty());
    }

    #[test]
    fn storage_failure_propagates() {
        let f = fixture_with(Vec::new(), true);
        let err = f.processor.book_desk(&f.request).unwrap_err();
        assert!(err.is_execution());
        assert!(err.to_string().contains("inventory offline"));
    }

    #[test]
    fn save_failure_propagates_without_a_result() {
        let f = fixture_full(
            vec![Desk::new(DeskId::new(7))],
            false,
            true,
            ProcessorConfig::default(),
        );
        let err = f.processor.book_desk(&f.request).unwrap_err();
        assert!(err.is_execution());
        assert!(err.to_string().contains("Duplicate key"));

        // Exactly one save was attempted.
        assert_eq!(f.bookings.saved.lock().unwrap().len(), 1);
    }

    #[test]
    fn with_config_rejects_invalid_limits() {
        let f = fixture();
        let cfg = ProcessorConfig {
            max_name_length: Some(0),
            ..ProcessorConfig::default()
        };
        let res = DeskBookingRequestProcessor::with_config(f.bookings.clone(), f.desks.clone(), cfg);
        assert!(matches!(res, Err(e) if e.is_validation()));
    }
}
