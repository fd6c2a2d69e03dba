//! Application state for the web layer.

use std::sync::{Arc, Mutex};

use futures::future::BoxFuture;
use tracing::info;

use crate::domain::BookingDraft;
use crate::form::{SubmissionHandler, SubmitError};
use crate::times::TimesProvider;

/// Shared application state.
///
/// Contains the collaborators the booking form needs to handle
/// requests.
#[derive(Clone)]
pub struct AppState {
    /// Provider of bookable time slots.
    pub times: Arc<dyn TimesProvider>,

    /// Receiver of accepted reservations.
    pub reservations: Arc<ReservationLog>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(times: impl TimesProvider + 'static) -> Self {
        Self {
            times: Arc::new(times),
            reservations: Arc::new(ReservationLog::default()),
        }
    }
}

/// The production submission handler: logs accepted reservations.
///
/// Bookings are not persisted; the in-memory list exists so the
/// running server can report what it has accepted.
#[derive(Debug, Default)]
pub struct ReservationLog {
    accepted: Mutex<Vec<BookingDraft>>,
}

impl ReservationLog {
    /// All reservations accepted since startup, in order.
    pub fn accepted(&self) -> Vec<BookingDraft> {
        self.accepted.lock().unwrap().clone()
    }
}

impl SubmissionHandler for ReservationLog {
    fn submit(&self, draft: BookingDraft) -> BoxFuture<'static, Result<(), SubmitError>> {
        info!(
            date = %draft.date,
            times = %draft.times,
            guests = %draft.guests,
            occasion = %draft.occasion,
            "reservation accepted"
        );
        self.accepted.lock().unwrap().push(draft);
        Box::pin(async { Ok(()) })
    }
}
