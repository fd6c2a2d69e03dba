//! Domain types for table bookings.
//!
//! Value types that validate at construction time. Their parse errors
//! display the exact texts the booking form shows inline, so the form
//! layer never invents messages of its own.

mod date;
mod draft;
mod guests;
mod occasion;

pub use date::{BookingDate, InvalidBookingDate};
pub use draft::BookingDraft;
pub use guests::{GuestCount, InvalidGuestCount};
pub use occasion::Occasion;
