//! The in-memory booking draft.

/// In-memory, not-yet-submitted reservation field values.
///
/// Every field holds the raw string exactly as entered, valid or not;
/// validation lives in [`crate::form`]. A draft exists only for the
/// duration of one form session and is cloned, never moved, when it is
/// handed to the submission handler.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingDraft {
    /// Requested date, `YYYY-MM-DD`.
    pub date: String,

    /// Requested time slot, e.g. `"19:00"`.
    pub times: String,

    /// Party size as entered, e.g. `"4"`.
    pub guests: String,

    /// Chosen occasion label.
    pub occasion: String,
}

impl BookingDraft {
    /// True if no field has been filled in yet.
    pub fn is_empty(&self) -> bool {
        self.date.is_empty()
            && self.times.is_empty()
            && self.guests.is_empty()
            && self.occasion.is_empty()
    }
}
