//! Pure per-field validators.
//!
//! Each field has an ordered list of rules: the required check always
//! runs first, and later rules only see non-empty values. Validation
//! returns the first failing rule's message, so callers can display it
//! verbatim. The date and guests rules delegate to the domain parse
//! types, whose error `Display` strings are the canonical messages.

use chrono::NaiveDate;

use crate::domain::{BookingDate, GuestCount};

use super::field::Field;

/// Validate a single field's raw value.
///
/// `today` anchors the date-not-in-past rule and is ignored by the
/// other fields. Returns the first failing rule's message, or `None`
/// when every rule passes.
pub fn validate(field: Field, raw: &str, today: NaiveDate) -> Option<String> {
    match field {
        Field::Date => BookingDate::parse(raw, today).err().map(|e| e.to_string()),
        Field::Times => required(raw, "Time is required"),
        Field::Guests => GuestCount::parse(raw).err().map(|e| e.to_string()),
        Field::Occasion => required(raw, "Occasion is required"),
    }
}

/// The required rule: empty values fail with the field's message.
fn required(raw: &str, message: &str) -> Option<String> {
    raw.is_empty().then(|| message.to_string())
}
