//! Guest count parsing and validation.

use std::fmt;

/// Error returned when a raw guest count fails validation.
///
/// The `Display` strings are the exact messages shown beneath the
/// guests field in the booking form. The whole-number check runs
/// before the range checks, so `"2.5"` reports `NotWhole` even though
/// it lies inside the numeric range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InvalidGuestCount {
    /// The field was left empty.
    #[error("Number of guests is required")]
    Empty,

    /// The value is not a whole number.
    #[error("Number of guests must be a whole number")]
    NotWhole,

    /// Below the minimum party size.
    #[error("Must have at least 1 guest")]
    TooFew,

    /// Above the maximum party size.
    #[error("Cannot have more than 10 guests")]
    TooMany,
}

/// A validated party size, between 1 and 10 guests inclusive.
///
/// # Examples
///
/// ```
/// use booking_server::domain::GuestCount;
///
/// let four = GuestCount::parse("4").unwrap();
/// assert_eq!(four.get(), 4);
///
/// assert!(GuestCount::parse("0").is_err());
/// assert!(GuestCount::parse("11").is_err());
/// assert!(GuestCount::parse("2.5").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct GuestCount(u8);

impl GuestCount {
    /// Smallest bookable party.
    pub const MIN: u8 = 1;

    /// Largest bookable party.
    pub const MAX: u8 = 10;

    /// Parse a raw guest count as entered in a numeric input.
    ///
    /// Accepts whole numbers only; a leading-zero form like `"010"` is
    /// read numerically as 10.
    pub fn parse(raw: &str) -> Result<Self, InvalidGuestCount> {
        if raw.is_empty() {
            return Err(InvalidGuestCount::Empty);
        }

        // Whole-number check first: "2.5" must fail here, not pass the
        // range checks by numeric coercion.
        let n: i64 = raw
            .trim()
            .parse()
            .map_err(|_| InvalidGuestCount::NotWhole)?;

        if n < i64::from(Self::MIN) {
            return Err(InvalidGuestCount::TooFew);
        }
        if n > i64::from(Self::MAX) {
            return Err(InvalidGuestCount::TooMany);
        }

        Ok(GuestCount(n as u8))
    }

    /// The party size as a number.
    pub fn get(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for GuestCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
