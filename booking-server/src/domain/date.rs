//! Booking date parsing and validation.

use std::fmt;

use chrono::NaiveDate;

/// Error returned when a raw booking date fails validation.
///
/// The `Display` strings are the exact messages shown beneath the date
/// field in the booking form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InvalidBookingDate {
    /// The field was left empty.
    #[error("Date is required")]
    Empty,

    /// The value is not a well-formed `YYYY-MM-DD` date.
    #[error("Date must be a valid calendar date")]
    Unparseable,

    /// The date is strictly before the reference "today".
    #[error("Date cannot be in the past")]
    InPast,
}

/// A validated booking date: well-formed and not in the past.
///
/// # Examples
///
/// ```
/// use booking_server::domain::BookingDate;
/// use chrono::NaiveDate;
///
/// let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
///
/// let date = BookingDate::parse("2024-06-15", today).unwrap();
/// assert_eq!(date.date(), NaiveDate::from_ymd_opt(2024, 6, 15).unwrap());
///
/// // Yesterday is rejected
/// assert!(BookingDate::parse("2024-05-31", today).is_err());
///
/// // Today itself is accepted
/// assert!(BookingDate::parse("2024-06-01", today).is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookingDate(NaiveDate);

impl BookingDate {
    /// Parse a raw `YYYY-MM-DD` string as produced by a date input.
    ///
    /// `today` anchors the not-in-past rule: anything strictly before
    /// it is rejected, today itself is accepted.
    pub fn parse(raw: &str, today: NaiveDate) -> Result<Self, InvalidBookingDate> {
        if raw.is_empty() {
            return Err(InvalidBookingDate::Empty);
        }

        let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map_err(|_| InvalidBookingDate::Unparseable)?;

        if date < today {
            return Err(InvalidBookingDate::InPast);
        }

        Ok(BookingDate(date))
    }

    /// The underlying calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for BookingDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    #[test]
    fn empty_is_required_error() {
        let err = BookingDate::parse("", today()).unwrap_err();
        assert_eq!(err, InvalidBookingDate::Empty);
        assert_eq!(err.to_string(), "Date is required");
    }

    #[test]
    fn past_date_rejected() {
        let err = BookingDate::parse("2024-05-31", today()).unwrap_err();
        assert_eq!(err, InvalidBookingDate::InPast);
        assert_eq!(err.to_string(), "Date cannot be in the past");

        assert!(BookingDate::parse("2020-01-01", today()).is_err());
    }

    #[test]
    fn today_accepted() {
        assert!(BookingDate::parse("2024-06-01", today()).is_ok());
    }

    #[test]
    fn future_date_accepted() {
        let date = BookingDate::parse("2024-12-31", today()).unwrap();
        assert_eq!(date.date(), NaiveDate::from_ymd_opt(2024, 12, 31).unwrap());
    }

    #[test]
    fn malformed_rejected() {
        let err = BookingDate::parse("not-a-date", today()).unwrap_err();
        assert_eq!(err, InvalidBookingDate::Unparseable);
        assert_eq!(err.to_string(), "Date must be a valid calendar date");

        assert!(BookingDate::parse("31/12/2024", today()).is_err());
        assert!(BookingDate::parse("2024-13-01", today()).is_err());
    }

    #[test]
    fn display_roundtrip() {
        let date = BookingDate::parse("2024-06-15", today()).unwrap();
        assert_eq!(date.to_string(), "2024-06-15");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    proptest! {
        /// Any date strictly before today is rejected as in the past.
        #[test]
        fn past_always_rejected(days in 1i64..3650) {
            let raw = (today() - chrono::Duration::days(days))
                .format("%Y-%m-%d")
                .to_string();
            prop_assert_eq!(
                BookingDate::parse(&raw, today()).unwrap_err(),
                InvalidBookingDate::InPast
            );
        }

        /// Today and any later date are accepted.
        #[test]
        fn today_or_later_accepted(days in 0i64..3650) {
            let raw = (today() + chrono::Duration::days(days))
                .format("%Y-%m-%d")
                .to_string();
            prop_assert!(BookingDate::parse(&raw, today()).is_ok());
        }

        /// Alphabetic junk never parses.
        #[test]
        fn junk_rejected(raw in "[a-zA-Z ]{1,20}") {
            prop_assert_eq!(
                BookingDate::parse(&raw, today()).unwrap_err(),
                InvalidBookingDate::Unparseable
            );
        }
    }
}
