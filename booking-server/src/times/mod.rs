//! Available booking times.
//!
//! The set of bookable slots for a date is owned outside the form
//! core: the form only renders whatever list it is given.
//! [`TimesProvider`] is the seam through which the shell recomputes
//! the list when the date changes; how a provider decides what is
//! available is not this crate's concern.

use std::sync::Mutex;

use chrono::NaiveDate;

use crate::form::DateListener;

/// The standard evening slots, on the hour.
const DEFAULT_SLOTS: [&str; 5] = ["17:00", "18:00", "19:00", "20:00", "21:00"];

/// A read-only, ordered list of bookable time slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailableTimes(Vec<String>);

impl AvailableTimes {
    pub fn new(times: Vec<String>) -> Self {
        Self(times)
    }

    /// The slots in display order.
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Whether `time` is one of the offered slots.
    pub fn contains(&self, time: &str) -> bool {
        self.0.iter().any(|t| t == time)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for AvailableTimes {
    /// The standard evening slots.
    fn default() -> Self {
        Self(DEFAULT_SLOTS.iter().map(|s| s.to_string()).collect())
    }
}

/// Supplies the available times for a booking date.
pub trait TimesProvider: Send + Sync {
    fn times_for(&self, date: NaiveDate) -> AvailableTimes;
}

/// Provider that offers the same slots on every date.
#[derive(Debug, Clone, Default)]
pub struct FixedTimes {
    times: AvailableTimes,
}

impl FixedTimes {
    pub fn new(times: AvailableTimes) -> Self {
        Self { times }
    }
}

impl TimesProvider for FixedTimes {
    fn times_for(&self, _date: NaiveDate) -> AvailableTimes {
        self.times.clone()
    }
}

/// Date listener that recomputes the available times through a
/// provider.
///
/// This is the production receiver for the form's date-change
/// notifications: every change replaces the current list with the
/// provider's answer for the new date. An unparseable date falls back
/// to the default slots rather than leaving a stale list up.
pub struct TimesRefresher {
    provider: std::sync::Arc<dyn TimesProvider>,
    current: Mutex<AvailableTimes>,
}

impl TimesRefresher {
    pub fn new(provider: std::sync::Arc<dyn TimesProvider>) -> Self {
        Self {
            provider,
            current: Mutex::new(AvailableTimes::default()),
        }
    }

    /// The most recently computed list.
    pub fn current(&self) -> AvailableTimes {
        self.current.lock().unwrap().clone()
    }
}

impl DateListener for TimesRefresher {
    fn date_changed(&self, raw: &str) {
        let times = match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            Ok(date) => self.provider.times_for(date),
            Err(_) => AvailableTimes::default(),
        };
        *self.current.lock().unwrap() = times;
    }
}
