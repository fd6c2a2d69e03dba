//! The fields of the booking form.

use std::fmt;

use crate::domain::BookingDraft;

/// One of the four booking form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Date,
    Times,
    Guests,
    Occasion,
}

impl Field {
    /// All fields in display order.
    pub const ALL: [Field; 4] = [Field::Date, Field::Times, Field::Guests, Field::Occasion];

    /// Number of fields on the form.
    pub const COUNT: usize = Self::ALL.len();

    /// The form control name, as used in HTML and wire payloads.
    pub fn name(&self) -> &'static str {
        match self {
            Field::Date => "date",
            Field::Times => "times",
            Field::Guests => "guests",
            Field::Occasion => "occasion",
        }
    }

    /// Stable index for per-field state arrays.
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// The field's current raw value in a draft.
    pub fn value<'a>(&self, draft: &'a BookingDraft) -> &'a str {
        match self {
            Field::Date => &draft.date,
            Field::Times => &draft.times,
            Field::Guests => &draft.guests,
            Field::Occasion => &draft.occasion,
        }
    }

    /// Overwrite the field's raw value in a draft.
    pub fn set_value(&self, draft: &mut BookingDraft, raw: String) {
        match self {
            Field::Date => draft.date = raw,
            Field::Times => draft.times = raw,
            Field::Guests => draft.guests = raw,
            Field::Occasion => draft.occasion = raw,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names() {
        let names: Vec<&str> = Field::ALL.iter().map(|f| f.name()).collect();
        assert_eq!(names, vec!["date", "times", "guests", "occasion"]);
    }

    #[test]
    fn indices_are_dense() {
        for (i, field) in Field::ALL.iter().enumerate() {
            assert_eq!(field.index(), i);
        }
    }

    #[test]
    fn value_roundtrip() {
        let mut draft = BookingDraft::default();
        Field::Guests.set_value(&mut draft, "4".into());
        assert_eq!(Field::Guests.value(&draft), "4");
        assert_eq!(Field::Date.value(&draft), "");
    }

    #[test]
    fn display_is_name() {
        assert_eq!(Field::Occasion.to_string(), "occasion");
    }
}
