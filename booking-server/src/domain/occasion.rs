//! Occasions offered by the booking form.

use std::fmt;

/// An occasion the restaurant caters for.
///
/// These populate the occasion selector on the booking page. The form
/// itself only requires that *some* occasion is chosen; it does not
/// reject values outside this list, so the list can grow without
/// touching the validation rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Occasion {
    Birthday,
    Anniversary,
}

impl Occasion {
    /// All occasions in display order.
    pub const ALL: [Occasion; 2] = [Occasion::Birthday, Occasion::Anniversary];

    /// The label shown in the selector and submitted with the form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Occasion::Birthday => "Birthday",
            Occasion::Anniversary => "Anniversary",
        }
    }
}

impl fmt::Display for Occasion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels() {
        assert_eq!(Occasion::Birthday.as_str(), "Birthday");
        assert_eq!(Occasion::Anniversary.as_str(), "Anniversary");
    }

    #[test]
    fn all_in_display_order() {
        let labels: Vec<&str> = Occasion::ALL.iter().map(|o| o.as_str()).collect();
        assert_eq!(labels, vec!["Birthday", "Anniversary"]);
    }

    #[test]
    fn display_matches_label() {
        assert_eq!(Occasion::Anniversary.to_string(), "Anniversary");
    }
}
