//! Askama templates for the booking site.

use askama::Template;

use crate::domain::{BookingDraft, Occasion};
use crate::form::{Field, FormView};
use crate::times::AvailableTimes;

// ============================================================================
// Page Templates (extend base.html)
// ============================================================================

/// Home page.
#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate;

/// Booking page with the reservation form.
#[derive(Template)]
#[template(path = "booking.html")]
pub struct BookingTemplate {
    pub form: BookingFormView,
}

/// Confirmation page after a successful booking.
#[derive(Template)]
#[template(path = "confirmation.html")]
pub struct ConfirmationTemplate {
    pub booking: BookingView,
}

// ============================================================================
// View Models (for templates)
// ============================================================================

/// One field's value and displayed error.
#[derive(Debug, Clone, Default)]
pub struct FieldView {
    pub value: String,
    pub error: Option<String>,
}

impl FieldView {
    /// Whether an inline error should be shown beneath the field.
    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    /// The inline error text (empty when there is none).
    pub fn message(&self) -> &str {
        self.error.as_deref().unwrap_or("")
    }

    /// Whether `option` is the field's current value, for marking the
    /// selected entry of a selector.
    pub fn selected(&self, option: &str) -> bool {
        self.value == option
    }
}

/// Booking form view model: field values, inline errors, selector
/// options, and the submit control's disabled state.
#[derive(Debug, Clone)]
pub struct BookingFormView {
    pub date: FieldView,
    pub times: FieldView,
    pub guests: FieldView,
    pub occasion: FieldView,
    pub available_times: Vec<String>,
    pub occasions: Vec<String>,
    pub is_submitting: bool,
}

impl BookingFormView {
    /// An untouched form for a fresh booking page.
    pub fn empty(available: &AvailableTimes) -> Self {
        Self {
            date: FieldView::default(),
            times: FieldView::default(),
            guests: FieldView::default(),
            occasion: FieldView::default(),
            available_times: available.as_slice().to_vec(),
            occasions: Occasion::ALL.iter().map(|o| o.as_str().to_string()).collect(),
            is_submitting: false,
        }
    }

    /// Build from a controller snapshot.
    pub fn from_form(view: &FormView, available: &AvailableTimes) -> Self {
        let field = |f: Field| FieldView {
            value: f.value(&view.values).to_string(),
            error: view.error(f).map(|e| e.to_string()),
        };
        Self {
            date: field(Field::Date),
            times: field(Field::Times),
            guests: field(Field::Guests),
            occasion: field(Field::Occasion),
            available_times: available.as_slice().to_vec(),
            occasions: Occasion::ALL.iter().map(|o| o.as_str().to_string()).collect(),
            is_submitting: view.is_submitting,
        }
    }
}

/// Accepted booking view model for the confirmation page.
#[derive(Debug, Clone)]
pub struct BookingView {
    pub date: String,
    pub times: String,
    pub guests: String,
    pub occasion: String,
}

impl BookingView {
    pub fn from_draft(draft: &BookingDraft) -> Self {
        Self {
            date: draft.date.clone(),
            times: draft.times.clone(),
            guests: draft.guests.clone(),
            occasion: draft.occasion.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_form_has_no_errors_and_default_options() {
        let form = BookingFormView::empty(&AvailableTimes::default());

        assert!(!form.date.has_error());
        assert!(!form.times.has_error());
        assert!(!form.guests.has_error());
        assert!(!form.occasion.has_error());
        assert!(!form.is_submitting);
        assert_eq!(form.available_times.len(), 5);
        assert_eq!(form.occasions, vec!["Birthday", "Anniversary"]);
    }

    #[test]
    fn from_form_carries_values_and_errors() {
        let view = FormView {
            values: BookingDraft {
                date: "2020-01-01".into(),
                times: "19:00".into(),
                guests: "".into(),
                occasion: "".into(),
            },
            errors: [
                Some("Date cannot be in the past".into()),
                None,
                Some("Number of guests is required".into()),
                None,
            ],
            is_submitting: false,
        };

        let form = BookingFormView::from_form(&view, &AvailableTimes::default());

        assert_eq!(form.date.value, "2020-01-01");
        assert_eq!(form.date.message(), "Date cannot be in the past");
        assert!(!form.times.has_error());
        assert!(form.times.selected("19:00"));
        assert!(!form.times.selected("18:00"));
        assert!(form.guests.has_error());
        assert!(!form.occasion.has_error());
    }

    #[test]
    fn booking_view_echoes_draft() {
        let draft = BookingDraft {
            date: "2024-12-31".into(),
            times: "19:00".into(),
            guests: "4".into(),
            occasion: "Birthday".into(),
        };
        let view = BookingView::from_draft(&draft);
        assert_eq!(view.date, "2024-12-31");
        assert_eq!(view.guests, "4");
    }

    #[test]
    fn booking_page_renders_inline_error() {
        let mut view = FormView {
            values: BookingDraft::default(),
            errors: [None, None, None, None],
            is_submitting: false,
        };
        view.errors[0] = Some("Date is required".into());

        let html = BookingTemplate {
            form: BookingFormView::from_form(&view, &AvailableTimes::default()),
        }
        .render()
        .unwrap();

        assert!(html.contains("Date is required"));
        assert!(html.contains("Make Your Reservation"));
        assert!(!html.contains("disabled"));
    }

    #[test]
    fn booking_page_disables_submit_while_submitting() {
        let view = FormView {
            values: BookingDraft::default(),
            errors: [None, None, None, None],
            is_submitting: true,
        };

        let html = BookingTemplate {
            form: BookingFormView::from_form(&view, &AvailableTimes::default()),
        }
        .render()
        .unwrap();

        assert!(html.contains("disabled"));
    }

    #[test]
    fn booking_page_lists_available_times() {
        let times = AvailableTimes::new(vec!["12:00".into(), "12:30".into()]);
        let html = BookingTemplate {
            form: BookingFormView::empty(&times),
        }
        .render()
        .unwrap();

        assert!(html.contains("12:00"));
        assert!(html.contains("12:30"));
        assert!(!html.contains("17:00"));
    }
}
