//! Request/response DTOs for the web layer.

use serde::{Deserialize, Serialize};

use crate::domain::BookingDraft;
use crate::form::{Field, FormView};

/// Booking submission payload, from the HTML form or the JSON API.
///
/// Missing fields default to empty strings so the validators report
/// them as required rather than the request failing to parse.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BookingRequest {
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub times: String,
    #[serde(default)]
    pub guests: String,
    #[serde(default)]
    pub occasion: String,
}

impl BookingRequest {
    /// The raw field values as a draft.
    pub fn into_draft(self) -> BookingDraft {
        BookingDraft {
            date: self.date,
            times: self.times,
            guests: self.guests,
            occasion: self.occasion,
        }
    }
}

/// JSON body for an accepted booking.
#[derive(Debug, Serialize)]
pub struct BookingAccepted {
    pub date: String,
    pub times: String,
    pub guests: String,
    pub occasion: String,
}

impl BookingAccepted {
    pub fn from_draft(draft: &BookingDraft) -> Self {
        Self {
            date: draft.date.clone(),
            times: draft.times.clone(),
            guests: draft.guests.clone(),
            occasion: draft.occasion.clone(),
        }
    }
}

/// JSON body for a booking rejected by validation.
#[derive(Debug, Serialize)]
pub struct BookingRejected {
    pub errors: Vec<FieldErrorBody>,
}

impl BookingRejected {
    /// Collect the displayed errors from a form snapshot.
    pub fn from_view(view: &FormView) -> Self {
        let errors = Field::ALL
            .iter()
            .filter_map(|&field| {
                view.error(field).map(|message| FieldErrorBody {
                    field: field.name(),
                    message: message.to_string(),
                })
            })
            .collect();
        Self { errors }
    }
}

/// One field's validation failure.
#[derive(Debug, Serialize)]
pub struct FieldErrorBody {
    pub field: &'static str,
    pub message: String,
}

/// JSON error body for request-level failures.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
