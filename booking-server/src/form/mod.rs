//! The booking form core: field validators and the form state
//! controller.
//!
//! This is the heart of the application. [`validate`] holds the pure
//! per-field rules; [`BookingForm`] owns the draft, the per-field
//! touched/error state and the submitting flag, and drives the two
//! external collaborators (the date-change listener and the submission
//! handler). Everything here is independent of the web layer and fully
//! testable with the recording mocks in [`mock`].

mod controller;
mod field;
pub mod mock;
pub mod validate;

pub use controller::{
    BookingForm, DateListener, FormView, SubmissionHandler, SubmitError, SubmitOutcome,
    SubmittingFlag,
};
pub use field::Field;
