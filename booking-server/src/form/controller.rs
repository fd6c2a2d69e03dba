//! The booking form state controller.
//!
//! Owns the draft, the per-field touched/error state and the
//! submitting flag, and orchestrates the two external collaborators:
//! the date-change listener and the submission handler. All state
//! transitions happen on discrete events (change, blur, submit); the
//! only asynchronous boundary is awaiting the submission handler.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use chrono::{Local, NaiveDate};
use futures::future::BoxFuture;
use tracing::{debug, warn};

use crate::domain::BookingDraft;

use super::field::Field;
use super::validate;

/// Error reported by a failed submission handler.
///
/// The controller does not act on the failure beyond logging it; the
/// outcome of a submission belongs to the collaborator, not the form.
#[derive(Debug, Clone, thiserror::Error)]
#[error("submission failed: {0}")]
pub struct SubmitError(pub String);

/// Collaborator notified whenever the date field changes.
///
/// Receives the raw value on every change, valid or not. The receiver
/// is responsible for recomputing the available times for that date.
pub trait DateListener: Send + Sync {
    fn date_changed(&self, raw: &str);
}

/// The externally supplied submission callback.
///
/// May complete synchronously or asynchronously; the controller awaits
/// completion, keeps the form in the submitting state for the whole
/// duration, and inspects the result only to log a failure.
pub trait SubmissionHandler: Send + Sync {
    fn submit(&self, draft: BookingDraft) -> BoxFuture<'static, Result<(), SubmitError>>;
}

/// Outcome of a submit attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Every field validated and the submission handler ran to
    /// completion.
    Accepted,

    /// At least one field failed validation; the handler was not
    /// invoked and the errors are left visible.
    Invalid,

    /// A submission was already in flight; the attempt was ignored.
    InFlight,
}

/// Shared handle to the submitting flag.
///
/// The view holds a clone so the disabled state of the submit control
/// is observable while the controller is awaiting the handler.
#[derive(Debug, Clone, Default)]
pub struct SubmittingFlag(Arc<AtomicBool>);

impl SubmittingFlag {
    /// Whether a submission is currently in flight.
    pub fn get(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    fn set(&self, value: bool) {
        self.0.store(value, Ordering::SeqCst);
    }
}

/// Clears the submitting flag when dropped, so a failing or panicking
/// handler can never leave the form stuck in the disabled state.
struct SubmitGuard(SubmittingFlag);

impl Drop for SubmitGuard {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

/// Per-field validation state.
///
/// `error` is `Some` only once validation has run for the field (on
/// blur, submit, or a change after the field was first touched) and
/// the current value fails its rule.
#[derive(Debug, Clone, Default)]
struct FieldState {
    touched: bool,
    error: Option<String>,
}

/// Read-only projection of the form state for the view layer.
#[derive(Debug, Clone)]
pub struct FormView {
    /// Current raw field values.
    pub values: BookingDraft,

    /// Error message per field, present only for touched fields whose
    /// current value fails validation.
    pub errors: [Option<String>; Field::COUNT],

    /// Whether a submission is in flight; the submit control is
    /// disabled exactly while this is true.
    pub is_submitting: bool,
}

impl FormView {
    /// The displayed error for a field, if any.
    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors[field.index()].as_deref()
    }
}

/// The booking form state machine.
pub struct BookingForm {
    draft: BookingDraft,
    fields: [FieldState; Field::COUNT],
    submitting: SubmittingFlag,
    today: NaiveDate,
    listener: Arc<dyn DateListener>,
    handler: Arc<dyn SubmissionHandler>,
}

impl BookingForm {
    /// Create a fresh form anchored to the local date.
    pub fn new(listener: Arc<dyn DateListener>, handler: Arc<dyn SubmissionHandler>) -> Self {
        Self::with_today(Local::now().date_naive(), listener, handler)
    }

    /// Create a fresh form with an explicit "today" for the
    /// date-not-in-past rule.
    pub fn with_today(
        today: NaiveDate,
        listener: Arc<dyn DateListener>,
        handler: Arc<dyn SubmissionHandler>,
    ) -> Self {
        Self {
            draft: BookingDraft::default(),
            fields: Default::default(),
            submitting: SubmittingFlag::default(),
            today,
            listener,
            handler,
        }
    }

    /// Record a change to a field's raw value.
    ///
    /// The draft is updated unconditionally. Once a field has been
    /// touched, a change also re-runs its validator, so correcting a
    /// value clears its error without waiting for another blur. A
    /// change to the date field always notifies the date listener with
    /// the raw value, valid or not.
    pub fn change(&mut self, field: Field, raw: &str) {
        field.set_value(&mut self.draft, raw.to_string());

        let state = &mut self.fields[field.index()];
        if state.touched {
            state.error = validate::validate(field, field.value(&self.draft), self.today);
        }

        if field == Field::Date {
            self.listener.date_changed(raw);
        }
    }

    /// Record that a field lost focus: mark it touched and validate
    /// its current value.
    pub fn blur(&mut self, field: Field) {
        let state = &mut self.fields[field.index()];
        state.touched = true;
        state.error = validate::validate(field, field.value(&self.draft), self.today);
    }

    /// Attempt to submit the form.
    ///
    /// Marks every field touched and validates it. If anything fails,
    /// returns [`SubmitOutcome::Invalid`] without invoking the handler
    /// and leaves the errors visible. Otherwise the handler receives a
    /// clone of the draft; the submitting flag stays set for the full
    /// duration of the call and is cleared on completion, success or
    /// failure. A racing submit while one is in flight is ignored, so
    /// at most one submission is ever outstanding.
    pub async fn submit(&mut self) -> SubmitOutcome {
        if self.submitting.get() {
            debug!("ignoring submit while a submission is in flight");
            return SubmitOutcome::InFlight;
        }

        let mut valid = true;
        for field in Field::ALL {
            let error = validate::validate(field, field.value(&self.draft), self.today);
            valid &= error.is_none();
            let state = &mut self.fields[field.index()];
            state.touched = true;
            state.error = error;
        }

        if !valid {
            return SubmitOutcome::Invalid;
        }

        self.submitting.set(true);
        let _guard = SubmitGuard(self.submitting.clone());

        if let Err(e) = self.handler.submit(self.draft.clone()).await {
            warn!("submission handler reported failure: {e}");
        }

        SubmitOutcome::Accepted
    }

    /// Snapshot the form state for the view layer.
    pub fn view(&self) -> FormView {
        let errors =
            std::array::from_fn(|i| self.fields[i].error.clone());
        FormView {
            values: self.draft.clone(),
            errors,
            is_submitting: self.submitting.get(),
        }
    }

    /// Shared handle to the submitting flag, for views that need to
    /// observe the in-flight state while `submit` is pending.
    pub fn submitting_flag(&self) -> SubmittingFlag {
        self.submitting.clone()
    }

    /// Whether a submission is currently in flight.
    pub fn is_submitting(&self) -> bool {
        self.submitting.get()
    }
}
