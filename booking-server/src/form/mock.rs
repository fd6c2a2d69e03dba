//! Recording collaborators for exercising the form without a real
//! submission pipeline.
//!
//! Clones share their recordings, so a test can keep one clone and
//! hand another to the form.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use futures::future::BoxFuture;

use crate::domain::BookingDraft;

use super::controller::{DateListener, SubmissionHandler, SubmitError, SubmittingFlag};

/// Date listener that records every raw value it receives.
#[derive(Debug, Clone, Default)]
pub struct RecordingListener {
    changes: Arc<Mutex<Vec<String>>>,
}

impl RecordingListener {
    pub fn new() -> Self {
        Self::default()
    }

    /// All raw date values received so far, in order.
    pub fn changes(&self) -> Vec<String> {
        self.changes.lock().unwrap().clone()
    }
}

impl DateListener for RecordingListener {
    fn date_changed(&self, raw: &str) {
        self.changes.lock().unwrap().push(raw.to_string());
    }
}

/// Submission handler that records every draft it receives.
///
/// Can optionally delay its completion, fail, and observe a
/// [`SubmittingFlag`] while it runs, for exercising the asynchronous
/// and failure paths of the controller.
#[derive(Debug, Clone, Default)]
pub struct RecordingHandler {
    submissions: Arc<Mutex<Vec<BookingDraft>>>,
    observed: Arc<Mutex<Vec<bool>>>,
    flag: Option<SubmittingFlag>,
    delay: Option<Duration>,
    fail: bool,
}

impl RecordingHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the given flag's value at dispatch (and again after any
    /// configured delay).
    pub fn observing(mut self, flag: SubmittingFlag) -> Self {
        self.flag = Some(flag);
        self
    }

    /// Sleep for `delay` before completing, making the submission
    /// genuinely asynchronous.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Complete with an error instead of success.
    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }

    /// All drafts received so far, in order.
    pub fn submissions(&self) -> Vec<BookingDraft> {
        self.submissions.lock().unwrap().clone()
    }

    /// Flag values observed while handling submissions.
    pub fn observed(&self) -> Vec<bool> {
        self.observed.lock().unwrap().clone()
    }
}

impl SubmissionHandler for RecordingHandler {
    fn submit(&self, draft: BookingDraft) -> BoxFuture<'static, Result<(), SubmitError>> {
        let this = self.clone();
        Box::pin(async move {
            if let Some(flag) = &this.flag {
                this.observed.lock().unwrap().push(flag.get());
            }

            if let Some(delay) = this.delay {
                tokio::time::sleep(delay).await;
                if let Some(flag) = &this.flag {
                    this.observed.lock().unwrap().push(flag.get());
                }
            }

            this.submissions.lock().unwrap().push(draft);

            if this.fail {
                Err(SubmitError("recording handler configured to fail".into()))
            } else {
                Ok(())
            }
        })
    }
}
