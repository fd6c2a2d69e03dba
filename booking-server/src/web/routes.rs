//! HTTP route handlers.

use std::sync::Arc;

use askama::Template;
use axum::body::Bytes;
use axum::{
    Form, Json, Router,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use chrono::Local;
use tower_http::services::ServeDir;
use tracing::{error, warn};

use crate::form::{BookingForm, Field, FormView, SubmitOutcome};
use crate::times::{AvailableTimes, TimesRefresher};

use super::dto::*;
use super::state::AppState;
use super::templates::*;

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .route("/", get(home_page))
        .route("/health", get(health))
        .route("/booking-a-table", get(booking_page).post(submit_booking))
        .route("/api/bookings", post(api_create_booking))
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Home page.
async fn home_page() -> impl IntoResponse {
    Html(
        HomeTemplate
            .render()
            .unwrap_or_else(|e| format!("Template error: {}", e)),
    )
}

/// Booking page with an untouched form.
async fn booking_page(State(state): State<AppState>) -> impl IntoResponse {
    let times = state.times.times_for(Local::now().date_naive());
    let template = BookingTemplate {
        form: BookingFormView::empty(&times),
    };
    Html(
        template
            .render()
            .unwrap_or_else(|e| format!("Template error: {}", e)),
    )
}

/// Handle an HTML form submission of the booking page.
async fn submit_booking(
    State(state): State<AppState>,
    Form(req): Form<BookingRequest>,
) -> Result<Response, AppError> {
    let (outcome, view, times) = run_booking(&state, req).await;

    match outcome {
        SubmitOutcome::Accepted => {
            let template = ConfirmationTemplate {
                booking: BookingView::from_draft(&view.values),
            };
            let html = template.render().map_err(AppError::from)?;
            Ok(Html(html).into_response())
        }
        SubmitOutcome::Invalid => {
            // Re-render the form with the inline errors visible.
            let template = BookingTemplate {
                form: BookingFormView::from_form(&view, &times),
            };
            let html = template.render().map_err(AppError::from)?;
            Ok((StatusCode::UNPROCESSABLE_ENTITY, Html(html)).into_response())
        }
        SubmitOutcome::InFlight => Err(AppError::Internal {
            message: "a submission was already in flight".to_string(),
        }),
    }
}

/// Handle a JSON booking submission.
async fn api_create_booking(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Response, AppError> {
    // Parse JSON manually so we can log the body on failure
    let req: BookingRequest = serde_json::from_slice(&body).map_err(|e| {
        warn!("invalid booking JSON: {e}");
        AppError::BadRequest {
            message: format!("Invalid JSON: {e}"),
        }
    })?;

    let (outcome, view, _times) = run_booking(&state, req).await;

    match outcome {
        SubmitOutcome::Accepted => Ok((
            StatusCode::CREATED,
            Json(BookingAccepted::from_draft(&view.values)),
        )
            .into_response()),
        SubmitOutcome::Invalid => Ok((
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(BookingRejected::from_view(&view)),
        )
            .into_response()),
        SubmitOutcome::InFlight => Err(AppError::Internal {
            message: "a submission was already in flight".to_string(),
        }),
    }
}

/// Replay a request through the form controller and submit it.
///
/// Feeding the values through `change` rather than constructing state
/// directly means the date listener fires and per-field errors are
/// computed exactly as the interactive form computes them. Returns the
/// outcome, the final form snapshot, and the available times for the
/// requested date.
async fn run_booking(
    state: &AppState,
    req: BookingRequest,
) -> (SubmitOutcome, FormView, AvailableTimes) {
    let refresher = Arc::new(TimesRefresher::new(state.times.clone()));
    let mut form = BookingForm::new(refresher.clone(), state.reservations.clone());

    let draft = req.into_draft();
    form.change(Field::Date, &draft.date);
    form.change(Field::Times, &draft.times);
    form.change(Field::Guests, &draft.guests);
    form.change(Field::Occasion, &draft.occasion);

    let outcome = form.submit().await;
    (outcome, form.view(), refresher.current())
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Internal { message: String },
}

impl From<askama::Error> for AppError {
    fn from(e: askama::Error) -> Self {
        AppError::Internal {
            message: format!("Template error: {}", e),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        error!("[{status}] {message}");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use crate::times::FixedTimes;

    use super::*;

    fn state() -> AppState {
        AppState::new(FixedTimes::default())
    }

    fn future_request() -> BookingRequest {
        BookingRequest {
            date: "2099-12-31".into(),
            times: "19:00".into(),
            guests: "4".into(),
            occasion: "Birthday".into(),
        }
    }

    #[tokio::test]
    async fn valid_request_is_accepted_and_logged() {
        let state = state();
        let (outcome, view, _) = run_booking(&state, future_request()).await;

        assert_eq!(outcome, SubmitOutcome::Accepted);
        assert_eq!(view.values.date, "2099-12-31");

        let accepted = state.reservations.accepted();
        assert_eq!(accepted.len(), 1);
        assert_eq!(accepted[0].times, "19:00");
    }

    #[tokio::test]
    async fn invalid_request_reports_field_errors() {
        let state = state();
        let req = BookingRequest {
            guests: "11".into(),
            ..future_request()
        };

        let (outcome, view, _) = run_booking(&state, req).await;

        assert_eq!(outcome, SubmitOutcome::Invalid);
        assert_eq!(
            view.error(Field::Guests),
            Some("Cannot have more than 10 guests")
        );
        assert!(state.reservations.accepted().is_empty());

        let rejected = BookingRejected::from_view(&view);
        assert_eq!(rejected.errors.len(), 1);
        assert_eq!(rejected.errors[0].field, "guests");
    }

    #[tokio::test]
    async fn empty_request_rejects_every_field() {
        let state = state();
        let (outcome, view, _) = run_booking(&state, BookingRequest::default()).await;

        assert_eq!(outcome, SubmitOutcome::Invalid);
        for field in Field::ALL {
            assert!(view.error(field).is_some());
        }
    }
}
