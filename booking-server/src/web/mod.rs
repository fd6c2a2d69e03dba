//! Web layer for the booking site.
//!
//! Serves the home and booking pages and accepts form submissions,
//! binding the form core to HTTP.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::create_router;
pub use state::{AppState, ReservationLog};
pub use templates::*;
