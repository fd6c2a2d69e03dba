//! Table booking server for the Little Lemon restaurant site.
//!
//! A small web application: a home page, a booking page, and at its
//! core the booking form's field validation and submission state
//! machine.

pub mod domain;
pub mod form;
pub mod times;
pub mod web;
