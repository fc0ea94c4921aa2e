//! AI resolution suggestions for help desk tickets.
//!
//! The ticket's description and category are posted to the configured
//! suggestion endpoint. Anything other than an HTTP 200 carrying a
//! `suggestion` string is shown as the fixed fallback message.

pub mod clients;
pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::TicketSuggestionHandler;
