//! Support tickets, read-only.
//!
//! Tickets are created and updated by the front office; this service only
//! reads them to list, show, and feed the suggestion handler.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/tickets` | List tickets (`status`, `category`, `search`, paging) |
//! | GET | `/api/tickets/{id}` | Get one ticket |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::{PgTicketRepository, TicketService};
