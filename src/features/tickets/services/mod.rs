mod ticket_repository;
mod ticket_service;

pub use ticket_repository::{PgTicketRepository, TicketRepository};
pub use ticket_service::TicketService;
