mod ticket;

pub use ticket::{Ticket, TicketStatus};
