mod ticket_handler;

pub use ticket_handler::{__path_get_ticket, __path_list_tickets, get_ticket, list_tickets};
