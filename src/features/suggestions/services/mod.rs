mod suggestion_handler;

pub use suggestion_handler::TicketSuggestionHandler;
