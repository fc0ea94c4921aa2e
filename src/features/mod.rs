pub mod credentials;
pub mod suggestions;
pub mod tickets;
