mod suggestion_client;

pub use suggestion_client::{SuggestionApiClient, SuggestionClientError};
