mod suggestion;

pub use suggestion::{SuggestionOutcome, SuggestionPayload};
