use serde::Serialize;

use crate::features::tickets::models::Ticket;
use crate::shared::constants::SUGGESTION_FALLBACK;

/// Body posted to the suggestion API; exactly these two fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuggestionPayload {
    pub text: String,
    pub category: String,
}

impl SuggestionPayload {
    pub fn new(text: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            category: category.into(),
        }
    }
}

impl From<&Ticket> for SuggestionPayload {
    fn from(ticket: &Ticket) -> Self {
        Self::new(ticket.description.clone(), ticket.category.clone())
    }
}

/// What gets displayed under a ticket
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuggestionOutcome {
    Suggestion(String),
    Fallback,
}

impl SuggestionOutcome {
    pub fn message(&self) -> &str {
        match self {
            SuggestionOutcome::Suggestion(text) => text,
            SuggestionOutcome::Fallback => SUGGESTION_FALLBACK,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, SuggestionOutcome::Fallback)
    }
}
